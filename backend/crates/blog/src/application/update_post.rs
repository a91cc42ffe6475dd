//! Update Post Use Case

use std::sync::Arc;

use crate::application::create_post::{POST_RULES, PostInput};
use crate::domain::entity::{BlogPost, PostId};
use crate::domain::repository::BlogPostRepository;
use crate::error::{BlogError, BlogResult};

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: BlogPostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: BlogPostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validation runs before the existence check, matching the create path
    pub async fn execute(&self, post_id: PostId, input: PostInput) -> BlogResult<BlogPost> {
        let errors = POST_RULES.check(&input);
        if !errors.is_empty() {
            return Err(BlogError::Validation(errors));
        }

        let mut post = self
            .repo
            .find_by_id(&post_id)
            .await?
            .ok_or(BlogError::NotFound)?;

        post.apply(
            input.title.unwrap_or_default(),
            input.content.unwrap_or_default(),
        );

        self.repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, "Blog post updated");

        Ok(post)
    }
}
