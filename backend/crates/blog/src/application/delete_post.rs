//! Delete Post Use Case

use std::sync::Arc;

use crate::domain::entity::PostId;
use crate::domain::repository::BlogPostRepository;
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: BlogPostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: BlogPostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: PostId) -> BlogResult<()> {
        if !self.repo.delete(&post_id).await? {
            return Err(BlogError::NotFound);
        }

        tracing::info!(post_id = %post_id, "Blog post deleted");

        Ok(())
    }
}
