//! Create Post Use Case

use std::sync::Arc;

use kernel::validation::{FieldRules, FieldSource, Rule, RuleSet};

use crate::domain::entity::BlogPost;
use crate::domain::repository::BlogPostRepository;
use crate::error::{BlogError, BlogResult};

/// Declarative rules shared by the create and update operations
pub(crate) static POST_RULES: RuleSet = RuleSet::new(&[
    FieldRules {
        field: "title",
        rules: &[Rule::Required, Rule::MaxChars(250)],
    },
    FieldRules {
        field: "content",
        rules: &[Rule::Required],
    },
]);

/// Post input (create and update share the same shape)
///
/// Fields are optional so that missing values surface as validation errors
/// rather than deserialization failures.
#[derive(Debug, Clone)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldSource for PostInput {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: BlogPostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: BlogPostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: PostInput) -> BlogResult<BlogPost> {
        let errors = POST_RULES.check(&input);
        if !errors.is_empty() {
            return Err(BlogError::Validation(errors));
        }

        let post = BlogPost::new(
            input.title.unwrap_or_default(),
            input.content.unwrap_or_default(),
        );

        self.repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, "Blog post created");

        Ok(post)
    }
}
