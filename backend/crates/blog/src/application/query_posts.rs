//! Query Use Cases
//!
//! Read paths: listing, lookup by id, substring search over titles.

use std::sync::Arc;

use crate::domain::entity::{BlogPost, PostId};
use crate::domain::repository::BlogPostRepository;
use crate::error::{BlogError, BlogResult};

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: BlogPostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: BlogPostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All posts, newest first
    pub async fn execute(&self) -> BlogResult<Vec<BlogPost>> {
        self.repo.list_latest().await
    }
}

/// Get post use case
pub struct GetPostUseCase<R>
where
    R: BlogPostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: BlogPostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: PostId) -> BlogResult<BlogPost> {
        self.repo
            .find_by_id(&post_id)
            .await?
            .ok_or(BlogError::NotFound)
    }
}

/// Search posts use case
pub struct SearchPostsUseCase<R>
where
    R: BlogPostRepository,
{
    repo: Arc<R>,
}

impl<R> SearchPostsUseCase<R>
where
    R: BlogPostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Substring match on the title, newest first
    pub async fn execute(&self, needle: &str) -> BlogResult<Vec<BlogPost>> {
        self.repo.search_by_title(needle).await
    }
}
