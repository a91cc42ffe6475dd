//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{BlogPost, PostId};
use crate::error::BlogResult;

/// Blog post repository trait
#[trait_variant::make(BlogPostRepository: Send)]
pub trait LocalBlogPostRepository {
    /// Create a new post
    async fn create(&self, post: &BlogPost) -> BlogResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>>;

    /// All posts, newest first
    async fn list_latest(&self) -> BlogResult<Vec<BlogPost>>;

    /// Update title/content of an existing post
    async fn update(&self, post: &BlogPost) -> BlogResult<()>;

    /// Delete a post; returns false when it did not exist
    async fn delete(&self, post_id: &PostId) -> BlogResult<bool>;

    /// Posts whose title contains the needle (case-insensitive), newest first
    async fn search_by_title(&self, needle: &str) -> BlogResult<Vec<BlogPost>>;
}
