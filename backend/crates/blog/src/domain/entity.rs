//! Domain Entities
//!
//! Core business entities for the blog domain.

use chrono::{DateTime, Utc};
use kernel::id::Id;

pub struct PostMarker;
pub type PostId = Id<PostMarker>;

/// Blog post entity
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub post_id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            post_id: PostId::new(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content, touching the updated timestamp
    pub fn apply(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}
