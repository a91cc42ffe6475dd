//! API DTOs (Data Transfer Objects)
//!
//! Wire field names are snake_case, matching the public API contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::BlogPost;

/// Request body for creating or updating a post
///
/// Fields default to `None` so missing values become field-level validation
/// errors instead of deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Post as exposed over the API
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&BlogPost> for PostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: *post.post_id.as_uuid(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
