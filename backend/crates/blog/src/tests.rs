//! Unit tests for the Blog crate
//!
//! Use-case flows run against an in-memory repository so CRUD and search
//! behavior is covered without a database.

use std::sync::{Arc, Mutex};

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, PostInput,
    SearchPostsUseCase, UpdatePostUseCase,
};
use crate::domain::entity::{BlogPost, PostId};
use crate::domain::repository::BlogPostRepository;
use crate::error::{BlogError, BlogResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemBlogStore {
    posts: Arc<Mutex<Vec<BlogPost>>>,
}

impl MemBlogStore {
    fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

impl BlogPostRepository for MemBlogStore {
    async fn create(&self, post: &BlogPost) -> BlogResult<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.post_id == *post_id)
            .cloned())
    }

    async fn list_latest(&self) -> BlogResult<Vec<BlogPost>> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update(&self, post: &BlogPost) -> BlogResult<()> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(existing) = posts.iter_mut().find(|p| p.post_id == post.post_id) {
            *existing = post.clone();
        }
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<bool> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.post_id != *post_id);
        Ok(posts.len() < before)
    }

    async fn search_by_title(&self, needle: &str) -> BlogResult<Vec<BlogPost>> {
        let needle = needle.to_lowercase();
        let mut posts: Vec<BlogPost> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn post_input(title: &str, content: &str) -> PostInput {
    PostInput {
        title: Some(title.to_string()),
        content: Some(content.to_string()),
    }
}

async fn create(store: &Arc<MemBlogStore>, title: &str) -> BlogPost {
    CreatePostUseCase::new(store.clone())
        .execute(post_input(title, "Content"))
        .await
        .unwrap()
}

// ============================================================================
// CRUD flows
// ============================================================================

#[cfg(test)]
mod crud_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = Arc::new(MemBlogStore::default());
        let post = create(&store, "First post").await;

        let found = GetPostUseCase::new(store.clone())
            .execute(post.post_id)
            .await
            .unwrap();

        assert_eq!(found.title, "First post");
        assert_eq!(found.content, "Content");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = Arc::new(MemBlogStore::default());

        let err = GetPostUseCase::new(store.clone())
            .execute(PostId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, BlogError::NotFound));
    }

    #[tokio::test]
    async fn test_create_validation_complete_error_set() {
        let store = Arc::new(MemBlogStore::default());

        let err = CreatePostUseCase::new(store.clone())
            .execute(PostInput {
                title: None,
                content: None,
            })
            .await
            .unwrap_err();

        match err {
            BlogError::Validation(errors) => {
                assert_eq!(
                    errors.get("title").unwrap(),
                    &["The title field is required.".to_string()]
                );
                assert_eq!(
                    errors.get("content").unwrap(),
                    &["The content field is required.".to_string()]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_create_title_too_long() {
        let store = Arc::new(MemBlogStore::default());

        let err = CreatePostUseCase::new(store.clone())
            .execute(PostInput {
                title: Some("a".repeat(251)),
                content: Some("Content".to_string()),
            })
            .await
            .unwrap_err();

        match err {
            BlogError::Validation(errors) => {
                assert_eq!(
                    errors.get("title").unwrap(),
                    &["The title must not be greater than 250 characters.".to_string()]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = Arc::new(MemBlogStore::default());
        let post = create(&store, "Old title").await;

        let updated = UpdatePostUseCase::new(store.clone())
            .execute(post.post_id, post_input("New title", "New content"))
            .await
            .unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.content, "New content");
        assert_eq!(updated.created_at, post.created_at);

        let found = GetPostUseCase::new(store.clone())
            .execute(post.post_id)
            .await
            .unwrap();
        assert_eq!(found.title, "New title");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = Arc::new(MemBlogStore::default());

        let err = UpdatePostUseCase::new(store.clone())
            .execute(PostId::new(), post_input("Title", "Content"))
            .await
            .unwrap_err();

        assert!(matches!(err, BlogError::NotFound));
    }

    #[tokio::test]
    async fn test_update_validation_runs_before_lookup() {
        let store = Arc::new(MemBlogStore::default());

        // Invalid input wins over the missing post
        let err = UpdatePostUseCase::new(store.clone())
            .execute(
                PostId::new(),
                PostInput {
                    title: None,
                    content: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = Arc::new(MemBlogStore::default());
        let post = create(&store, "Doomed").await;

        DeletePostUseCase::new(store.clone())
            .execute(post.post_id)
            .await
            .unwrap();
        assert_eq!(store.len(), 0);

        // Deleting again reports not found
        let err = DeletePostUseCase::new(store.clone())
            .execute(post.post_id)
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::NotFound));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = Arc::new(MemBlogStore::default());
        create(&store, "First").await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        create(&store, "Second").await;

        let posts = ListPostsUseCase::new(store.clone()).execute().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Second");
        assert_eq!(posts[1].title, "First");
    }
}

// ============================================================================
// Search
// ============================================================================

#[cfg(test)]
mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_substring() {
        let store = Arc::new(MemBlogStore::default());
        create(&store, "Cooking with Rust").await;
        create(&store, "Gardening basics").await;

        let found = SearchPostsUseCase::new(store.clone())
            .execute("Rust")
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Cooking with Rust");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = Arc::new(MemBlogStore::default());
        create(&store, "Cooking with Rust").await;

        let found = SearchPostsUseCase::new(store.clone())
            .execute("rust")
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty() {
        let store = Arc::new(MemBlogStore::default());
        create(&store, "Cooking with Rust").await;

        let found = SearchPostsUseCase::new(store.clone())
            .execute("Haskell")
            .await
            .unwrap();

        assert!(found.is_empty());
    }
}

// ============================================================================
// Error mapping
// ============================================================================

#[cfg(test)]
mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::validation::ErrorBag;

    #[test]
    fn test_error_into_response_status_codes() {
        let mut bag = ErrorBag::new();
        bag.add("title", "The title field is required.");

        let test_cases: Vec<(BlogError, StatusCode)> = vec![
            (BlogError::Validation(bag), StatusCode::FORBIDDEN),
            // Missing posts are reported inside a 200 response
            (BlogError::NotFound, StatusCode::OK),
            (
                BlogError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(BlogError::NotFound.to_string(), "Blog post is not found!");
    }
}
