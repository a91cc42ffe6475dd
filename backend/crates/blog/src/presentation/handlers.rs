//! HTTP Handlers
//!
//! All routes here sit behind the bearer middleware applied at the app
//! layer; unauthenticated requests never reach these handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::envelope::Envelope;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, PostInput,
    SearchPostsUseCase, UpdatePostUseCase,
};
use crate::domain::entity::PostId;
use crate::domain::repository::BlogPostRepository;
use crate::error::BlogResult;
use crate::presentation::dto::{PostRequest, PostResponse};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Index
// ============================================================================

/// GET /api/blog
pub async fn index<R>(State(state): State<BlogAppState<R>>) -> BlogResult<impl IntoResponse>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    if posts.is_empty() {
        return Ok((StatusCode::OK, Envelope::failed("No blog posts found!")));
    }

    let data: Vec<PostResponse> = posts.iter().map(PostResponse::from).collect();
    let envelope = Envelope::success("Blog posts are retrieved successfully.").with_data(&data);

    Ok((StatusCode::OK, envelope))
}

// ============================================================================
// Store
// ============================================================================

/// POST /api/blog
pub async fn store<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<PostRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(PostInput {
            title: req.title,
            content: req.content,
        })
        .await?;

    let envelope =
        Envelope::success("Blog post is added successfully.").with_data(&PostResponse::from(&post));

    Ok((StatusCode::OK, envelope))
}

// ============================================================================
// Show
// ============================================================================

/// GET /api/blog/{id}
pub async fn show<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post = GetPostUseCase::new(state.repo.clone())
        .execute(PostId::from_uuid(id))
        .await?;

    let envelope = Envelope::success("Blog post is retrieved successfully.")
        .with_data(&PostResponse::from(&post));

    Ok((StatusCode::OK, envelope))
}

// ============================================================================
// Update
// ============================================================================

/// POST /api/blog/{id}
pub async fn update<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<PostRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post = UpdatePostUseCase::new(state.repo.clone())
        .execute(
            PostId::from_uuid(id),
            PostInput {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    let envelope = Envelope::success("Blog post is updated successfully.")
        .with_data(&PostResponse::from(&post));

    Ok((StatusCode::OK, envelope))
}

// ============================================================================
// Destroy
// ============================================================================

/// DELETE /api/blog/{id}
pub async fn destroy<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    DeletePostUseCase::new(state.repo.clone())
        .execute(PostId::from_uuid(id))
        .await?;

    Ok((
        StatusCode::OK,
        Envelope::success("Blog post is deleted successfully."),
    ))
}

// ============================================================================
// Search
// ============================================================================

/// GET /api/blog/search/{title}
pub async fn search<R>(
    State(state): State<BlogAppState<R>>,
    Path(title): Path<String>,
) -> BlogResult<impl IntoResponse>
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let posts = SearchPostsUseCase::new(state.repo.clone())
        .execute(&title)
        .await?;

    if posts.is_empty() {
        return Ok((StatusCode::OK, Envelope::failed("No blog posts found!")));
    }

    let data: Vec<PostResponse> = posts.iter().map(PostResponse::from).collect();
    let envelope = Envelope::success("Blog posts are retrieved successfully.").with_data(&data);

    Ok((StatusCode::OK, envelope))
}
