//! Blog Router
//!
//! The returned router carries no authentication of its own; the app layer
//! wraps it with the bearer middleware.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::BlogPostRepository;
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository) -> Router {
    blog_router_generic(repo)
}

/// Create a generic Blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R) -> Router
where
    R: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::index::<R>).post(handlers::store::<R>))
        .route("/search/{title}", get(handlers::search::<R>))
        .route(
            "/{id}",
            get(handlers::show::<R>)
                .post(handlers::update::<R>)
                .delete(handlers::destroy::<R>),
        )
        .with_state(state)
}
