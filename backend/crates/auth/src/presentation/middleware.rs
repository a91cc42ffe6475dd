//! Auth Middleware
//!
//! Middleware for requiring bearer-token authentication on protected routes.
//! Handlers behind it receive the already-verified identity as a
//! [`CurrentUser`] request extension; requests that fail never reach them.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::AuthenticateTokenUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// The authenticated user, stored in request extensions by the middleware
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid bearer token
pub async fn require_bearer_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer_token(req.headers()) else {
        return Err(AuthError::Unauthenticated.into_response());
    };

    let use_case = AuthenticateTokenUseCase::new(state.repo.clone(), state.repo.clone());

    let user = match use_case.execute(&token).await {
        Ok(user) => user,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
