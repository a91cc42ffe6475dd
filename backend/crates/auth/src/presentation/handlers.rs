//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use kernel::envelope::Envelope;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{AuthData, LoginRequest, RegisterRequest, UserDto};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
        password_confirmation: req.password_confirmation,
    };

    let output = use_case.execute(input).await?;

    let envelope = Envelope::success("User is created successfully.").with_data(&AuthData {
        token: output.token,
        user: UserDto::from(&output.user),
    });

    Ok((StatusCode::CREATED, envelope))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let envelope = Envelope::success("User is logged in successfully.").with_data(&AuthData {
        token: output.token,
        user: UserDto::from(&output.user),
    });

    Ok((StatusCode::OK, envelope))
}

// ============================================================================
// Logout (requires authentication)
// ============================================================================

/// POST /api/logout
///
/// The middleware resolved the bearer token; the authenticated identity is
/// passed into the use case explicitly.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());
    use_case.execute(current.0.user_id).await?;

    Ok((
        StatusCode::OK,
        Envelope::success("User is logged out successfully"),
    ))
}

// ============================================================================
// Current User (requires authentication)
// ============================================================================

/// GET /api/user
pub async fn current_user<R>(
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let envelope =
        Envelope::success("User is retrieved successfully.").with_data(&UserDto::from(&current.0));

    Ok((StatusCode::OK, envelope))
}
