//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ErrorBag;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Field-level validation failure; the complete error map is surfaced
    /// verbatim to the caller
    #[error("Validation Error!")]
    Validation(ErrorBag),

    /// Email already registered (unique constraint); normally folded into
    /// a `Validation` bag before it reaches the caller
    #[error("The email has already been taken.")]
    EmailTaken,

    /// Invalid credentials. The message is identical for unknown email and
    /// wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid bearer token
    #[error("Unauthenticated.")]
    Unauthenticated,

    /// Token issuance requested for a nonexistent user. This is an internal
    /// precondition violation, never a user-facing case.
    #[error("Token issued for unknown user")]
    UnknownUser,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::FORBIDDEN,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::UnknownUser | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::Forbidden,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::UnknownUser | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(errors) => {
                AppError::new(self.kind(), "Validation Error!").with_details(errors.to_value())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownUser => {
                tracing::error!("Token issuance for unknown user");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthenticated => {
                tracing::warn!("Unauthenticated request to protected endpoint");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
