//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ErrorBag;
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Field-level validation failure; the complete error map is surfaced
    /// verbatim to the caller
    #[error("Validation Error!")]
    Validation(ErrorBag),

    /// Post does not exist. Rendered as a failed envelope with HTTP 200,
    /// keeping the public API contract.
    #[error("Blog post is not found!")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::Validation(_) => StatusCode::FORBIDDEN,
            BlogError::NotFound => StatusCode::OK,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::Validation(_) => ErrorKind::Forbidden,
            BlogError::NotFound => ErrorKind::NotFound,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            BlogError::Validation(errors) => {
                let envelope =
                    Envelope::failed("Validation Error!").with_data_value(errors.to_value());
                (StatusCode::FORBIDDEN, Json(envelope)).into_response()
            }
            BlogError::NotFound => {
                // Missing posts are reported inside a 200 response
                let envelope = Envelope::failed("Blog post is not found!");
                (StatusCode::OK, Json(envelope)).into_response()
            }
            BlogError::Database(_) | BlogError::Internal(_) => {
                AppError::new(self.kind(), self.to_string()).into_response()
            }
        }
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        BlogError::Internal(err.to_string())
    }
}
