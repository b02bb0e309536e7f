//! Armstrong Error Types
//!
//! Integrates with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::store_error, kind::ErrorKind};
use thiserror::Error;

/// Armstrong-specific result type alias
pub type ArmstrongResult<T> = Result<T, ArmstrongError>;

#[derive(Debug, Error)]
pub enum ArmstrongError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ArmstrongError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ArmstrongError::Database(e) => store_error(e).kind(),
            ArmstrongError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; failure details never reach the client
    pub fn to_app_error(&self) -> AppError {
        match self {
            ArmstrongError::Database(e) => store_error(e),
            ArmstrongError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    fn log(&self) {
        match self {
            ArmstrongError::Database(e) => {
                tracing::error!(error = %e, "Armstrong database error");
            }
            ArmstrongError::Internal(msg) => {
                tracing::error!(message = %msg, "Armstrong internal error");
            }
        }
    }
}

impl IntoResponse for ArmstrongError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
