//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::store_error, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already registered
    #[error("Email already exists")]
    EmailTaken,

    /// Unknown email, missing password or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No usable `Authorization` header
    #[error("Authorization required")]
    AuthorizationRequired,

    /// Token failed validation (signature, format or expiry)
    #[error("Invalid token")]
    InvalidToken,

    /// Authenticated but not an administrator
    #[error("Admin access required")]
    AdminRequired,

    /// Handler reached without an identity in the request
    #[error("Authentication required")]
    IdentityMissing,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Malformed input (email format, password policy)
    #[error("{}", .0.message())]
    Validation(AppError),

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
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::AuthorizationRequired
            | AuthError::InvalidToken
            | AuthError::IdentityMissing => ErrorKind::Unauthorized,
            AuthError::AdminRequired => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(e) => store_error(e).kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Store and internal failures are reported with a generic detail.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(e) => store_error(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::Validation(e) => {
                let err = AppError::bad_request(e.message().to_string());
                match e.action() {
                    Some(action) => err.with_action(action.to_string()),
                    None => err,
                }
            }
            AuthError::AuthorizationRequired => AppError::new(self.kind(), self.to_string())
                .with_action("Send the token as `Authorization: Bearer <token>`"),
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
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid token");
            }
            AuthError::AdminRequired => {
                tracing::warn!("Non-admin access to admin route");
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
        if err.kind() == ErrorKind::BadRequest {
            AuthError::Validation(err)
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
