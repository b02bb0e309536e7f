//! API DTOs (Data Transfer Objects)
//!
//! Request types carrying a password do not derive `Debug`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

/// `POST /users`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

/// `POST /register`
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login`
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Outbound user representation; there is no password field
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.get(),
            is_admin: user.is_admin(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// `POST /login` response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
