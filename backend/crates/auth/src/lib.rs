//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, access gate, router
//!
//! ## Features
//! - Registration with email + password, password-less user creation
//! - Login issuing HS256 JWT access tokens
//! - Access gate middleware (`require_auth`, `require_admin`) and the
//!   `CurrentUser` extractor for downstream handlers
//! - Admin listing of all users
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, off the async runtime
//! - Login failures are indistinguishable to the client
//! - Tokens are stateless and expire after a configurable TTL

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::value_object::identity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{AuthGate, CurrentUser, require_admin, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
