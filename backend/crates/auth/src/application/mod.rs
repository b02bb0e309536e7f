//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_user;
pub mod current_user;
pub mod list_users;
pub mod register;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use create_user::CreateUserUseCase;
pub use current_user::CurrentUserUseCase;
pub use list_users::ListUsersUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token::TokenService;
