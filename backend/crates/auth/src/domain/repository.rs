//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user; `password_hash` is `None` for password-less users
    ///
    /// Returns `AuthError::EmailTaken` when the email is already registered.
    async fn create(&self, email: &Email, password_hash: Option<&UserPassword>)
    -> AuthResult<User>;

    /// Find user and password digest by email
    async fn find_credential_by_email(&self, email: &Email) -> AuthResult<Option<Credential>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// All users, newest first
    async fn list_all(&self) -> AuthResult<Vec<User>>;
}
