//! Create User Use Case
//!
//! Creates a user without a password. Such a user cannot sign in.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, email: &str) -> AuthResult<User> {
        let email = Email::new(email)?;
        let user = self.repo.create(&email, None).await?;

        tracing::info!(user_id = %user.user_id, "User created without password");

        Ok(user)
    }
}
