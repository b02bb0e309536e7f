//! Current User Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

/// Loads the profile of the authenticated caller
pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A valid token for a since-deleted user yields `UserNotFound`
    pub async fn execute(&self, identity: &Identity) -> AuthResult<User> {
        self.repo
            .find_by_id(identity.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
