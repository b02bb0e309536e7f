//! Credential Entity
//!
//! A user together with the stored password digest, for login only.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_password::UserPassword;

/// Login credentials
///
/// `password_hash` is `None` for users created without a password; they
/// cannot sign in.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user: User,
    pub password_hash: Option<UserPassword>,
}
