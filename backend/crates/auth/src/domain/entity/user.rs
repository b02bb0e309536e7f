//! User Entity
//!
//! Profile data safe to return to clients. The password hash lives in
//! [`Credential`](super::credential::Credential) and never reaches this type.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    /// Unique, normalized login email
    pub email: Email,
    /// Role (User, Admin)
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }
}
