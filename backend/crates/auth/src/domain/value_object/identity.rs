//! Identity Value Object
//!
//! The verified subject of a request. Only token validation produces one.

use kernel::id::UserId;

/// Verified caller, attached to the request by the access gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub is_admin: bool,
}

impl Identity {
    pub(crate) const fn new(user_id: UserId, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }
}
