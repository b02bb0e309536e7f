//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{RecordId, UserId};

/// A positively classified number submitted by a user
///
/// Append-only: records are never updated or deleted through the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmstrongRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub number: i64,
    pub created_at: DateTime<Utc>,
}
