//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entities::ArmstrongRecord;
use crate::error::ArmstrongResult;

/// Armstrong record repository trait
#[trait_variant::make(ArmstrongRepository: Send)]
pub trait LocalArmstrongRepository {
    /// Append a record; no deduplication
    async fn insert(&self, user_id: UserId, number: i64) -> ArmstrongResult<ArmstrongRecord>;

    /// Records owned by a user, newest first
    async fn list_for_user(&self, user_id: UserId) -> ArmstrongResult<Vec<ArmstrongRecord>>;
}
