//! List Records Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::ArmstrongRecord;
use crate::domain::repository::ArmstrongRepository;
use crate::error::ArmstrongResult;

/// The caller's own records, newest first
pub struct ListRecordsUseCase<R>
where
    R: ArmstrongRepository,
{
    repo: Arc<R>,
}

impl<R> ListRecordsUseCase<R>
where
    R: ArmstrongRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId) -> ArmstrongResult<Vec<ArmstrongRecord>> {
        let records = self.repo.list_for_user(user_id).await?;
        tracing::debug!(%user_id, count = records.len(), "Listed Armstrong records");
        Ok(records)
    }
}
