//! Classify And Record Use Case
//!
//! Classifies a submitted number and, only when it is an Armstrong number,
//! appends a record owned by the caller.

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::ArmstrongRecord;
use crate::domain::repository::ArmstrongRepository;
use crate::domain::services::is_armstrong;
use crate::error::ArmstrongResult;

/// Classification outcome
#[derive(Debug, Clone)]
pub struct ClassifyOutput {
    pub number: i64,
    pub is_armstrong: bool,
    /// Present iff `is_armstrong`
    pub record: Option<ArmstrongRecord>,
}

pub struct ClassifyAndRecordUseCase<R>
where
    R: ArmstrongRepository,
{
    repo: Arc<R>,
}

impl<R> ClassifyAndRecordUseCase<R>
where
    R: ArmstrongRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A failed insert fails the whole request; no partial success is reported.
    pub async fn execute(&self, user_id: UserId, number: i64) -> ArmstrongResult<ClassifyOutput> {
        if !is_armstrong(number) {
            tracing::debug!(%user_id, number, "Not an Armstrong number");
            return Ok(ClassifyOutput {
                number,
                is_armstrong: false,
                record: None,
            });
        }

        let record = self.repo.insert(user_id, number).await?;
        tracing::info!(%user_id, number, record_id = %record.id, "Armstrong number recorded");

        Ok(ClassifyOutput {
            number,
            is_armstrong: true,
            record: Some(record),
        })
    }
}
