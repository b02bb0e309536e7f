//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ClassifyOutput;
use crate::domain::entities::ArmstrongRecord;

/// `POST /armstrong`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub number: i64,
}

/// `POST /armstrong` response; `record` is omitted for non-Armstrong numbers
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub number: i64,
    pub armstrong: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordResponse>,
}

impl From<ClassifyOutput> for CheckResponse {
    fn from(output: ClassifyOutput) -> Self {
        Self {
            number: output.number,
            armstrong: output.is_armstrong,
            record: output.record.map(RecordResponse::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub id: i64,
    pub user_id: i64,
    pub number: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ArmstrongRecord> for RecordResponse {
    fn from(record: ArmstrongRecord) -> Self {
        Self {
            id: record.id.get(),
            user_id: record.user_id.get(),
            number: record.number,
            created_at: record.created_at,
        }
    }
}
