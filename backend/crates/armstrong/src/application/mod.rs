//! Application Layer - Use cases

pub mod classify_and_record;
pub mod list_records;

pub use classify_and_record::{ClassifyAndRecordUseCase, ClassifyOutput};
pub use list_records::ListRecordsUseCase;
