//! HTTP Handlers
//!
//! Both routes sit behind `auth::require_auth`; the caller is taken from
//! the token, never from the body.

use auth::CurrentUser;
use axum::Json;
use axum::extract::State;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::{ClassifyAndRecordUseCase, ListRecordsUseCase};
use crate::domain::repository::ArmstrongRepository;
use crate::error::ArmstrongResult;
use crate::presentation::dto::{CheckRequest, CheckResponse, RecordResponse};

#[derive(Clone)]
pub struct ArmstrongAppState<R>
where
    R: ArmstrongRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /armstrong
pub async fn check<R>(
    State(state): State<ArmstrongAppState<R>>,
    CurrentUser(identity): CurrentUser,
    JsonBody(req): JsonBody<CheckRequest>,
) -> ArmstrongResult<Json<CheckResponse>>
where
    R: ArmstrongRepository + Clone + Send + Sync + 'static,
{
    let use_case = ClassifyAndRecordUseCase::new(state.repo.clone());
    let output = use_case.execute(identity.user_id, req.number).await?;

    Ok(Json(output.into()))
}

/// GET /armstrong/my
pub async fn my_records<R>(
    State(state): State<ArmstrongAppState<R>>,
    CurrentUser(identity): CurrentUser,
) -> ArmstrongResult<Json<Vec<RecordResponse>>>
where
    R: ArmstrongRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListRecordsUseCase::new(state.repo.clone());
    let records = use_case.execute(identity.user_id).await?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}
