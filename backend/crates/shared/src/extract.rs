//! Request extractors shared by all HTTP handlers.

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

/// JSON request body that rejects with a 400 [`AppError`].
///
/// Plain `axum::Json` answers 415/422 for some malformed bodies; API clients
/// only ever see a 400 for bad input.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
