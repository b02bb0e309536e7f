//! Armstrong Router

use auth::{AuthGate, TokenService, require_auth};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ArmstrongRepository;
use crate::infra::postgres::PgArmstrongRepository;
use crate::presentation::handlers::{self, ArmstrongAppState};

/// Create the Armstrong router with PostgreSQL repository
pub fn armstrong_router(repo: PgArmstrongRepository, tokens: Arc<TokenService>) -> Router {
    armstrong_router_generic(repo, tokens)
}

/// Create a generic Armstrong router for any repository implementation
///
/// `tokens` must be the service the auth router issues tokens with.
pub fn armstrong_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ArmstrongRepository + Clone + Send + Sync + 'static,
{
    let state = ArmstrongAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/armstrong", post(handlers::check::<R>))
        .route("/armstrong/my", get(handlers::my_records::<R>))
        .route_layer(from_fn_with_state(AuthGate::new(tokens), require_auth))
        .with_state(state)
}
