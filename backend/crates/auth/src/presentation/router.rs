//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGate, require_admin, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(
    repo: PgAuthRepository,
    config: AuthConfig,
    tokens: Arc<TokenService>,
) -> Router {
    auth_router_generic(repo, config, tokens)
}

/// Create a generic Auth router for any repository implementation
///
/// `tokens` must be the same service the other gated routers use.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGate::new(tokens.clone());
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens,
    };

    let public = Router::new()
        .route("/users", post(handlers::create_user::<R>))
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>));

    let authenticated = Router::new()
        .route("/users/me", get(handlers::current_user::<R>))
        .route_layer(from_fn_with_state(gate.clone(), require_auth));

    let admin = Router::new()
        .route("/admin/users", get(handlers::list_users::<R>))
        .route_layer(from_fn_with_state(gate, require_admin));

    public.merge(authenticated).merge(admin).with_state(state)
}
