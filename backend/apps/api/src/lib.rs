//! Armstrong API server
//!
//! Composes the domain routers under `/api/v1` with CORS and request
//! tracing. `main.rs` wires in PostgreSQL; tests wire in the in-memory
//! stores.

pub mod config;
pub mod health;

use armstrong::armstrong_router_generic;
use armstrong::domain::repository::ArmstrongRepository;
use auth::domain::repository::UserRepository;
use auth::{AuthConfig, TokenService, auth_router_generic};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use health::{DatabaseProbe, health_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub const API_PREFIX: &str = "/api/v1";

/// Every route, relative to [`API_PREFIX`]
///
/// One `TokenService` is shared so tokens issued by `/login` pass the gate
/// in front of the Armstrong routes.
pub fn api_router<U, A, P>(users: U, records: A, probe: P, auth: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    A: ArmstrongRepository + Clone + Send + Sync + 'static,
    P: DatabaseProbe + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(&auth));

    Router::new()
        .merge(health_router(probe))
        .merge(auth_router_generic(users, auth, tokens.clone()))
        .merge(armstrong_router_generic(records, tokens))
}

/// Nest the API under its prefix and add the HTTP layers
pub fn build_app(api: Router, frontend_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origins))
}

fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ]))
}
