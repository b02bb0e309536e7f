//! Health endpoint
//!
//! `GET /health` pings the store; the outcome is reported in the body and
//! the status code (200 / 503).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;

/// Store connectivity check
#[trait_variant::make(DatabaseProbe: Send)]
pub trait LocalDatabaseProbe {
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

impl DatabaseProbe for PgPool {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(self).await.map(|_| ())
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum HealthBody {
    Up {
        status: &'static str,
        database: &'static str,
    },
    Down {
        status: &'static str,
        message: &'static str,
    },
}

async fn health<P>(State(probe): State<Arc<P>>) -> Response
where
    P: DatabaseProbe + Send + Sync + 'static,
{
    match probe.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthBody::Up {
                status: "up",
                database: "connected",
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody::Down {
                    status: "error",
                    message: "Database unavailable",
                }),
            )
                .into_response()
        }
    }
}

pub fn health_router<P>(probe: P) -> Router
where
    P: DatabaseProbe + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::<P>))
        .with_state(Arc::new(probe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    struct FixedProbe(bool);

    impl DatabaseProbe for FixedProbe {
        async fn ping(&self) -> Result<(), sqlx::Error> {
            if self.0 {
                Ok(())
            } else {
                Err(sqlx::Error::PoolTimedOut)
            }
        }
    }

    async fn check(probe: FixedProbe) -> (StatusCode, serde_json::Value) {
        let response = health_router(probe)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_healthy_store() {
        let (status, body) = check(FixedProbe(true)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "status": "up", "database": "connected" })
        );
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let (status, body) = check(FixedProbe(false)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Database unavailable");
    }
}
