//! Router-level tests against the in-memory record store

mod support {
    use std::sync::Arc;

    use auth::{AuthConfig, TokenService};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use kernel::id::UserId;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{InMemoryArmstrongRepository, armstrong_router_generic};

    pub struct TestApp {
        pub router: Router,
        pub repo: InMemoryArmstrongRepository,
        pub tokens: Arc<TokenService>,
    }

    impl TestApp {
        pub fn bearer(&self, user_id: i64) -> String {
            format!("Bearer {}", self.tokens.issue(UserId::new(user_id), false))
        }
    }

    pub fn app() -> TestApp {
        let tokens = Arc::new(TokenService::new(&AuthConfig::with_secret([3u8; 32])));
        let repo = InMemoryArmstrongRepository::new();
        let router = armstrong_router_generic(repo.clone(), tokens.clone());

        TestApp {
            router,
            repo,
            tokens,
        }
    }

    pub fn check(number: Value, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/armstrong")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder
            .body(Body::from(serde_json::json!({ "number": number }).to_string()))
            .unwrap()
    }

    pub fn my_records(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/armstrong/my");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

mod check_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_non_armstrong_has_no_record() {
        let app = app();
        let auth = app.bearer(1);

        let (status, body) = send(&app.router, check(json!(123), Some(auth.as_str()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "number": 123, "armstrong": false }));

        let (_, list) = send(&app.router, my_records(Some(auth.as_str()))).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_armstrong_is_recorded_for_caller() {
        let app = app();
        let auth = app.bearer(7);

        let (status, body) = send(&app.router, check(json!(153), Some(auth.as_str()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["number"], 153);
        assert_eq!(body["armstrong"], true);
        assert_eq!(body["record"]["user_id"], 7);
        assert_eq!(body["record"]["number"], 153);
        assert!(body["record"]["id"].is_i64());
        assert!(body["record"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_repeat_submissions_are_all_kept() {
        let app = app();
        let auth = app.bearer(1);

        let (_, first) = send(&app.router, check(json!(153), Some(auth.as_str()))).await;
        let (_, second) = send(&app.router, check(json!(153), Some(auth.as_str()))).await;
        assert_ne!(first["record"]["id"], second["record"]["id"]);

        let (_, list) = send(&app.router, my_records(Some(auth.as_str()))).await;
        assert_eq!(list.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_non_positive_numbers() {
        let app = app();
        let auth = app.bearer(1);

        for n in [0, -153] {
            let (status, body) = send(&app.router, check(json!(n), Some(auth.as_str()))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["armstrong"], false);
            assert!(body.get("record").is_none());
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_500_without_record() {
        let app = app();
        let auth = app.bearer(1);
        app.repo.set_failing(true);

        let (status, body) = send(&app.router, check(json!(153), Some(auth.as_str()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal server error");
        assert!(body.get("record").is_none());

        // Classification alone does not need the store
        let (status, _) = send(&app.router, check(json!(154), Some(auth.as_str()))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bad_body_is_bad_request() {
        let app = app();
        let auth = app.bearer(1);

        for number in [json!("153"), json!(1.5), json!(null), json!(u64::MAX)] {
            let (status, _) = send(&app.router, check(number, Some(auth.as_str()))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
}

mod access_tests {
    use super::support::*;
    use auth::{AuthConfig, TokenService};
    use axum::http::StatusCode;
    use kernel::id::UserId;
    use serde_json::json;

    use crate::domain::repository::ArmstrongRepository;

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let app = app();

        let (status, _) = send(&app.router, check(json!(153), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app.router, my_records(None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        assert!(app.repo.list_for_user(UserId::new(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_token_from_other_key_is_rejected() {
        let app = app();
        let foreign = TokenService::new(&AuthConfig::with_secret([4u8; 32]));
        let auth = format!("Bearer {}", foreign.issue(UserId::new(1), true));

        let (status, body) = send(&app.router, check(json!(153), Some(auth.as_str()))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Invalid token");
    }

    #[tokio::test]
    async fn test_records_are_private_and_newest_first() {
        let app = app();
        let alice = app.bearer(1);
        let bob = app.bearer(2);

        for n in [153, 370, 371] {
            send(&app.router, check(json!(n), Some(alice.as_str()))).await;
        }
        send(&app.router, check(json!(407), Some(bob.as_str()))).await;

        let (status, list) = send(&app.router, my_records(Some(alice.as_str()))).await;
        assert_eq!(status, StatusCode::OK);
        let numbers: Vec<i64> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["number"].as_i64().unwrap())
            .collect();
        assert_eq!(numbers, [371, 370, 153]);

        let (_, list) = send(&app.router, my_records(Some(bob.as_str()))).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["user_id"], 2);
    }
}
