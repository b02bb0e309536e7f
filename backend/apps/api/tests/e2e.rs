//! Full request flow through the composed router, backed by the in-memory
//! stores.

use api::{DatabaseProbe, api_router, build_app};
use armstrong::InMemoryArmstrongRepository;
use auth::{AuthConfig, InMemoryAuthRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use kernel::id::UserId;
use serde_json::{Value, json};
use tower::ServiceExt;

struct AlwaysUp;

impl DatabaseProbe for AlwaysUp {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

struct TestServer {
    app: Router,
    users: InMemoryAuthRepository,
}

fn server() -> TestServer {
    let users = InMemoryAuthRepository::new();
    let api = api_router(
        users.clone(),
        InMemoryArmstrongRepository::new(),
        AlwaysUp,
        AuthConfig::with_secret([11u8; 32]),
    );
    let app = build_app(api, vec![HeaderValue::from_static("http://localhost:3000")]);

    TestServer { app, users }
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
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

async fn register_and_login(app: &Router, email: &str) -> (i64, String) {
    let (status, user) = call(
        app,
        "POST",
        "/api/v1/register",
        None,
        Some(json!({ "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{user}");

    let (status, body) = call(
        app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    (
        user["user_id"].as_i64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_register_login_classify_list() {
    let server = server();
    let (user_id, token) = register_and_login(&server.app, "flow@example.com").await;

    let (status, body) = call(
        &server.app,
        "POST",
        "/api/v1/armstrong",
        Some(token.as_str()),
        Some(json!({ "number": 371 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["armstrong"], true);
    assert_eq!(body["record"]["user_id"], user_id);

    let (status, body) = call(
        &server.app,
        "POST",
        "/api/v1/armstrong",
        Some(token.as_str()),
        Some(json!({ "number": 372 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "number": 372, "armstrong": false }));

    let (status, body) = call(&server.app, "GET", "/api/v1/armstrong/my", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["number"], 371);
    assert_eq!(records[0]["user_id"], user_id);

    let (status, body) = call(&server.app, "GET", "/api/v1/users/me", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "flow@example.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_health_and_unknown_routes() {
    let server = server();

    let (status, body) = call(&server.app, "GET", "/api/v1/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");

    let (status, _) = call(&server.app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_access_failures() {
    let server = server();
    let (_, token) = register_and_login(&server.app, "plain@example.com").await;

    let (status, _) = call(
        &server.app,
        "POST",
        "/api/v1/armstrong",
        None,
        Some(json!({ "number": 153 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&server.app, "GET", "/api/v1/admin/users", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call(
        &server.app,
        "POST",
        "/api/v1/register",
        None,
        Some(json!({ "email": "plain@example.com", "password": "secret2" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_admin_sees_every_user() {
    let server = server();
    let (admin_id, _) = register_and_login(&server.app, "admin@example.com").await;
    register_and_login(&server.app, "member@example.com").await;

    assert!(server.users.set_admin(UserId::new(admin_id), true).await);

    // The admin flag is read at login, so sign in again
    let (status, body) = call(
        &server.app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "email": "admin@example.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = call(&server.app, "GET", "/api/v1/admin/users", Some(token.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    let emails: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, ["member@example.com", "admin@example.com"]);
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = server();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/armstrong")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization,content-type")
        .body(Body::empty())
        .unwrap();

    let response = server.app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
