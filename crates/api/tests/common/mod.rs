#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use enamorado_api::config::ServerConfig;
use enamorado_api::live::LiveUpdateForwarder;
use enamorado_api::router::build_app_router;
use enamorado_api::state::AppState;
use enamorado_api::ws::WsManager;
use enamorado_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        ws_heartbeat_secs: 30,
        admin_username: None,
        admin_password: None,
    }
}

/// Build application state with a running live-update forwarder, the same
/// wiring `main.rs` sets up.
pub fn test_state(pool: PgPool) -> AppState {
    let ws_manager = Arc::new(WsManager::new());
    let event_bus = Arc::new(EventBus::default());

    let forwarder = LiveUpdateForwarder::new(Arc::clone(&ws_manager));
    tokio::spawn(forwarder.run(event_bus.subscribe()));

    AppState {
        pool,
        config: Arc::new(test_config()),
        ws_manager,
        event_bus,
    }
}

/// Build the full application router, including every middleware layer.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(test_state(pool), &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A minimal valid intake payload.
pub fn morning_coffee() -> Value {
    json!({
        "title": "Morning Coffee Thoughts",
        "description": "Steam rises from the cup like a slow poem about mornings.",
        "submitterHandle": "@wordsmith",
        "category": "art",
    })
}

/// Submit `body` and return the created record, asserting success.
pub async fn create_submission(app: Router, body: Value) -> Value {
    let response = post_json(app, "/api/submissions", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}

/// Submit a record titled `title` from `handle` and return its id.
pub async fn create_titled(app: Router, title: &str, handle: &str) -> i64 {
    let mut body = morning_coffee();
    body["title"] = json!(title);
    body["submitterHandle"] = json!(handle);
    create_submission(app, body).await["id"].as_i64().unwrap()
}
