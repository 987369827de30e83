#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use faqdesk_core::cache::MemoryCacheStore;
use faqdesk_db::store::MemoryFaqStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use faqdesk_api::config::ServerConfig;
use faqdesk_api::router::build_app_router;
use faqdesk_api::state::AppState;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Router plus handles on the in-memory backends it was built with.
pub struct TestApp {
    pub router: Router,
    pub cache: Arc<MemoryCacheStore>,
    pub store: Arc<MemoryFaqStore>,
}

impl TestApp {
    /// A fresh clone of the router for a single `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults and an admin token.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        admin_token: Some(ADMIN_TOKEN.to_string()),
        ..ServerConfig::default()
    }
}

/// Build the full application router over in-memory store and cache.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) is exercised too.
pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> TestApp {
    let cache = Arc::new(MemoryCacheStore::with_capacity(
        config.memory_cache_capacity,
    ));
    let store = Arc::new(MemoryFaqStore::new());
    let state = AppState::new(store.clone(), cache.clone(), config.clone());
    let router = build_app_router(state, &config);
    TestApp {
        router,
        cache,
        store,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::PATCH, uri, &body)).await
}

/// Build a request carrying `Authorization: Bearer <token>`.
pub fn authorized(method: Method, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn admin(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    authorized(method, uri, ADMIN_TOKEN, body)
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body is JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("body is UTF-8")
}

/// Create an FAQ through the public API and return its id.
pub async fn create_faq(app: &TestApp, body: Value) -> i64 {
    let response = post_json(app.app(), "/faqs/", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().expect("id")
}
