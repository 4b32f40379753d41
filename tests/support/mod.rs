//! In-process harness: the production router over an in-memory SQLite database.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use kubsu_api::config::DEFAULT_BODY_LIMIT;
use kubsu_api::{app, connect, connect_lazy, ensure_schema, AppState, ServiceConfig};
use serde_json::Value;
use tower::ServiceExt;

pub fn memory_config() -> ServiceConfig {
    ServiceConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .expect("memory config")
}

pub async fn test_app() -> Router {
    test_app_with_limit(DEFAULT_BODY_LIMIT).await
}

pub async fn test_app_with_limit(body_limit: usize) -> Router {
    let config = memory_config();
    let pool = connect(&config).await.expect("connect sqlite");
    ensure_schema(&pool, config.backend).await.expect("schema");
    app(AppState::new(pool), body_limit)
}

/// Router over a PostgreSQL URL nobody listens on. Connections are only attempted on use.
pub fn unreachable_app() -> Router {
    let config = ServiceConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://kubsu@127.0.0.1:1/kubsu".to_string()),
        "DB_ACQUIRE_TIMEOUT_MS" => Some("500".to_string()),
        _ => None,
    })
    .expect("unreachable config");
    let pool = connect_lazy(&config).expect("lazy pool");
    app(AppState::new(pool), DEFAULT_BODY_LIMIT)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or_else(|e| panic!("invalid json {:?}: {e}", self.text))
    }
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<String>) -> TestResponse {
    let content_type = body.as_ref().map(|_| "application/json");
    send_with_content_type(app, method, uri, content_type, body).await
}

/// `content_type: None` sends the body with no `Content-Type` header at all.
pub async fn send_with_content_type(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Option<String>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let body = body.map(Body::from).unwrap_or_else(Body::empty);
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        text: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let resp = send_raw(app, method, uri, body.map(|b| b.to_string())).await;
    let json = resp.json();
    (resp.status, json)
}

pub async fn create_user(app: &Router, name: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/users/", Some(serde_json::json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}
