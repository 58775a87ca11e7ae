//! Shared helpers for HTTP integration tests.
//!
//! The app is built with [`build_app_router`] over a fresh [`MemStorage`], so
//! these tests run the production middleware stack without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use fertiflow_api::auth::session::SessionConfig;
use fertiflow_api::config::{ServerConfig, StorageBackend};
use fertiflow_api::router::build_app_router;
use fertiflow_api::state::AppState;
use fertiflow_db::storage::MemStorage;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "fertilizer-2025";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        session: SessionConfig::default(),
    }
}

/// Build the full application router over an empty in-memory store.
///
/// The store is returned as well so tests can inspect or alter rows directly.
pub fn build_test_app() -> (Router, Arc<MemStorage>) {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> (Router, Arc<MemStorage>) {
    let storage = Arc::new(MemStorage::new());
    let state = AppState {
        storage: storage.clone(),
        config: Arc::new(config),
    };
    (build_app_router(state), storage)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    send(app, Method::GET, uri, None, cookie).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value, cookie: Option<&str>) -> Response {
    send(app, Method::POST, uri, Some(body.to_string()), cookie).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value, cookie: Option<&str>) -> Response {
    send(app, Method::PATCH, uri, Some(body.to_string()), cookie).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response {
    send(app, method, uri, Some(body.to_string()), cookie).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// The raw `Set-Cookie` header of a response.
pub fn set_cookie_header(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap()
        .to_string()
}

/// The `name=value` pair from a `Set-Cookie` header, ready for a `Cookie` header.
pub fn session_cookie(response: &Response) -> String {
    set_cookie_header(response)
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn registration(username: &str) -> Value {
    json!({
        "username": username,
        "password": TEST_PASSWORD,
        "role": "Procurement Officer",
        "fullName": "Test Officer",
        "email": format!("{username}@fertiflow.test"),
    })
}

/// Register a user through the API and return the session cookie and user id.
pub async fn register_user(app: &Router, username: &str) -> (String, String) {
    let response = post_json(app, "/api/register", registration(username), None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie(&response);
    let json = body_json(response).await;
    (cookie, json["id"].as_str().unwrap().to_string())
}

/// Register a throwaway user and return only its session cookie.
pub async fn signed_in(app: &Router) -> String {
    register_user(app, "officer").await.0
}

pub fn demand(request_id: &str) -> Value {
    json!({
        "requestId": request_id,
        "region": "Dhaka",
        "fertilizerType": "Urea",
        "quantity": 1500.5,
    })
}
