//! Shared helpers for thing-server integration tests.
//!
//! Tests drive the full router in-process via `tower::ServiceExt`, so
//! the suite needs no running server, network, or external services.
//! Each test gets its own freshly seeded state.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use thing_server::config::ServerConfig;
use thing_server::routes;
use thing_server::state::AppState;

/// Signing secret used by every test instance.
pub const TEST_SECRET: &str = "k2J8vQ4xR7nW1pZ9mC3tY6bL0sD5gF8h";

/// Build a config suitable for in-process tests (no env access).
#[must_use]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        login_secret: SecretString::from(TEST_SECRET),
        allowed_origin: None,
    }
}

/// Build a freshly seeded application and its router.
#[must_use]
pub fn test_app() -> (AppState, Router) {
    let state = AppState::new(test_config());
    let router = routes::router(state.clone());
    (state, router)
}

/// Send a request without a body.
pub async fn send(router: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    dispatch(router, request).await
}

/// Send a request with a JSON body.
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: &Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    dispatch(router, request).await
}

/// Send a request with a raw body declared as JSON. Lets tests exercise
/// bodies that are not valid JSON at all.
pub async fn send_raw(router: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    dispatch(router, request).await
}

/// Send a request carrying an `Authorization` header.
pub async fn send_with_auth(
    router: &Router,
    method: &str,
    uri: &str,
    authorization: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    dispatch(router, request).await
}

/// Dispatch a request and decode the JSON response body.
///
/// Returns `Value::Null` for empty or non-JSON bodies.
pub async fn dispatch(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
