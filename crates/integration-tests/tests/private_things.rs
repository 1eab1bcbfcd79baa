//! Integration tests for the bearer-token gate on the private routes.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use thing_server_core::Email;
use thing_server_integration_tests::{send, send_json, send_with_auth, test_app};

/// Log in as the seeded account and return a bearer header value.
async fn seeded_bearer(router: &axum::Router) -> String {
    let (status, body) = send_json(
        router,
        "POST",
        "/auth/login",
        &json!({"email": "email@inter.net", "password": "password"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    format!("Bearer {}", body["token"].as_str().unwrap())
}

#[tokio::test]
async fn test_missing_token_is_401() {
    let (_, router) = test_app();
    let (status, _) = send(&router, "GET", "/api/v1/private/things").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_header_without_scheme_is_401() {
    let (_, router) = test_app();
    // Only the second space-delimited component counts as the token.
    let (status, _) =
        send_with_auth(&router, "GET", "/api/v1/private/things", "tokenwithoutscheme").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_403() {
    let (_, router) = test_app();
    let (status, body) =
        send_with_auth(&router, "GET", "/api/v1/private/things", "Bearer garbage").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["msg"], "Unauthorized Access");
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let (_, router) = test_app();
    let bearer = seeded_bearer(&router).await;

    let (status, body) = send_with_auth(&router, "GET", "/api/v1/private/things", &bearer).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["things"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_expired_token_is_403() {
    let (state, router) = test_app();
    let subject = Email::parse("email@inter.net").unwrap();
    let expired = state
        .auth()
        .tokens()
        .issue_expiring_at(&subject, chrono::Utc::now().timestamp() - 60)
        .unwrap();

    let (status, _) = send_with_auth(
        &router,
        "GET",
        "/api/v1/private/things",
        &format!("Bearer {expired}"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_for_removed_account_is_403() {
    let (state, router) = test_app();
    let bearer = seeded_bearer(&router).await;

    // Token still carries a valid signature and future expiry, but the
    // subject no longer exists.
    let subject = Email::parse("email@inter.net").unwrap();
    assert!(state.accounts().remove(&subject).unwrap());

    let (status, _) = send_with_auth(&router, "GET", "/api/v1/private/things", &bearer).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_private_and_public_trees_share_one_store() {
    let (_, router) = test_app();
    let bearer = seeded_bearer(&router).await;

    // Create through the private tree.
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/private/things")
        .header(axum::http::header::AUTHORIZATION, &bearer)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&json!({"type": "foo", "description": "via private"})).unwrap(),
        ))
        .unwrap();
    let (status, body) = thing_server_integration_tests::dispatch(&router, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["thing"]["id"], 4);

    // Visible through the public tree.
    let (status, body) = send(&router, "GET", "/api/v1/things/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["thing"]["description"], "via private");
}

#[tokio::test]
async fn test_gate_covers_all_private_methods() {
    let (_, router) = test_app();

    for (method, uri) in [
        ("GET", "/api/v1/private/things"),
        ("GET", "/api/v1/private/things/1"),
        ("POST", "/api/v1/private/things"),
        ("PUT", "/api/v1/private/things/1"),
        ("DELETE", "/api/v1/private/things/1"),
    ] {
        let (status, _) = send(&router, method, uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}
