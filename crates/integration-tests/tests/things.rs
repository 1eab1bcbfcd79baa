//! Integration tests for the public thing CRUD routes.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use thing_server_integration_tests::{send, send_json, send_raw, test_app};

#[tokio::test]
async fn test_health() {
    let (_, router) = test_app();
    let (status, _) = send(&router, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_returns_seeded_things() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "GET", "/api/v1/things").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Successful GET for things");
    let things = body["things"].as_array().unwrap();
    assert_eq!(things.len(), 3);
    assert_eq!(things[0]["id"], 1);
    assert_eq!(things[1]["type"], "bar");
}

#[tokio::test]
async fn test_get_by_id() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "GET", "/api/v1/things/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["thing"]["type"], "foo");
    assert_eq!(body["thing"]["description"], "A foo thing");
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "GET", "/api/v1/things/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Failed to GET thing with id 99");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "GET", "/api/v1/things/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid ID for thing");
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let (_, router) = test_app();
    let (status, body) = send_json(
        &router,
        "POST",
        "/api/v1/things",
        &json!({"type": "foo", "description": "sample"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "Successfully POSTed thing");
    assert_eq!(body["thing"]["id"], 4);

    // The created record is immediately readable.
    let (status, body) = send(&router, "GET", "/api/v1/things/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["thing"]["description"], "sample");
}

#[tokio::test]
async fn test_create_missing_field_is_400() {
    let (_, router) = test_app();
    let (status, _) = send_json(
        &router,
        "POST",
        "/api/v1/things",
        &json!({"description": "no type"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was inserted, but the rejected request consumed id 4.
    let (_, body) = send(&router, "GET", "/api/v1/things").await;
    assert_eq!(body["things"].as_array().unwrap().len(), 3);

    let (status, body) = send_json(
        &router,
        "POST",
        "/api/v1/things",
        &json!({"type": "foo", "description": "after reject"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["thing"]["id"], 5);
}

#[tokio::test]
async fn test_create_non_string_field_is_400() {
    let (_, router) = test_app();
    let (status, body) = send_json(
        &router,
        "POST",
        "/api/v1/things",
        &json!({"type": 123, "description": "x"}),
    )
    .await;

    // Wrong-typed fields fail validation like missing ones; the
    // extractor's 422 never reaches the wire.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Failed because the thing was not valid");
}

#[tokio::test]
async fn test_create_malformed_json_is_400() {
    let (_, router) = test_app();
    let (status, body) = send_raw(&router, "POST", "/api/v1/things", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Failed because the thing was not valid");
}

#[tokio::test]
async fn test_update_non_string_field_is_400() {
    let (_, router) = test_app();
    let (status, body) = send_json(
        &router,
        "PUT",
        "/api/v1/things/1",
        &json!({"type": "foo", "description": false}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Failed because the thing was not valid");
}

#[tokio::test]
async fn test_create_accepts_empty_strings() {
    let (_, router) = test_app();
    let (status, body) = send_json(
        &router,
        "POST",
        "/api/v1/things",
        &json!({"type": "", "description": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["thing"]["type"], "");
}

#[tokio::test]
async fn test_update_replaces_record() {
    let (_, router) = test_app();
    let (status, body) = send_json(
        &router,
        "PUT",
        "/api/v1/things/2",
        &json!({"type": "baz", "description": "renamed"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Successfully PUT thing");
    assert_eq!(body["thing"]["type"], "baz");

    let (_, body) = send(&router, "GET", "/api/v1/things/2").await;
    assert_eq!(body["thing"]["description"], "renamed");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let (_, router) = test_app();
    let (status, body) = send_json(
        &router,
        "PUT",
        "/api/v1/things/99",
        &json!({"type": "foo", "description": "x"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Resource does not exist");
}

#[tokio::test]
async fn test_update_validates_before_existence() {
    let (_, router) = test_app();
    // Invalid body for an id that does not exist either: 400, not 404.
    let (status, _) = send_json(&router, "PUT", "/api/v1/things/99", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "DELETE", "/api/v1/things/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Successfully DELETEd thing");
    assert_eq!(body["deletedThing"]["type"], "bar");

    let (status, _) = send(&router, "GET", "/api/v1/things/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&router, "GET", "/api/v1/things").await;
    assert_eq!(body["things"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "DELETE", "/api/v1/things/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Resource does not exist");
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_404() {
    let (_, router) = test_app();
    let (status, body) = send(&router, "GET", "/api/v2/widgets").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Could not find resource");
}

#[tokio::test]
async fn test_interleaved_crud_over_http() {
    // create -> id 4; update 4 with empty description succeeds;
    // delete 2 then get 2 fails while get 4 still succeeds.
    let (_, router) = test_app();

    let (status, body) = send_json(
        &router,
        "POST",
        "/api/v1/things",
        &json!({"type": "foo", "description": "sample"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["thing"]["id"], 4);

    let (status, body) = send_json(
        &router,
        "PUT",
        "/api/v1/things/4",
        &json!({"type": "foo", "description": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["thing"]["description"], "");

    let (status, _) = send(&router, "DELETE", "/api/v1/things/2").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&router, "GET", "/api/v1/things/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&router, "GET", "/api/v1/things/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["thing"]["description"], "");
}
