//! HTTP route handlers for the thing server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Things (public)
//! GET    /api/v1/things                 - List all things
//! GET    /api/v1/things/{id}            - Get one thing
//! POST   /api/v1/things                 - Create a thing
//! PUT    /api/v1/things/{id}            - Replace a thing
//! DELETE /api/v1/things/{id}            - Delete a thing
//!
//! # Things (bearer token required)
//! GET    /api/v1/private/things         - List all things
//! GET    /api/v1/private/things/{id}    - Get one thing
//! POST   /api/v1/private/things         - Create a thing
//! PUT    /api/v1/private/things/{id}    - Replace a thing
//! DELETE /api/v1/private/things/{id}    - Delete a thing
//!
//! # Auth
//! POST /auth/signup                     - Create account, returns token
//! POST /auth/login                      - Login, returns token
//! ```
//!
//! Both thing trees operate on the same record store; the private tree
//! just sits behind the authorization gate.

pub mod auth;
pub mod things;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router, middleware, routing::post};

use crate::middleware::require_auth;
use crate::state::AppState;

/// Create the thing CRUD router (no auth).
pub fn thing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(things::list).post(things::create))
        .route(
            "/{id}",
            get(things::get).put(things::update).delete(things::remove),
        )
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "msg": "Could not find resource" })),
    )
}

/// Create the full application router.
///
/// Layering (trace, CORS) is applied by the binary on top of this.
pub fn router(state: AppState) -> Router {
    let private_things = thing_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_auth,
    ));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/things", thing_routes())
        .nest("/api/v1/private/things", private_things)
        .nest("/auth", auth_routes())
        .fallback(not_found)
        .with_state(state)
}
