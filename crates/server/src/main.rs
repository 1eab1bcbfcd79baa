//! Thing Server - template REST API.
//!
//! This binary serves the thing CRUD API and the authentication flow on
//! port 3000 by default.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - In-memory record and credential stores, reseeded on every start
//! - Stateless HS256 bearer tokens guarding the private route tree

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use thing_server::config::ServerConfig;
use thing_server::routes;
use thing_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment (.env honored via dotenvy)
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "thing_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state with freshly seeded stores
    let state = AppState::new(config);
    let addr = state.config().socket_addr();
    let cors = cors_layer(state.config());

    // Build router
    let mut app = routes::router(state).layer(TraceLayer::new_for_http());
    if let Some(cors) = cors {
        app = app.layer(cors);
    }
    tracing::info!("thing-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Build a CORS layer from the configured origin, if any.
///
/// Mirrors the allow-list the API has always exposed: one origin, the
/// standard CRUD methods, and the JSON/authorization headers.
fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let origin = config.allowed_origin.as_deref()?;

    match origin.parse::<HeaderValue>() {
        Ok(value) => Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(value))
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        ),
        Err(_) => {
            tracing::warn!(origin, "ALLOWED_ORIGIN is not a valid header value; CORS disabled");
            None
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
