//! HTTP middleware for the server.

pub mod auth;

pub use auth::require_auth;
