//! Unified error handling for the API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Application-level error type, mapped onto wire responses.
///
/// The status mapping is fixed: 400 validation failure or bad request
/// shape, 401 missing token or failed login, 403 failed authorization,
/// 404 not found, 500 internal fallback.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation failure or bad request shape.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No token presented, or login failed.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Token presented but failed the authorization check.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body: every error response carries a `msg` field.
#[derive(Serialize)]
struct ErrorBody {
    msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Unauthorized(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients.
        let msg = match self {
            Self::Internal(_) => "Internal Server Error".to_string(),
            Self::BadRequest(msg)
            | Self::Unauthenticated(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg) => msg,
        };

        (status, Json(ErrorBody { msg })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound("Resource does not exist".to_string()),
            StoreError::InvalidInput => {
                Self::BadRequest("Failed because the thing was not valid".to_string())
            }
            StoreError::AlreadyExists => {
                Self::BadRequest("An account with that email already exists!".to_string())
            }
            StoreError::Internal => Self::Internal(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidEmail(_) => Self::BadRequest("Invalid email!".to_string()),
            AuthError::InvalidPassword(msg) => Self::BadRequest(format!("Invalid password! {msg}")),
            AuthError::AlreadyExists => {
                Self::BadRequest("An account with that email already exists!".to_string())
            }
            AuthError::InvalidCredentials => {
                Self::Unauthenticated("Could not authenticate user!".to_string())
            }
            AuthError::Unauthorized => Self::Unauthorized("Unauthorized Access".to_string()),
            AuthError::Internal => Self::Internal(err.to_string()),
        }
    }
}
