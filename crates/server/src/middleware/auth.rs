//! Bearer-token authorization gate.
//!
//! Applied to the private route subtree. Outcomes:
//!
//! - no token in the `Authorization` header -> 401, no continuation
//! - token fails verification (bad signature, expired, or the subject
//!   account no longer exists) -> 403
//! - store failure during verification -> 500
//! - otherwise the request continues down the pipeline

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Middleware that requires a valid bearer token.
///
/// Expects the scheme-prefixed form `Bearer <token>`; only the second
/// space-delimited component of the header is treated as the token.
///
/// # Errors
///
/// Returns `ApiError::Unauthenticated` (401) when no token is present,
/// `ApiError::Unauthorized` (403) when verification fails, and
/// `ApiError::Internal` (500) when the account store fails during the
/// existence check.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(' ').nth(1));

    let Some(token) = token else {
        return Err(ApiError::Unauthenticated(
            "No authentication token provided".to_string(),
        ));
    };

    match state.auth().verify(token) {
        Ok(subject) => {
            tracing::debug!(subject = %subject, "authenticated request");
            Ok(next.run(request).await)
        }
        Err(AuthError::Internal) => {
            Err(ApiError::Internal("token verification failed".to_string()))
        }
        Err(_) => Err(ApiError::Unauthorized("Unauthorized Access".to_string())),
    }
}
