//! Authentication route handlers: signup and login.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Signup/login request body. Either field may be absent; absent fields
/// fail validation the same way empty credentials do.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Credentials {
    fn parts(self) -> (String, String) {
        (
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Unwrap a JSON body into credentials. A missing, malformed, or
/// wrong-typed body behaves like empty credentials, so every bad shape
/// goes through the same validation path instead of surfacing the
/// extractor's own rejection status.
fn credentials_from_body(body: Result<Json<Credentials>, JsonRejection>) -> Credentials {
    body.map_or_else(|_| Credentials::default(), |Json(creds)| creds)
}

/// Response body for a successful signup.
#[derive(Serialize)]
pub struct SignupResponse {
    pub msg: String,
    pub token: String,
}

/// Response body for a successful login.
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /auth/signup` - create an account and return a token for
/// immediate login.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let (email, password) = credentials_from_body(body).parts();
    let token = state.auth().register(&email, &password)?;

    Ok(Json(SignupResponse {
        msg: "Account created!".to_string(),
        token,
    }))
}

/// `POST /auth/login` - authenticate and return a fresh token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (email, password) = credentials_from_body(body).parts();
    let token = state.auth().login(&email, &password)?;

    Ok(Json(TokenResponse { token }))
}
