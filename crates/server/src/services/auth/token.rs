//! Signed bearer token issuance and verification.
//!
//! Tokens are stateless: the server keeps no session record for them.
//! Validity is signature + expiry; the subject-existence re-check lives
//! in [`crate::services::AuthService`].

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use thing_server_core::Email;

/// Token lifetime: expiry is issuance + 7 days.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject email the token is bound to.
    pub sub: String,
    /// Absolute expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Errors from token verification or issuance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature is valid but the embedded expiry has passed.
    #[error("token expired")]
    Expired,

    /// Malformed token or signature mismatch.
    #[error("token signature invalid")]
    SignatureInvalid,

    /// Token could not be encoded.
    #[error("token encoding failed")]
    Encoding,
}

/// Issues and verifies HS256-signed bearer tokens with a single
/// process-wide secret. No key rotation, no issuer/audience checks.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service signing with `secret`.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a token for `subject` expiring in seven days.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encoding` if serialization fails.
    pub fn issue(&self, subject: &Email) -> Result<String, TokenError> {
        let expiry = Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS);
        self.issue_expiring_at(subject, expiry.timestamp())
    }

    /// Issue a token for `subject` with an explicit expiry timestamp.
    ///
    /// Exists so tests can produce correctly-signed but already-expired
    /// tokens.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encoding` if serialization fails.
    pub fn issue_expiring_at(&self, subject: &Email, exp: i64) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp,
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Encoding)
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` if the signature checks out but the
    /// expiry has passed, and `TokenError::SignatureInvalid` for any
    /// malformed or mis-signed token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: an expiry in the past is expired, full stop.
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::SignatureInvalid,
            })
    }
}
