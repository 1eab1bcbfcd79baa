//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format on signup.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] thing_server_core::EmailError),

    /// Password failed the trivial length check on signup.
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    /// An account with that email already exists.
    #[error("an account with that email already exists")]
    AlreadyExists,

    /// Wrong password or unknown email. The two cases are deliberately
    /// indistinguishable so login cannot be used as an existence oracle.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token failed verification: bad signature, expired, or the subject
    /// account no longer exists.
    #[error("unauthorized")]
    Unauthorized,

    /// Store invariant violation or lock poisoning during verification.
    #[error("internal auth error")]
    Internal,
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => Self::AlreadyExists,
            StoreError::NotFound => Self::InvalidCredentials,
            StoreError::InvalidInput | StoreError::Internal => Self::Internal,
        }
    }
}
