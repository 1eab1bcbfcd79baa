//! Authentication service.
//!
//! Composes the account store and the token service: signup and login
//! both end in a freshly issued bearer token, and verification re-checks
//! that the token's subject still exists. Token validity alone is not
//! sufficient for authorization - removing an account is the one crude
//! revocation mechanism this server has.

mod error;
pub mod token;

pub use error::AuthError;
pub use token::{Claims, TokenError, TokenService};

use std::sync::Arc;

use secrecy::SecretString;

use thing_server_core::Email;

use crate::models::Account;
use crate::store::AccountStore;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 3;

/// Maximum accepted password length.
const MAX_PASSWORD_LENGTH: usize = 19;

/// Authentication service.
///
/// Handles account registration, login, and bearer token verification.
pub struct AuthService {
    accounts: Arc<AccountStore>,
    tokens: TokenService,
}

impl AuthService {
    /// Create a new authentication service over `accounts`, signing
    /// tokens with `secret`.
    #[must_use]
    pub fn new(accounts: Arc<AccountStore>, secret: &SecretString) -> Self {
        Self {
            accounts,
            tokens: TokenService::new(secret),
        }
    }

    /// Register a new account and return a token for immediate login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid,
    /// `AuthError::InvalidPassword` if the password fails the length
    /// check, and `AuthError::AlreadyExists` if the email is taken.
    pub fn register(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let account = Account::new(email.clone(), password);
        self.accounts.insert(account)?;

        self.issue(&email)
    }

    /// Authenticate with email and password, returning a fresh token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for both an unknown email
    /// and a wrong password.
    pub fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        // A malformed email cannot belong to any account; report it the
        // same way as an unknown one.
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .accounts
            .find(&email)
            .map_err(|_| AuthError::Internal)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.verify_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue(&email)
    }

    /// Verify a bearer token and return its subject.
    ///
    /// Checks signature and expiry, then re-checks that the subject
    /// account still exists in the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for a bad signature, an expired
    /// token, or a missing subject, and `AuthError::Internal` if the
    /// store fails during the existence check.
    pub fn verify(&self, token: &str) -> Result<Email, AuthError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(|_| AuthError::Unauthorized)?;

        let subject = Email::parse(&claims.sub).map_err(|_| AuthError::Unauthorized)?;

        let exists = self
            .accounts
            .contains(&subject)
            .map_err(|_| AuthError::Internal)?;
        if !exists {
            return Err(AuthError::Unauthorized);
        }

        Ok(subject)
    }

    /// The underlying token service.
    #[must_use]
    pub const fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    fn issue(&self, email: &Email) -> Result<String, AuthError> {
        self.tokens.issue(email).map_err(|_| AuthError::Internal)
    }
}

/// Length check applied at signup. No complexity requirements are
/// enforced.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
        return Err(AuthError::InvalidPassword(format!(
            "password must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
