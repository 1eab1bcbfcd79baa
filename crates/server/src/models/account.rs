//! Registered account with salted password hash.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha512;

use thing_server_core::Email;

/// PBKDF2 iteration count. Fixed; changing it invalidates stored hashes.
const PBKDF2_ROUNDS: u32 = 1000;

/// Derived key length in bytes.
const HASH_LENGTH: usize = 64;

/// Random salt length in bytes (stored hex-encoded).
const SALT_LENGTH: usize = 16;

/// A registered account.
///
/// The salt is generated once at creation and fixed thereafter; the hash
/// is PBKDF2-HMAC-SHA512 over (password, salt). The plaintext password is
/// never retained. There is no password-change path in scope, so both
/// fields are immutable after construction.
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique identity key. Matched case-sensitively.
    pub email: Email,
    /// Per-account random salt, hex-encoded.
    pub password_salt: String,
    /// Derived key, hex-encoded.
    pub password_hash: String,
}

impl Account {
    /// Create an account, deriving a fresh salt and hash for `password`.
    #[must_use]
    pub fn new(email: Email, password: &str) -> Self {
        let mut salt_bytes = [0u8; SALT_LENGTH];
        rand::rng().fill_bytes(&mut salt_bytes);
        let password_salt = hex::encode(salt_bytes);
        let password_hash = derive_hash(password, &password_salt);

        Self {
            email,
            password_salt,
            password_hash,
        }
    }

    /// Check a login attempt against the stored hash.
    ///
    /// Recomputes the derivation with the stored salt and compares the
    /// fixed-length hex outputs.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        derive_hash(password, &self.password_salt) == self.password_hash
    }
}

/// PBKDF2-HMAC-SHA512 with the fixed work factor and output length.
///
/// The hex-encoded salt text itself is the KDF salt input, so stored
/// hashes stay stable across the salt's text representation.
fn derive_hash(password: &str, salt: &str) -> String {
    let mut out = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut out);
    hex::encode(out)
}
