//! In-memory record stores.
//!
//! Both stores hold their collections behind a single exclusive lock so
//! that every validate-then-mutate sequence is atomic under concurrent
//! request handling. State lives for the process lifetime only; each
//! start reseeds the fixed sample data.

pub mod accounts;
pub mod things;

pub use accounts::AccountStore;
pub use things::ThingStore;

use thiserror::Error;

/// Errors reported by the record and credential stores.
///
/// Every store operation is terminal: it reports exactly one outcome and
/// no retries occur anywhere in this layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the given id or email.
    #[error("record not found")]
    NotFound,

    /// The candidate record failed structural validation.
    #[error("invalid input")]
    InvalidInput,

    /// An account with this email is already registered.
    #[error("account already exists")]
    AlreadyExists,

    /// An invariant check failed after a mutation, or the store lock was
    /// poisoned. Not expected to trigger under correct operation.
    #[error("internal store error")]
    Internal,
}
