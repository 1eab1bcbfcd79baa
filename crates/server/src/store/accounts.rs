//! The account credential store.
//!
//! Holds registered accounts behind a single lock. Emails are matched by
//! case-sensitive exact equality throughout.

use std::sync::{Mutex, MutexGuard};

use thing_server_core::Email;

use crate::models::Account;
use crate::store::StoreError;

/// In-memory store of registered accounts.
pub struct AccountStore {
    accounts: Mutex<Vec<Account>>,
}

impl AccountStore {
    /// Create a store seeded with the fixed sample account.
    ///
    /// # Panics
    ///
    /// Panics if the hard-coded seed email fails to parse, which cannot
    /// happen for a valid literal.
    #[must_use]
    pub fn seeded() -> Self {
        let email = Email::parse("email@inter.net").expect("seed email is valid");

        Self {
            accounts: Mutex::new(vec![Account::new(email, "password")]),
        }
    }

    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Account>>, StoreError> {
        self.accounts.lock().map_err(|_| StoreError::Internal)
    }

    /// Insert a new account, enforcing email uniqueness.
    ///
    /// The uniqueness check and the insert happen under one lock, so two
    /// racing signups for the same email cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if an account with the same
    /// email is already registered.
    pub fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.lock()?;
        if accounts.iter().any(|stored| stored.email == account.email) {
            return Err(StoreError::AlreadyExists);
        }
        accounts.push(account);
        Ok(())
    }

    /// Look up an account by email.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Internal` only if the store lock is poisoned.
    pub fn find(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .find(|account| &account.email == email)
            .cloned())
    }

    /// Check whether an account with this email still exists.
    ///
    /// Used for the subject-existence re-check during token
    /// verification: a signed token stops working once its account is
    /// gone.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Internal` only if the store lock is poisoned.
    pub fn contains(&self, email: &Email) -> Result<bool, StoreError> {
        Ok(self.lock()?.iter().any(|account| &account.email == email))
    }

    /// Remove an account by email, returning whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Internal` only if the store lock is poisoned.
    pub fn remove(&self, email: &Email) -> Result<bool, StoreError> {
        let mut accounts = self.lock()?;
        let before = accounts.len();
        accounts.retain(|account| &account.email != email);
        Ok(accounts.len() < before)
    }

    /// Number of registered accounts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Internal` only if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no accounts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Internal` only if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_seeded_store_has_sample_account() {
        let store = AccountStore::seeded();
        let account = store.find(&email("email@inter.net")).unwrap().unwrap();
        assert!(account.verify_password("password"));
    }

    #[test]
    fn test_insert_enforces_uniqueness() {
        let store = AccountStore::empty();
        store
            .insert(Account::new(email("a@example.com"), "first"))
            .unwrap();
        let err = store
            .insert(Account::new(email("a@example.com"), "second"))
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists);

        // Exactly one account retained, with the original password.
        assert_eq!(store.len().unwrap(), 1);
        let stored = store.find(&email("a@example.com")).unwrap().unwrap();
        assert!(stored.verify_password("first"));
    }

    #[test]
    fn test_email_matching_is_case_sensitive() {
        let store = AccountStore::empty();
        store
            .insert(Account::new(email("user@example.com"), "pw"))
            .unwrap();

        // A differently-cased email is a different identity.
        assert!(store.find(&email("User@example.com")).unwrap().is_none());
        store
            .insert(Account::new(email("User@example.com"), "pw"))
            .unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_contains_tracks_removal() {
        let store = AccountStore::seeded();
        let subject = email("email@inter.net");
        assert!(store.contains(&subject).unwrap());
        assert!(store.remove(&subject).unwrap());
        assert!(!store.contains(&subject).unwrap());
        assert!(!store.remove(&subject).unwrap());
    }
}
