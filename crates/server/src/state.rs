//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::AuthService;
use crate::store::{AccountStore, ThingStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the seeded in-memory stores and
/// the authentication service; store lifetime equals process lifetime.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    things: ThingStore,
    accounts: Arc<AccountStore>,
    auth: AuthService,
}

impl AppState {
    /// Create a new application state with freshly seeded stores.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let accounts = Arc::new(AccountStore::seeded());
        let auth = AuthService::new(Arc::clone(&accounts), &config.login_secret);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                things: ThingStore::seeded(),
                accounts,
                auth,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the Thing record store.
    #[must_use]
    pub fn things(&self) -> &ThingStore {
        &self.inner.things
    }

    /// Get a reference to the account store.
    #[must_use]
    pub fn accounts(&self) -> &AccountStore {
        &self.inner.accounts
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }
}
