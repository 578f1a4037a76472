//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::catalog::Catalog;
use crate::config::TastyConfig;
use crate::ledger::OrderLedger;
use crate::services::google::GoogleClient;

/// Shared application state, cheap to clone across handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: TastyConfig,
    pool: SqlitePool,
    catalog: Catalog,
    ledger: OrderLedger,
    google: Option<GoogleClient>,
}

impl AppState {
    /// Build the state from loaded configuration and a ready pool.
    ///
    /// The Google client is constructed only when credentials are
    /// configured; everything that depends on it checks for `None` and
    /// degrades to password-only auth.
    #[must_use]
    pub fn new(config: TastyConfig, pool: SqlitePool) -> Self {
        let google = config.google.as_ref().map(GoogleClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog: Catalog::sample(),
                ledger: OrderLedger::new(),
                google,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TastyConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn ledger(&self) -> &OrderLedger {
        &self.inner.ledger
    }

    #[must_use]
    pub fn google(&self) -> Option<&GoogleClient> {
        self.inner.google.as_ref()
    }
}
