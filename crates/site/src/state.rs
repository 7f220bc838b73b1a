//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::db::{LeadStore, PgLeadStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and configuration. The lead
/// store sits behind a trait object so tests can swap in an in-memory
/// implementation.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    leads: Arc<dyn LeadStore>,
}

impl AppState {
    /// Create a new application state backed by `PostgreSQL`.
    #[must_use]
    pub fn new(config: SiteConfig, pool: PgPool) -> Self {
        let leads = Arc::new(PgLeadStore::new(pool.clone()));
        Self::with_lead_store(config, pool, leads)
    }

    /// Create application state with an explicit lead store.
    ///
    /// Used by tests to inject an in-memory store.
    #[must_use]
    pub fn with_lead_store(config: SiteConfig, pool: PgPool, leads: Arc<dyn LeadStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                leads,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the lead store.
    #[must_use]
    pub fn leads(&self) -> &dyn LeadStore {
        self.inner.leads.as_ref()
    }
}
