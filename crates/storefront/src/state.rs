//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the catalog
/// client. Handlers receive the state by injection rather than reaching for
/// globals, so every page holds a reference, not a singleton.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);

        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }
}
