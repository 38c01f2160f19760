//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalogue::{CatalogueClient, CatalogueError};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the catalogue client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalogue: CatalogueClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogueError> {
        let catalogue = CatalogueClient::new(&config.catalogue)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, catalogue }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalogue API client.
    #[must_use]
    pub fn catalogue(&self) -> &CatalogueClient {
        &self.inner.catalogue
    }
}
