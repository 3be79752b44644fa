//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::sanity::SanityClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to configuration and the
/// remote order store client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    sanity: SanityClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let sanity = SanityClient::new(&config.sanity);

        Self {
            inner: Arc::new(AppStateInner { config, sanity }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the remote order store client.
    #[must_use]
    pub fn sanity(&self) -> &SanityClient {
        &self.inner.sanity
    }
}
