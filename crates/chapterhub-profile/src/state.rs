//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{ProfileStore, SupabaseStore};

/// Shared application state available to all request handlers.
///
/// Holds no per-request data; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Profile store client, built once at startup.
    pub store: Arc<dyn ProfileStore>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create application state backed by the Supabase store named in `config`.
    pub fn new(config: Config) -> Self {
        let store = SupabaseStore::new(&config.store_url, &config.store_key);

        tracing::info!(
            profiles_url = %store.profiles_url(),
            "application state initialized"
        );

        Self::with_store(config, store)
    }

    /// Create application state around an existing store.
    pub fn with_store(config: Config, store: impl ProfileStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
