//! Application state shared by the front ends.

use std::sync::Arc;

use crate::cart::{CartEvents, CartStore};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::storage::{FileStorage, KeyValueStorage};

/// Application state: configuration, the cart store, and the catalog.
///
/// This struct is cheaply cloneable via `Arc`. The cart store inside it is
/// the one handle every view should be mounted against.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: CartStore,
    catalog: Catalog,
}

impl AppState {
    /// Create application state over an arbitrary storage backend.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let store = CartStore::with_key(storage, CartEvents::new(), config.cart_key.as_str());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: Catalog::builtin(),
            }),
        }
    }

    /// Create application state persisting under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let storage = FileStorage::open(config.data_dir.clone())?;
        tracing::debug!(dir = %storage.dir().display(), "opened cart storage");
        Ok(Self::new(config, Arc::new(storage)))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared cart store.
    #[must_use]
    pub fn store(&self) -> &CartStore {
        &self.inner.store
    }

    /// Get a reference to the game catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("store", &self.inner.store)
            .finish_non_exhaustive()
    }
}
