//! Integration tests for the game store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gamestore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_sync` - views across the catalog staying in line with one store
//! - `persistence` - file-backed carts surviving a restart, corrupt data
//! - `checkout` - cart page checkout end to end

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use gamestore_storefront::{AppState, FileStorage, StorageError, StorefrontConfig};
use tempfile::TempDir;

/// A throwaway data directory, removed on drop.
pub struct TestContext {
    _temp: TempDir,
    dir: PathBuf,
}

impl TestContext {
    /// Create a data directory path inside a fresh temp dir.
    ///
    /// # Panics
    ///
    /// Panics if the temp dir cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dir = temp.path().join("data");
        Self { _temp: temp, dir }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Configuration pointing at this directory with a short checkout delay.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: self.dir.clone(),
            checkout_delay: Duration::from_millis(10),
            ..StorefrontConfig::default()
        }
    }

    /// Open application state over this directory, as a fresh process would.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(&self) -> gamestore_storefront::Result<AppState> {
        AppState::open(self.config())
    }

    /// Raw storage over this directory, for planting persisted data.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn storage(&self) -> Result<Arc<FileStorage>, StorageError> {
        FileStorage::open(self.dir.clone()).map(Arc::new)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
