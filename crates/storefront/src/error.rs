//! Unified error handling.
//!
//! Cart reads never fail (see [`crate::cart::CartStore`]); this type covers
//! the operations around them that can: loading configuration, opening
//! storage, looking up catalog entries, and starting a checkout.

use gamestore_core::{GameId, LineItemError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Line item failed validation.
    #[error("Invalid line item: {0}")]
    LineItem(#[from] LineItemError),

    /// No game with this id in the catalog.
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    /// Checkout requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A checkout is already being processed.
    #[error("Checkout already in progress")]
    CheckoutInProgress,

    /// The payment task stopped before producing a receipt.
    #[error("Checkout task failed: {0}")]
    CheckoutAborted(#[from] tokio::task::JoinError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::GameNotFound(GameId::new(999));
        assert_eq!(err.to_string(), "Game not found: 999");

        let err = StorefrontError::EmptyCart;
        assert_eq!(err.to_string(), "Cart is empty");

        let err = StorefrontError::from(LineItemError::EmptyTitle);
        assert_eq!(
            err.to_string(),
            "Invalid line item: line item title must not be empty"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let err: StorefrontError = StorageError::InvalidKey("../x".to_string()).into();
        assert!(matches!(err, StorefrontError::Storage(_)));
    }
}
