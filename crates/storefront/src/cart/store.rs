//! Cart store adapter.
//!
//! [`CartStore`] is the only way to mutate the persisted cart. Every
//! successful mutation is followed by a synchronous publish on
//! [`CartEvents`], so by the time `add`/`remove`/`clear` returns, every
//! subscribed view has already re-read the cart.
//!
//! # Persisted format
//!
//! The cart is a JSON array of `{"id", "title", "price", "imageUrl"}` objects
//! under a single storage key. Reads are defensive:
//!
//! - a missing key, unreadable storage, or anything that is not a JSON array
//!   reads as an empty cart
//! - entries that do not decode (missing or non-numeric `price`, wrong field
//!   types) are skipped
//! - a repeated `id` keeps the first entry
//!
//! Writes always persist the sanitized list, so skipped entries are dropped
//! on the next mutation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use gamestore_core::{CartLineItem, GameId};
use rust_decimal::Decimal;
use tracing::instrument;

use super::events::CartEvents;
use crate::error::Result;
use crate::storage::{KeyValueStorage, MemoryStorage};

/// Storage key holding the cart.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Read-only view of the persisted cart.
///
/// This is what change handlers receive: it can query the cart but has no
/// way to mutate it or to publish.
#[derive(Clone)]
pub struct CartReader {
    storage: Arc<dyn KeyValueStorage>,
    key: Arc<str>,
}

impl CartReader {
    /// All valid line items, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CartLineItem> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read cart; treating as empty");
                return Vec::new();
            }
        };
        decode_cart(&raw)
    }

    /// Whether an item with `id` is in the cart.
    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.list().iter().any(|item| item.id == id)
    }

    /// Number of valid line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    /// Whether the cart has no valid line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Sum of the valid line item prices.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.list().iter().map(|item| item.price.to_decimal()).sum()
    }

    /// Storage key this reader uses.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for CartReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartReader").field("key", &self.key).finish()
    }
}

/// Decode a persisted cart, skipping anything that is not a valid line item.
fn decode_cart(raw: &str) -> Vec<CartLineItem> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "corrupt cart data; treating as empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<CartLineItem>(entry) {
                Ok(item) if seen.insert(item.id) => Some(item),
                Ok(item) => {
                    tracing::debug!(index, id = %item.id, "duplicate cart entry skipped");
                    None
                }
                Err(e) => {
                    tracing::debug!(index, error = %e, "invalid cart entry skipped");
                    None
                }
            },
        )
        .collect()
}

/// Gateway for reading and mutating the persisted cart.
///
/// Cheaply cloneable; clones share storage and the change channel. Hand a
/// clone to every component that needs cart access.
#[derive(Clone)]
pub struct CartStore {
    reader: CartReader,
    events: CartEvents,
}

impl CartStore {
    /// Create a store over `storage` using the default `cart` key.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>, events: CartEvents) -> Self {
        Self::with_key(storage, events, DEFAULT_CART_KEY)
    }

    /// Create a store over `storage` using a custom key.
    #[must_use]
    pub fn with_key(
        storage: Arc<dyn KeyValueStorage>,
        events: CartEvents,
        key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            reader: CartReader {
                storage,
                key: key.into(),
            },
            events,
        }
    }

    /// Create a store backed by fresh in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), CartEvents::new())
    }

    /// Read-only half of the store.
    #[must_use]
    pub const fn reader(&self) -> &CartReader {
        &self.reader
    }

    /// Change channel published after every mutation.
    #[must_use]
    pub const fn events(&self) -> &CartEvents {
        &self.events
    }

    /// All valid line items, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CartLineItem> {
        self.reader.list()
    }

    /// Whether an item with `id` is in the cart.
    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.reader.contains(id)
    }

    /// Append `item` unless its id is already present.
    ///
    /// Returns `true` if the item was added. Subscribers are notified only
    /// when the cart actually changed.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add(&self, item: CartLineItem) -> bool {
        let mut items = self.reader.list();
        if items.iter().any(|existing| existing.id == item.id) {
            tracing::debug!("item already in cart");
            return false;
        }

        items.push(item);
        if let Err(e) = self.persist(&items) {
            tracing::error!(error = %e, "failed to persist cart");
            return false;
        }

        tracing::info!(items = items.len(), "added to cart");
        self.events.publish();
        true
    }

    /// Remove the item with `id`, if any.
    ///
    /// Always notifies subscribers, even when nothing matched.
    #[instrument(skip(self))]
    pub fn remove(&self, id: GameId) {
        let items: Vec<CartLineItem> = self
            .reader
            .list()
            .into_iter()
            .filter(|item| item.id != id)
            .collect();

        match self.persist(&items) {
            Ok(()) => tracing::info!(items = items.len(), "removed from cart"),
            Err(e) => tracing::error!(error = %e, "failed to persist cart"),
        }
        self.events.publish();
    }

    /// Empty the cart and notify subscribers.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        match self.persist(&[]) {
            Ok(()) => tracing::info!("cart cleared"),
            Err(e) => tracing::error!(error = %e, "failed to persist cart"),
        }
        self.events.publish();
    }

    fn persist(&self, items: &[CartLineItem]) -> Result<()> {
        let encoded = serde_json::to_string(items)?;
        self.reader.storage.write(&self.reader.key, &encoded)?;
        Ok(())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("reader", &self.reader)
            .field("events", &self.events)
            .finish()
    }
}
