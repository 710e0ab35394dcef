//! Navbar cart badge.

use super::sync::ViewSync;
use crate::cart::{CartReader, CartStore};

/// Item count shown next to the cart link.
#[derive(Debug)]
pub struct CartBadge {
    count: ViewSync<usize>,
}

impl CartBadge {
    #[must_use]
    pub fn mount(store: &CartStore) -> Self {
        Self {
            count: ViewSync::mount(store, CartReader::len),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Badge text; `None` hides the badge.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self.count() {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }

    pub fn unmount(&mut self) {
        self.count.unmount();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gamestore_core::{CartLineItem, GameId, Price};

    use super::*;

    #[test]
    fn test_badge_counts_items() {
        let store = CartStore::in_memory();
        let badge = CartBadge::mount(&store);
        assert_eq!(badge.label(), None);

        for id in 1..=3 {
            let item =
                CartLineItem::new(GameId::new(id), "Game", Price::new(1.0).unwrap(), "x").unwrap();
            store.add(item);
        }
        assert_eq!(badge.count(), 3);
        assert_eq!(badge.label().as_deref(), Some("3"));

        store.clear();
        assert_eq!(badge.label(), None);
    }
}
