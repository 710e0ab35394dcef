//! Catalog card with an add-to-cart button.

use gamestore_core::{CartLineItem, GameId};
use serde::Serialize;

use super::sync::ViewSync;
use crate::cart::CartStore;
use crate::catalog::Game;

/// Whether a card's item is in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartPresence {
    #[default]
    NotInCart,
    InCart,
}

impl CartPresence {
    #[must_use]
    pub const fn from_contains(in_cart: bool) -> Self {
        if in_cart { Self::InCart } else { Self::NotInCart }
    }

    #[must_use]
    pub const fn is_in_cart(self) -> bool {
        matches!(self, Self::InCart)
    }

    /// Text of the card's cart button.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::NotInCart => "Add to Cart",
            Self::InCart => "In Cart",
        }
    }
}

/// A purchasable item on screen, kept in line with the cart.
#[derive(Debug)]
pub struct GameCard {
    store: CartStore,
    item: CartLineItem,
    presence: ViewSync<CartPresence>,
}

impl GameCard {
    /// Mount a card for a catalog listing.
    #[must_use]
    pub fn mount(store: &CartStore, game: &Game) -> Self {
        Self::from_line_item(store, game.line_item())
    }

    /// Mount a card for an arbitrary line item.
    #[must_use]
    pub fn from_line_item(store: &CartStore, item: CartLineItem) -> Self {
        let id = item.id;
        let presence = ViewSync::mount(store, move |cart| {
            CartPresence::from_contains(cart.contains(id))
        });
        Self {
            store: store.clone(),
            item,
            presence,
        }
    }

    #[must_use]
    pub const fn id(&self) -> GameId {
        self.item.id
    }

    #[must_use]
    pub const fn item(&self) -> &CartLineItem {
        &self.item
    }

    #[must_use]
    pub fn presence(&self) -> CartPresence {
        self.presence.get()
    }

    #[must_use]
    pub fn is_in_cart(&self) -> bool {
        self.presence().is_in_cart()
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        self.presence().button_label()
    }

    /// Add this card's item to the cart.
    ///
    /// Returns `false` if an item with the same id was already there.
    pub fn add_to_cart(&self) -> bool {
        let added = self.store.add(self.item.clone());
        if added {
            self.presence.set_optimistic(CartPresence::InCart);
        }
        added
    }

    /// Stop following cart changes.
    pub fn unmount(&mut self) {
        self.presence.unmount();
    }
}
