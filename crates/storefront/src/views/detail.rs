//! Game detail page.

use gamestore_core::GameId;
use tracing::instrument;

use super::card::{CartPresence, GameCard};
use crate::cart::CartStore;
use crate::catalog::{Catalog, Game};
use crate::error::Result;

/// Detail page for one listing.
#[derive(Debug)]
pub struct GameDetail {
    game: Game,
    card: GameCard,
}

impl GameDetail {
    /// Look up `id` and mount its page.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::GameNotFound` if the catalog has no such id.
    #[instrument(skip(store, catalog))]
    pub fn mount(store: &CartStore, catalog: &Catalog, id: GameId) -> Result<Self> {
        let game = catalog.get(id)?.clone();
        let card = GameCard::mount(store, &game);
        Ok(Self { game, card })
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn presence(&self) -> CartPresence {
        self.card.presence()
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        self.card.button_label()
    }

    /// Add the game to the cart. Returns `false` if it was already there.
    pub fn add_to_cart(&self) -> bool {
        self.card.add_to_cart()
    }

    /// Embeddable trailer url, if the listing has a recognizable one.
    #[must_use]
    pub fn trailer_embed_url(&self) -> Option<String> {
        self.game.youtube_embed_url()
    }

    pub fn unmount(&mut self) {
        self.card.unmount();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[test]
    fn test_unknown_game() {
        let store = CartStore::in_memory();
        let result = GameDetail::mount(&store, &Catalog::builtin(), GameId::new(42));
        assert!(matches!(result, Err(StorefrontError::GameNotFound(_))));
        assert_eq!(store.events().subscriber_count(), 0);
    }

    #[test]
    fn test_detail_follows_card_added_elsewhere() {
        let store = CartStore::in_memory();
        let catalog = Catalog::builtin();
        let detail = GameDetail::mount(&store, &catalog, GameId::new(300)).unwrap();
        let card = GameCard::mount(&store, catalog.get(GameId::new(300)).unwrap());

        assert_eq!(detail.presence(), CartPresence::NotInCart);
        card.add_to_cart();
        assert_eq!(detail.presence(), CartPresence::InCart);
        assert_eq!(detail.game().title, "Grand Theft Auto VI");
        assert_eq!(
            detail.trailer_embed_url().as_deref(),
            Some("https://www.youtube.com/embed/QdBZY2fkU-0")
        );
    }
}
