//! Integration tests for views staying in line with the shared cart.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gamestore_core::GameId;
use gamestore_integration_tests::TestContext;
use gamestore_storefront::catalog::Section;
use gamestore_storefront::views::{CartBadge, CartPage, CartPresence, GameCard, GameDetail};

// =============================================================================
// Fan-out
// =============================================================================

#[test]
fn test_every_view_updated_before_add_returns() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let store = state.store();

    let cards: Vec<GameCard> = state
        .catalog()
        .section(Section::Pc)
        .map(|game| GameCard::mount(store, game))
        .collect();
    let badge = CartBadge::mount(store);
    let page = CartPage::mount(store, state.config().checkout_settings());

    let elden_ring = cards.iter().find(|card| card.id() == GameId::new(7)).unwrap();
    assert!(elden_ring.add_to_cart());

    assert_eq!(badge.count(), 1);
    assert_eq!(page.items().len(), 1);
    for card in &cards {
        let expected = CartPresence::from_contains(card.id() == GameId::new(7));
        assert_eq!(card.presence(), expected, "card {}", card.id());
    }
}

#[test]
fn test_detail_page_and_card_share_state() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let store = state.store();
    let game = state.catalog().get(GameId::new(1)).unwrap();

    let featured = GameCard::mount(store, game);
    let detail = GameDetail::mount(store, state.catalog(), GameId::new(1)).unwrap();

    assert!(detail.add_to_cart());
    assert_eq!(featured.button_label(), "In Cart");

    let page = CartPage::mount(store, state.config().checkout_settings());
    page.remove(GameId::new(1)).unwrap();
    assert_eq!(featured.button_label(), "Add to Cart");
    assert_eq!(detail.button_label(), "Add to Cart");
}

#[test]
fn test_platform_editions_are_separate_items() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let store = state.store();

    let editions: Vec<GameCard> = state
        .catalog()
        .editions_of("Minecraft")
        .into_iter()
        .map(|game| GameCard::mount(store, game))
        .collect();
    assert_eq!(editions.len(), 4);

    for card in &editions {
        assert!(card.add_to_cart());
    }
    assert_eq!(store.list().len(), 4);

    store.remove(editions[0].id());
    assert!(!editions[0].is_in_cart());
    assert!(editions[1..].iter().all(GameCard::is_in_cart));
}

#[test]
fn test_clear_notifies_all_views_once() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let store = state.store();

    let calls = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&calls);
    let _first = store.events().subscribe(move || {
        handle.fetch_add(1, Ordering::SeqCst);
    });
    let handle = Arc::clone(&calls);
    let _second = store.events().subscribe(move || {
        handle.fetch_add(1, Ordering::SeqCst);
    });

    store.clear();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(store.list().is_empty());
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn test_unmounted_views_release_their_handlers() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let store = state.store();

    {
        let _cards: Vec<GameCard> = state
            .catalog()
            .all()
            .iter()
            .map(|game| GameCard::mount(store, game))
            .collect();
        let _badge = CartBadge::mount(store);
        assert_eq!(
            store.events().subscriber_count(),
            state.catalog().all().len() + 1
        );
    }

    assert_eq!(store.events().subscriber_count(), 0);
}
