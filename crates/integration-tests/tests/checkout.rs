//! Integration tests for checkout from the cart page.

#![allow(clippy::unwrap_used)]

use gamestore_core::GameId;
use gamestore_integration_tests::TestContext;
use gamestore_storefront::StorefrontError;
use gamestore_storefront::checkout::CheckoutState;
use gamestore_storefront::views::{CartBadge, CartPage, GameCard};

#[tokio::test]
async fn test_checkout_end_to_end() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let store = state.store();

    let cards: Vec<GameCard> = [4, 5]
        .into_iter()
        .map(|id| GameCard::mount(store, state.catalog().get(GameId::new(id)).unwrap()))
        .collect();
    for card in &cards {
        assert!(card.add_to_cart());
    }

    let badge = CartBadge::mount(store);
    let page = CartPage::mount(store, state.config().checkout_settings());
    assert_eq!(page.item_count_label(), "2 items in your cart");

    let receipt = page.checkout().await.unwrap();

    assert_eq!(receipt.items.len(), 2);
    assert_eq!(receipt.summary.subtotal_label(receipt.currency), "€112.49");
    assert_eq!(receipt.summary.tax_label(receipt.currency), "€11.25");
    assert_eq!(receipt.summary.total_label(receipt.currency), "€123.74");

    assert!(page.is_empty());
    assert_eq!(badge.count(), 0);
    assert!(cards.iter().all(|card| !card.is_in_cart()));
    assert!(matches!(page.checkout_state(), CheckoutState::Completed(_)));

    let reopened = ctx.open().unwrap();
    assert!(reopened.store().list().is_empty());
}

#[tokio::test]
async fn test_checkout_with_empty_cart() {
    let ctx = TestContext::new();
    let state = ctx.open().unwrap();
    let page = CartPage::mount(state.store(), state.config().checkout_settings());

    let result = page.checkout().await;
    assert!(matches!(result, Err(StorefrontError::EmptyCart)));
}
