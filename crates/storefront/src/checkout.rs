//! Simulated checkout.
//!
//! There is no payment provider. Checkout waits a fixed delay, then clears the
//! cart and hands back a receipt. It cannot fail and cannot be cancelled:
//! once started it always ends with an empty cart.

use std::time::Duration;

use chrono::{DateTime, Utc};
use gamestore_core::{CartLineItem, CurrencyCode};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::cart::{CartStore, OrderSummary};

/// Parameters for the simulated checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Simulated payment processing time.
    pub delay: Duration,
    /// Tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Display currency for the receipt.
    pub currency: CurrencyCode,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
            tax_rate: Decimal::new(10, 2),
            currency: CurrencyCode::default(),
        }
    }
}

/// Confirmation of a completed (simulated) order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub order_number: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartLineItem>,
    pub summary: OrderSummary,
    pub currency: CurrencyCode,
}

impl OrderReceipt {
    /// Short order reference shown to the customer (first 8 hex digits).
    #[must_use]
    pub fn reference(&self) -> String {
        self.order_number
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Progress of a checkout started from the cart page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    Processing,
    Completed(OrderReceipt),
}

impl CheckoutState {
    /// Whether a payment is currently being processed.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(self, Self::Processing)
    }
}

/// Wait out the simulated payment, then clear the cart.
///
/// The receipt lists the items that were in the cart when it was cleared.
#[instrument(skip_all, fields(delay = ?settings.delay))]
pub async fn simulate_checkout(store: &CartStore, settings: &CheckoutSettings) -> OrderReceipt {
    tracing::info!("processing payment");
    tokio::time::sleep(settings.delay).await;

    let items = store.list();
    let summary = OrderSummary::from_items(&items, settings.tax_rate);
    store.clear();

    let receipt = OrderReceipt {
        order_number: Uuid::new_v4(),
        placed_at: Utc::now(),
        items,
        summary,
        currency: settings.currency,
    };
    tracing::info!(
        order = %receipt.order_number,
        items = receipt.summary.item_count,
        total = %receipt.summary.total,
        "order placed"
    );
    receipt
}
