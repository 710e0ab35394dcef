//! Order totals.

use gamestore_core::{CartLineItem, CurrencyCode, format_amount};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Subtotal, tax, and total for a set of line items.
///
/// Tax is rounded to cents; the total is the sum of the rounded parts, so
/// the three displayed amounts always add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub item_count: usize,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute totals for `items` at `tax_rate` (e.g., `0.10` for 10%).
    #[must_use]
    pub fn from_items(items: &[CartLineItem], tax_rate: Decimal) -> Self {
        let subtotal: Decimal = items.iter().map(|item| item.price.to_decimal()).sum();
        let tax = (subtotal * tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            item_count: items.len(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Formatted subtotal.
    #[must_use]
    pub fn subtotal_label(&self, currency: CurrencyCode) -> String {
        format_amount(self.subtotal, currency)
    }

    /// Formatted tax.
    #[must_use]
    pub fn tax_label(&self, currency: CurrencyCode) -> String {
        format_amount(self.tax, currency)
    }

    /// Formatted total.
    #[must_use]
    pub fn total_label(&self, currency: CurrencyCode) -> String {
        format_amount(self.total, currency)
    }
}
