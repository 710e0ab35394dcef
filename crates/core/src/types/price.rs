//! Type-safe price representation.
//!
//! Prices are stored as `f64` because the persisted cart encodes them as bare
//! JSON numbers, and an `f64` round-trips through `serde_json` losslessly.
//! Arithmetic on money (subtotals, tax) goes through [`Price::to_decimal`] so
//! that sums of cents stay exact.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing a [`Price`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("price must be a finite number")]
    NotFinite,
    #[error("price must not be negative (got {0})")]
    Negative(f64),
    #[error("price {0} is too large")]
    OutOfRange(f64),
    #[error("invalid price text: {0:?}")]
    Unparseable(String),
}

/// A non-negative, finite amount in the storefront's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the amount is NaN, infinite, negative, or too
    /// large to be represented as a decimal.
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if amount < 0.0 {
            return Err(PriceError::Negative(amount));
        }
        if Decimal::from_f64(amount).is_none() {
            return Err(PriceError::OutOfRange(amount));
        }
        Ok(Self(amount))
    }

    /// Get the raw amount.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Get the amount as a decimal for exact money arithmetic.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        // Range was checked in `new`.
        Decimal::from_f64(self.0).unwrap_or_default()
    }

    /// Format for display in the given currency (e.g., "€69.99").
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format_amount(self.to_decimal(), currency)
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Parses listing prices that arrive as formatted text.
///
/// Currency symbols, codes, and whitespace around the number are ignored and
/// `,` is treated as a thousands separator: `"€69.99"`, `"$1,234.50"`, and
/// `"42.5 EUR"` are all accepted.
impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numeric: String = s
            .trim()
            .trim_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let amount = numeric
            .parse::<f64>()
            .map_err(|_| PriceError::Unparseable(s.to_string()))?;
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(CurrencyCode::default()))
    }
}

/// Format a decimal amount with the currency symbol and exactly two decimals.
///
/// Half-cents round away from zero.
#[must_use]
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{}{rounded}", currency.symbol())
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

/// Error parsing a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::EUR),
            "USD" => Ok(Self::USD),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}
