//! Core types for the game storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod price;

pub use id::*;
pub use line_item::{CartLineItem, LineItemError};
pub use price::{CurrencyCode, Price, PriceError, UnknownCurrency, format_amount};
