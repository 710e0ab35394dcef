//! Game storefront core - Shared types library.
//!
//! This crate provides common types used across all storefront components:
//! - `storefront` - Cart store, change notifications, views, and catalog
//! - `cli` - Command-line front end for browsing the catalog and the cart
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
