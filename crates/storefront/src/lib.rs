//! Game store storefront library.
//!
//! Cart synchronization core of the storefront: a persisted cart behind a
//! single store handle, a change channel, and the views that stay in line
//! with it. The catalog and simulated checkout sit on top.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod views;

pub use cart::{CartEvents, CartReader, CartStore, OrderSummary, Subscription};
pub use catalog::{Catalog, Game, Section};
pub use checkout::{CheckoutSettings, CheckoutState, OrderReceipt, simulate_checkout};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use state::AppState;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
