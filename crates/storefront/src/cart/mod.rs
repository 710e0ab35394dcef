//! Shared cart state.
//!
//! - [`CartStore`] - sole gateway for reading and mutating the persisted cart
//! - [`CartEvents`] - change channel published after every mutation
//! - [`OrderSummary`] - subtotal, tax, and total for a list of line items
//!
//! Components never hold their own copy of the cart. They read through the
//! store and re-read whenever [`CartEvents`] fires (see [`crate::views`]).

pub mod events;
pub mod store;
pub mod summary;

pub use events::{CART_UPDATED, CartEvents, Subscription};
pub use store::{CartReader, CartStore, DEFAULT_CART_KEY};
pub use summary::OrderSummary;
