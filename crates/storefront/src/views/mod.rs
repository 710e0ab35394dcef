//! View synchronizers.
//!
//! Each view keeps its displayed state derived from the cart. It reads the
//! store when mounted and re-reads on every cart change until it is
//! unmounted or dropped. Views never cache cart contents beyond that.
//!
//! - [`GameCard`] - catalog card with an add-to-cart button
//! - [`GameDetail`] - detail page for one listing
//! - [`CartPage`] - line items, totals, and checkout
//! - [`CartBadge`] - navbar item count

pub mod badge;
pub mod card;
pub mod cart_page;
pub mod detail;
pub mod sync;

pub use badge::CartBadge;
pub use card::{CartPresence, GameCard};
pub use cart_page::CartPage;
pub use detail::GameDetail;
pub use sync::ViewSync;
