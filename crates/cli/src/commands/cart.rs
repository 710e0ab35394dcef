//! Cart commands.
//!
//! Each command mounts the same views a page would, so what is printed is
//! exactly what those views see after the mutation's change notification.

use gamestore_core::GameId;
use gamestore_storefront::AppState;
use gamestore_storefront::checkout::OrderReceipt;
use gamestore_storefront::error::Result;
use gamestore_storefront::views::{CartBadge, CartPage, GameCard};
use rust_decimal::Decimal;

/// Add a catalog game to the cart.
///
/// # Errors
///
/// Returns an error if the id is not in the catalog.
#[allow(clippy::print_stdout)]
pub fn add(state: &AppState, id: GameId) -> Result<()> {
    let game = state.catalog().get(id)?;
    let badge = CartBadge::mount(state.store());
    let card = GameCard::mount(state.store(), game);

    if card.add_to_cart() {
        println!("Added {} to your cart.", game.title);
    } else {
        println!("{} is already in your cart.", game.title);
    }
    println!("[{}] cart: {}", card.button_label(), badge.count());
    Ok(())
}

/// Remove a game from the cart. Removing an id that is not there is a no-op.
///
/// # Errors
///
/// Returns an error if a checkout is in progress.
#[allow(clippy::print_stdout)]
pub fn remove(state: &AppState, id: GameId) -> Result<()> {
    let page = CartPage::mount(state.store(), state.config().checkout_settings());
    let was_present = state.store().contains(id);

    page.remove(id)?;

    if was_present {
        println!("Removed #{id} from your cart.");
    } else {
        println!("#{id} was not in your cart.");
    }
    println!("{}", page.item_count_label());
    Ok(())
}

/// Print the cart and order summary.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) {
    let page = CartPage::mount(state.store(), state.config().checkout_settings());
    let currency = page.currency();

    println!("{}", page.item_count_label());
    if page.is_empty() {
        println!("Your cart is empty. Start adding games with `gs-cli add <id>`.");
        return;
    }

    println!();
    for item in page.items() {
        println!(
            "{:>4}  {:<32} {:>9}",
            item.id.as_i32(),
            item.title,
            item.price.display(currency)
        );
    }

    let summary = page.summary();
    let tax_heading = format!(
        "Tax ({}%)",
        (state.config().tax_rate * Decimal::ONE_HUNDRED).normalize()
    );
    println!();
    println!("{:<16}{:>12}", "Subtotal", summary.subtotal_label(currency));
    println!("{tax_heading:<16}{:>12}", summary.tax_label(currency));
    println!("{:<16}{:>12}", "Total", summary.total_label(currency));
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if a checkout is in progress.
#[allow(clippy::print_stdout)]
pub fn clear(state: &AppState) -> Result<()> {
    let page = CartPage::mount(state.store(), state.config().checkout_settings());
    page.clear()?;
    println!("Cart cleared.");
    Ok(())
}

/// Run the simulated checkout and print the receipt.
///
/// # Errors
///
/// Returns an error if the cart is empty.
#[allow(clippy::print_stdout)]
pub async fn checkout(state: &AppState) -> Result<()> {
    let page = CartPage::mount(state.store(), state.config().checkout_settings());
    println!("Processing payment...");

    let receipt = page.checkout().await?;
    print_receipt(&receipt);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_receipt(receipt: &OrderReceipt) {
    let currency = receipt.currency;

    println!("Payment successful! Order {}", receipt.reference());
    println!("Placed {}", receipt.placed_at.format("%Y-%m-%d %H:%M:%S UTC"));
    for item in &receipt.items {
        println!("  {:<32} {:>9}", item.title, item.price.display(currency));
    }
    println!("Total charged: {}", receipt.summary.total_label(currency));
}
