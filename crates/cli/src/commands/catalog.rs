//! Catalog browsing commands.

use gamestore_core::GameId;
use gamestore_storefront::AppState;
use gamestore_storefront::catalog::{Game, Section};
use gamestore_storefront::error::Result;
use gamestore_storefront::views::{CartPresence, GameDetail};

/// List catalog games, grouped by section.
#[allow(clippy::print_stdout)]
pub fn list(state: &AppState, only: Option<Section>) {
    let store = state.store();
    let currency = state.config().currency;

    for section in Section::ALL {
        if only.is_some_and(|wanted| wanted != section) {
            continue;
        }
        println!("{}", section.title());
        for game in state.catalog().section(section) {
            let marker = if store.contains(game.id) { "*" } else { " " };
            println!(
                "{marker} {:>4}  {:<32} {:>9}",
                game.id.as_i32(),
                game.title,
                game.price.display(currency)
            );
        }
        println!();
    }
}

/// Show one game's detail page.
///
/// # Errors
///
/// Returns an error if the id is not in the catalog.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState, id: GameId) -> Result<()> {
    let detail = GameDetail::mount(state.store(), state.catalog(), id)?;
    let game = detail.game();

    println!("{} (#{})", game.title, game.id);
    println!("{}", game.price.display(state.config().currency));
    println!();
    println!("{}", game.description);
    println!();
    print_facts(game);
    if let Some(url) = detail.trailer_embed_url() {
        println!("Trailer:    {url}");
    }
    println!();

    let hint = match detail.presence() {
        CartPresence::InCart => "already in your cart".to_string(),
        CartPresence::NotInCart => format!("gs-cli add {}", game.id),
    };
    println!("[{}] {hint}", detail.button_label());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_facts(game: &Game) {
    println!("Genre:      {}", game.genre);
    println!("Publisher:  {}", game.publisher);
    match game.release_date() {
        Some(date) => println!("Released:   {}", date.format("%B %-d, %Y")),
        None => println!("Released:   {}", game.release_date),
    }
    println!("Platforms:  {}", game.platforms.join(", "));
    println!("Rating:     {}", game.rating);
    println!("Features:   {}", game.features.join(", "));
    println!("Tags:       {}", game.tags.join(", "));
}
