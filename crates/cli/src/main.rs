//! Game store CLI - browse the catalog, manage the cart, and check out.
//!
//! # Usage
//!
//! ```bash
//! # List every game, or one section
//! gs-cli games
//! gs-cli games --section xbox
//!
//! # Show one listing
//! gs-cli show 7
//!
//! # Manage the cart
//! gs-cli add 7
//! gs-cli remove 7
//! gs-cli cart
//! gs-cli clear
//!
//! # Simulated checkout
//! gs-cli checkout
//! ```
//!
//! The cart persists under `STOREFRONT_DATA_DIR` (default `.gamestore`), so it
//! survives between invocations. Logs go to stderr; set `RUST_LOG` to change
//! the level.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use gamestore_core::GameId;
use gamestore_storefront::catalog::Section;
use gamestore_storefront::{AppState, StorefrontConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "gs-cli")]
#[command(author, version, about = "Game store CLI")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog games
    Games {
        /// Only list one section (featured, pc, playstation, xbox, switch)
        #[arg(short, long)]
        section: Option<Section>,
    },
    /// Show details for one game
    Show {
        /// Game id
        id: GameId,
    },
    /// Add a game to the cart
    Add {
        /// Game id
        id: GameId,
    },
    /// Remove a game from the cart
    Remove {
        /// Game id
        id: GameId,
    },
    /// Show the cart and order summary
    Cart,
    /// Empty the cart
    Clear,
    /// Run the simulated checkout
    Checkout,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Defaults to info level for the storefront crate if `RUST_LOG` is not set.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gamestore_storefront=info,gamestore_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::open(config)?;

    match cli.command {
        Commands::Games { section } => commands::catalog::list(&state, section),
        Commands::Show { id } => commands::catalog::show(&state, id)?,
        Commands::Add { id } => commands::cart::add(&state, id)?,
        Commands::Remove { id } => commands::cart::remove(&state, id)?,
        Commands::Cart => commands::cart::show(&state),
        Commands::Clear => commands::cart::clear(&state)?,
        Commands::Checkout => commands::cart::checkout(&state).await?,
    }
    Ok(())
}
