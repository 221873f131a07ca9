//! Tillr CLI application entry point
//!
//! This is the main executable for tillr. It provides a command-line
//! interface for looking up store items and managing the item database.
//!
//! # Usage
//!
//! ```bash
//! # Look up items; several queries are separated with `;`
//! tillr lookup bananas
//! tillr lookup "apple!;tag:produce"
//!
//! # Arithmetic and round-up on the query line
//! tillr lookup "3*1.99"
//! tillr lookup 37
//!
//! # Manage the item database
//! tillr db refresh
//! tillr db info
//!
//! # Preferences
//! tillr prefs set items_per_page=6
//! ```
//!
//! # Configuration
//!
//! Preferences are stored in the user's config directory
//! (`~/.config/tillr/config.toml` on Linux). Set `RUST_LOG` (e.g.
//! `RUST_LOG=tillr=debug`) for diagnostics on stderr.

use tillr::{
    TillrError,
    cli::{Cli, Commands},
    commands,
    config::TillrConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, TillrError>;

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse_args();
    let config = TillrConfig::load_or_default();
    let quiet = cli.quiet;

    match &cli.command {
        Commands::Lookup { query, all, offline } => {
            let state = commands::load_state(config, *offline)?;
            commands::lookup(&state, query, *all, quiet)?;
        }
        Commands::Tags { offline } => {
            let state = commands::load_state(config, *offline)?;
            commands::tags(&state, quiet)?;
        }
        Commands::Db { command } => commands::db(config, command, quiet)?,
        Commands::Prefs { command } => commands::prefs(config, command, quiet)?,
    }

    Ok(())
}
