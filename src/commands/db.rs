//! Db command - manage the remote item database

use crate::{
    TillrError,
    cli::DbCommands,
    config::TillrConfig,
    output,
    source::{DbCache, HttpFetcher, RemoteSource},
    state::AppState,
};

type Result<T> = std::result::Result<T, TillrError>;

/// Execute a database management command
///
/// # Errors
/// Returns an error if the cache directory is unknown, the fetch fails, or
/// the cache cannot be removed
pub fn execute(config: TillrConfig, command: &DbCommands, quiet: bool) -> Result<()> {
    let cache = DbCache::default_location()
        .ok_or_else(|| TillrError::InvalidInput("Could not determine cache directory".into()))?;

    match command {
        DbCommands::Refresh => refresh(config, &cache, quiet),
        DbCommands::Info => info(&config, &cache, quiet),
        DbCommands::ClearCache => {
            cache.clear()?;
            if !quiet {
                println!("Removed {}", cache.path().display());
            }
            Ok(())
        }
    }
}

fn refresh(config: TillrConfig, cache: &DbCache, quiet: bool) -> Result<()> {
    let url = config.db_url.clone();
    let mut state = AppState::new(config);
    let mut source = RemoteSource::new(HttpFetcher::new()?);

    if !state.sync_remote(&mut source, Some(cache), true) {
        return Err(TillrError::InvalidInput(format!(
            "Could not load an item database from {url}"
        )));
    }

    if !quiet && let Some(db) = state.remote() {
        println!("Loaded {} with {} item(s)", output::db_info(db), state.remote_items().len());
    }
    Ok(())
}

fn info(config: &TillrConfig, cache: &DbCache, quiet: bool) -> Result<()> {
    let Some(db) = cache.load() else {
        if !quiet {
            println!("No cached item database. Run `tillr db refresh` to fetch one.");
        }
        return Ok(());
    };

    println!("{}", output::db_info(&db.info()));
    if !quiet {
        println!("  items: {}", db.items.len());
        println!("  url:   {}", config.db_url);
        println!("  cache: {}", cache.path().display());
    }
    Ok(())
}
