//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the application state.

pub mod db;
pub mod lookup;
pub mod prefs;
pub mod tags;

// Re-export execute functions for convenience
pub use db::execute as db;
pub use lookup::execute as lookup;
pub use prefs::execute as prefs;
pub use tags::execute as tags;

use crate::config::TillrConfig;
use crate::source::{DbCache, HttpFetcher, RemoteSource};
use crate::state::AppState;
use crate::TillrError;

type Result<T> = std::result::Result<T, TillrError>;

/// Build the application state for a command
///
/// The cached database is applied first. Unless `offline` is set, the
/// configured database is then fetched, replacing it.
///
/// # Errors
///
/// Returns `TillrError::SourceError` if the HTTP client cannot be created.
pub fn load_state(config: TillrConfig, offline: bool) -> Result<AppState> {
    let mut state = AppState::new(config);
    let cache = DbCache::default_location();

    if let Some(cache) = &cache {
        state.load_cached(cache);
    }

    if !offline {
        let mut source = RemoteSource::new(HttpFetcher::new()?);
        state.sync_remote(&mut source, cache.as_ref(), false);
    }

    Ok(state)
}
