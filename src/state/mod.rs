//! Application state
//!
//! [`AppState`] owns everything the lookup view reads: preferences, the two
//! item sources, and the catalog and index derived from them. It changes only
//! through [`AppState::apply`], which recomputes derived state before
//! returning, so a reader never sees a catalog and index that disagree.
//!
//! Derived state is shared as `Arc` snapshots. Each carries a version stamp;
//! a [`QuerySession`] compares stamps to decide what to re-resolve.

mod session;

pub use session::{QuerySession, ScrollBehavior, ScrollState, SegmentSlot, SessionEvent};

use crate::catalog::{CompiledCatalog, Item, ItemDb, ItemDbInfo, build_catalog, parse_user_items};
use crate::config::TillrConfig;
use crate::query::QuerySyntax;
use crate::search::{MatchMode, SearchIndex};
use crate::source::{DatabaseFetcher, DbCache, RemoteSource};
use std::sync::Arc;

/// A change to the application state
#[derive(Debug, Clone)]
pub enum Update {
    /// Replace the remote database; `None` empties the remote item set
    SetRemote(Option<ItemDb>),
    /// Replace the user item text
    SetUserItems(String),
    /// Switch between whole-string and tokenized matching
    SetTokenize(bool),
    /// Replace every preference
    SetConfig(TillrConfig),
    /// Restore every preference to its default
    ResetPrefs,
}

/// The single state container
#[derive(Debug, Clone)]
pub struct AppState {
    config: TillrConfig,
    syntax: QuerySyntax,
    remote: Option<ItemDbInfo>,
    remote_items: Vec<Item>,
    user_items: Vec<Item>,
    catalog: Arc<CompiledCatalog>,
    index: Arc<SearchIndex>,
    prefs_version: u64,
}

impl AppState {
    /// State with no remote database
    #[must_use]
    pub fn new(config: TillrConfig) -> Self {
        let config = config.normalized();
        let user_items = parse_user_items(&config.user_items);
        let catalog = Arc::new(build_catalog(&[], &user_items));
        let index = Arc::new(SearchIndex::build(
            Arc::clone(&catalog),
            MatchMode::from_tokenize(config.tokenize_search),
        ));

        Self {
            syntax: QuerySyntax::from_config(&config),
            config,
            remote: None,
            remote_items: Vec::new(),
            user_items,
            catalog,
            index,
            prefs_version: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &TillrConfig {
        &self.config
    }

    #[must_use]
    pub const fn syntax(&self) -> &QuerySyntax {
        &self.syntax
    }

    /// Name and version of the loaded remote database
    #[must_use]
    pub const fn remote(&self) -> Option<&ItemDbInfo> {
        self.remote.as_ref()
    }

    #[must_use]
    pub fn remote_items(&self) -> &[Item] {
        &self.remote_items
    }

    #[must_use]
    pub fn user_items(&self) -> &[Item] {
        &self.user_items
    }

    #[must_use]
    pub const fn catalog(&self) -> &Arc<CompiledCatalog> {
        &self.catalog
    }

    #[must_use]
    pub const fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    /// Bumped whenever preferences are replaced
    #[must_use]
    pub const fn prefs_version(&self) -> u64 {
        self.prefs_version
    }

    /// Apply an update and recompute what depends on it
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::SetRemote(db) => {
                match db {
                    Some(db) => {
                        self.remote = Some(db.info());
                        self.remote_items = db.items;
                    }
                    None => {
                        self.remote = None;
                        self.remote_items.clear();
                    }
                }
                self.rebuild_catalog();
            }
            Update::SetUserItems(text) => {
                let mut config = self.config.clone();
                config.user_items = text;
                self.set_config(config);
            }
            Update::SetTokenize(tokenize) => {
                let mut config = self.config.clone();
                config.tokenize_search = tokenize;
                self.set_config(config);
            }
            Update::SetConfig(config) => self.set_config(config),
            Update::ResetPrefs => self.set_config(TillrConfig::default()),
        }
    }

    fn set_config(&mut self, config: TillrConfig) {
        let config = config.normalized();
        if config == self.config {
            return;
        }

        let user_items_changed = config.user_items != self.config.user_items;
        let mode_changed = config.tokenize_search != self.config.tokenize_search;

        self.syntax = QuerySyntax::from_config(&config);
        self.config = config;
        self.prefs_version += 1;

        if user_items_changed {
            self.user_items = parse_user_items(&self.config.user_items);
            self.rebuild_catalog();
        } else if mode_changed {
            self.rebuild_index();
        }
    }

    fn rebuild_catalog(&mut self) {
        self.catalog = Arc::new(build_catalog(&self.remote_items, &self.user_items));
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        let mode = MatchMode::from_tokenize(self.config.tokenize_search);
        self.index = Arc::new(SearchIndex::build(Arc::clone(&self.catalog), mode));
        tracing::debug!(
            catalog_version = self.catalog.version(),
            index_version = self.index.version(),
            ?mode,
            "Search index rebuilt"
        );
    }

    /// Seed the remote item set from the on-disk cache
    ///
    /// Returns whether a cached database was applied.
    pub fn load_cached(&mut self, cache: &DbCache) -> bool {
        match cache.load() {
            Some(db) => {
                tracing::info!(
                    name = %db.name,
                    version = %db.version,
                    "Loaded item database from cache"
                );
                self.apply(Update::SetRemote(Some(db)));
                true
            }
            None => false,
        }
    }

    /// Fetch the configured database and replace the remote item set
    ///
    /// On success the cache is rewritten; on failure it is removed and the
    /// remote item set emptied. Cache writes are best-effort. Returns whether
    /// a database was loaded.
    pub fn sync_remote<F: DatabaseFetcher>(
        &mut self,
        source: &mut RemoteSource<F>,
        cache: Option<&DbCache>,
        force: bool,
    ) -> bool {
        let url = self.config.db_url.clone();

        match source.get(&url, force) {
            Some(db) => {
                if let Some(cache) = cache
                    && let Err(e) = cache.save(&db)
                {
                    tracing::warn!(error = %e, "Failed to write database cache");
                }
                self.apply(Update::SetRemote(Some(db)));
                true
            }
            None => {
                if let Some(cache) = cache
                    && let Err(e) = cache.clear()
                {
                    tracing::warn!(error = %e, "Failed to clear database cache");
                }
                self.apply(Update::SetRemote(None));
                false
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TillrConfig::default())
    }
}
