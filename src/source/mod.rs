//! Remote item database
//!
//! The database is a JSON document published at a configurable URL. It is
//! validated against an embedded JSON schema before any of its items reach
//! the catalog, memoized per URL for the life of the process, and mirrored
//! to a cache file so the next start has items before the network answers.

pub mod cache;
pub mod error;

pub use cache::DbCache;
pub use error::SourceError;

use crate::catalog::ItemDb;
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Duration;

const DB_SCHEMA: &str = include_str!("schema.json");

static DB_VALIDATOR: LazyLock<jsonschema::Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(DB_SCHEMA).expect("embedded database schema is valid JSON");
    jsonschema::validator_for(&schema).expect("embedded database schema compiles")
});
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Retrieves the raw database document for a URL
///
/// The seam between the lookup logic and the network; tests provide an
/// in-memory implementation.
pub trait DatabaseFetcher {
    /// Fetch and decode the JSON document at `url`
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the request fails or the body is not JSON.
    fn fetch(&self, url: &str) -> Result<Value, SourceError>;
}

/// Fetches the database over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default request timeout
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tillr/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl DatabaseFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Value, SourceError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        Ok(response.json()?)
    }
}

/// Check a raw document against the item database schema
///
/// # Errors
///
/// Returns `SourceError::Invalid` listing every violation, one per line.
pub fn validate_db(document: &Value) -> Result<(), SourceError> {
    let errors: Vec<String> = DB_VALIDATOR
        .iter_errors(document)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SourceError::Invalid(errors.join("\n")))
    }
}

/// Validate a raw document and decode it into an [`ItemDb`]
///
/// # Errors
///
/// Returns `SourceError::Invalid` for schema violations and
/// `SourceError::Json` if decoding still fails.
pub fn parse_db(document: Value) -> Result<ItemDb, SourceError> {
    validate_db(&document)?;
    Ok(serde_json::from_value(document)?)
}

/// Memoizing front for a [`DatabaseFetcher`]
///
/// Holds at most one database: the last one successfully fetched, keyed by
/// its URL. Asking for the same URL again returns the memo unless `force`
/// is set.
#[derive(Debug)]
pub struct RemoteSource<F> {
    fetcher: F,
    memo: Option<(String, ItemDb)>,
}

impl<F: DatabaseFetcher> RemoteSource<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, memo: None }
    }

    /// Get the database at `url`, or `None` if it cannot be had
    ///
    /// An empty URL yields `None` without fetching. Failures are logged.
    pub fn get(&mut self, url: &str, force: bool) -> Option<ItemDb> {
        if url.trim().is_empty() {
            self.memo = None;
            return None;
        }

        match self.try_get(url, force) {
            Ok(db) => Some(db.clone()),
            Err(e) => {
                tracing::error!(url, error = %e, "Item database unavailable");
                None
            }
        }
    }

    /// Get the database at `url`
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if fetching or validation fails. The memo is
    /// dropped in that case so a later call retries.
    pub fn try_get(&mut self, url: &str, force: bool) -> Result<&ItemDb, SourceError> {
        let fresh = match &self.memo {
            Some((memo_url, _)) if memo_url == url && !force => false,
            _ => true,
        };

        if fresh {
            self.memo = None;
            tracing::info!(url, force, "Fetching item database");
            let db = parse_db(self.fetcher.fetch(url)?)?;
            tracing::info!(
                name = %db.name,
                version = %db.version,
                items = db.items.len(),
                "Item database loaded"
            );
            self.memo = Some((url.to_string(), db));
        } else {
            tracing::debug!(url, "Using memoized item database");
        }

        self.memo
            .as_ref()
            .map(|(_, db)| db)
            .ok_or_else(|| SourceError::Invalid("no database loaded".to_string()))
    }

    /// URL of the memoized database, if any
    #[must_use]
    pub fn memo_url(&self) -> Option<&str> {
        self.memo.as_ref().map(|(url, _)| url.as_str())
    }

    /// Forget the memoized database
    pub fn clear(&mut self) {
        self.memo = None;
    }
}
