//! On-disk copy of the last good item database
//!
//! The cache file (`~/.cache/tillr/item-database-cache.json`) holds the
//! database exactly as it was accepted. It is written after every
//! successful fetch and removed after a failed one, so it never outlives
//! a database the remote source stopped serving.

use super::{SourceError, parse_db};
use crate::catalog::ItemDb;
use std::path::{Path, PathBuf};

const CACHE_FILENAME: &str = "item-database-cache.json";

/// Location of the cached item database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbCache {
    path: PathBuf,
}

impl DbCache {
    /// Cache in the platform cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined.
    #[must_use]
    pub fn default_location() -> Option<Self> {
        dirs::cache_dir().map(|d| Self::at(d.join("tillr").join(CACHE_FILENAME)))
    }

    /// Cache at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached database
    ///
    /// Returns `None` when there is no cache, or when it no longer parses or
    /// validates. A bad cache is treated as absent.
    #[must_use]
    pub fn load(&self) -> Option<ItemDb> {
        let data = std::fs::read(&self.path).ok()?;

        let document = match serde_json::from_slice(&data) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring corrupt database cache"
                );
                return None;
            }
        };

        match parse_db(document) {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring invalid database cache"
                );
                None
            }
        }
    }

    /// Write the database to the cache
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the directory or file cannot be written.
    pub fn save(&self, db: &ItemDb) -> Result<(), SourceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(db)?;
        std::fs::write(&self.path, data)?;
        tracing::debug!(path = %self.path.display(), "Database cache written");
        Ok(())
    }

    /// Remove the cache file if it exists
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SourceError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a cache file is present
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
