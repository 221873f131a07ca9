//! Remote database errors
//!
//! Every variant is recoverable: the caller falls back to an empty remote
//! item set and clears the cached copy.

use thiserror::Error;

/// Errors fetching, validating or caching the item database
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent or its body not read
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// The payload does not match the item database schema
    #[error("Database does not match schema: {0}")]
    Invalid(String),

    /// The payload or cache file is not valid JSON for the expected type
    #[error("Malformed database JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the cache file failed
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
