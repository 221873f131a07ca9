//! Tillr - item lookup and code entry for the point of sale
//!
//! This library finds store items by fuzzy text search, tag or typed code,
//! and works out the small sums a cashier needs: arithmetic on the query
//! line and the cents needed to round up to the next dollar.
//!
//! The catalog is assembled from a remote item database and the user's own
//! items, and searched in memory. See [`state`] for how the pieces fit
//! together.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod eval;
pub mod keybinds;
pub mod output;
pub mod present;
pub mod query;
pub mod search;
pub mod source;
pub mod state;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TillrError {
    /// User item error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Expression error
    #[error("Expression error: {0}")]
    EvalError(#[from] eval::EvalError),
    /// Remote database error
    #[error("Database error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
