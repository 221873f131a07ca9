//! Search-specific errors
//!
//! Errors the fuzzy index can raise for a single search call. They are
//! confined to that call: the query interpreter logs them and treats the
//! search as having found nothing.
//!
//! # Error Types
//!
//! - **`MatcherFailed`**: the fuzzy matcher panicked while scoring items

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The fuzzy matcher panicked; holds the panic message
    #[error("Matcher failed: {0}")]
    MatcherFailed(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
