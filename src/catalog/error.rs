//! Catalog-specific error types
//!
//! Errors raised while turning the user's free-form item text into catalog
//! items. They never reach the user: [`parse_user_items`](super::parse_user_items)
//! logs them and falls back to an empty item set.

use thiserror::Error;

/// Catalog build errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The user item text is not valid YAML
    #[error("Failed to parse user items: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The user item text parsed, but not into `name: code` pairs
    #[error("User items must be `name: code` lines, found {0}")]
    NotAMapping(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
