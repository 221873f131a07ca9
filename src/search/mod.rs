//! Fuzzy item search
//!
//! A [`SearchIndex`] is a read-only view over one
//! [`CompiledCatalog`](crate::catalog::CompiledCatalog) for one [`MatchMode`]. Changing either
//! means building a new index; an index is never updated in place.

pub mod error;
pub mod index;

pub use error::SearchError;
pub use index::{MAX_PATTERN_LENGTH, MatchMode, SearchField, SearchHit, SearchIndex};
