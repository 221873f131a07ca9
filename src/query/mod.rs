//! Query interpretation
//!
//! A raw query is split on the configured separator into segments. Each
//! segment is resolved on its own:
//!
//! 1. `tag:<name>` filters the catalog by tag, showing every match
//! 2. anything else is a fuzzy search, with a trailing organic modifier
//!    (`!`) removed before searching
//!
//! Independently of which branch fires, the first run of 4 to 24 digits in
//! the segment is offered as a typed code.
//!
//! # Examples
//!
//! ```
//! use tillr::query::{QuerySyntax, SegmentKind, extract_code};
//!
//! let syntax = QuerySyntax::default();
//! assert_eq!(syntax.split("apple;;tag:produce"), vec!["apple", "tag:produce"]);
//! assert_eq!(syntax.classify("tag:produce"), SegmentKind::TagFilter("produce".into()));
//! assert_eq!(syntax.classify("apple!"), SegmentKind::Search("apple".into()));
//! assert_eq!(extract_code("banana12345xyz"), Some("12345"));
//! ```

pub mod code;
mod resolve;
mod syntax;

pub use code::extract_code;
pub use resolve::{ResolvedSegment, resolve_segment};
pub use syntax::{QuerySyntax, SegmentKind};
