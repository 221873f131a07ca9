//! Segment resolution

use super::code::extract_code;
use super::syntax::{QuerySyntax, SegmentKind};
use crate::catalog::Item;
use crate::search::SearchIndex;

/// The resolved result set of one segment
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSegment {
    /// The segment as typed, modifier included
    pub segment: String,
    pub kind: SegmentKind,
    /// Matching catalog items, best first for searches
    pub items: Vec<Item>,
    /// Digits typed into the segment, shown as their own code
    pub generated_code: Option<String>,
    /// Whether items are presented with organic pricing
    pub organic: bool,
}

impl ResolvedSegment {
    /// Whether results are shown a page at a time
    #[must_use]
    pub const fn paging(&self) -> bool {
        self.kind.paging()
    }
}

/// Resolve one segment against the index and its catalog
///
/// Search failures are logged and resolve to no items.
#[must_use]
pub fn resolve_segment(
    segment: &str,
    syntax: &QuerySyntax,
    index: &SearchIndex,
) -> ResolvedSegment {
    let kind = syntax.classify(segment);

    let items = match &kind {
        SegmentKind::TagFilter(tag) => index.catalog().filter_by_tag(tag),
        SegmentKind::Search(needle) => index.search_items(needle).unwrap_or_else(|e| {
            tracing::error!(segment, error = %e, "Search failed");
            Vec::new()
        }),
    };

    ResolvedSegment {
        segment: segment.to_string(),
        generated_code: extract_code(segment).map(str::to_string),
        organic: syntax.is_organic(segment),
        kind,
        items,
    }
}
