//! Query syntax: separators, tag prefixes and the organic modifier

use crate::config::TillrConfig;
use regex::Regex;

/// How a segment is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Items carrying the tag, straight from the catalog
    TagFilter(String),
    /// Fuzzy search for the needle
    Search(String),
}

impl SegmentKind {
    /// Whether results of this kind are shown a page at a time
    #[must_use]
    pub const fn paging(&self) -> bool {
        matches!(self, Self::Search(_))
    }
}

/// User-configurable query syntax
#[derive(Debug, Clone)]
pub struct QuerySyntax {
    separator: String,
    tag_prefix: String,
    organic_modifier: String,
    tag_pattern: Option<Regex>,
}

impl Default for QuerySyntax {
    fn default() -> Self {
        Self::new(";", "tag:", "!")
    }
}

impl QuerySyntax {
    /// Create a syntax
    ///
    /// An empty separator disables splitting, an empty tag prefix disables
    /// tag filters, and an empty organic modifier disables organic pricing.
    #[must_use]
    pub fn new(separator: &str, tag_prefix: &str, organic_modifier: &str) -> Self {
        let tag_pattern = if tag_prefix.is_empty() {
            None
        } else {
            Regex::new(&format!(r"{}(\S*)", regex::escape(tag_prefix))).ok()
        };

        Self {
            separator: separator.to_string(),
            tag_prefix: tag_prefix.to_string(),
            organic_modifier: organic_modifier.to_string(),
            tag_pattern,
        }
    }

    #[must_use]
    pub fn from_config(config: &TillrConfig) -> Self {
        Self::new(
            &config.query_separator,
            &config.item_tag_prefix,
            &config.organic_modifier,
        )
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    #[must_use]
    pub fn organic_modifier(&self) -> &str {
        &self.organic_modifier
    }

    /// Split a query into its non-empty segments
    #[must_use]
    pub fn split<'q>(&self, query: &'q str) -> Vec<&'q str> {
        if self.separator.is_empty() {
            return if query.is_empty() { Vec::new() } else { vec![query] };
        }
        query
            .split(self.separator.as_str())
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Decide how a segment is resolved
    ///
    /// A segment containing the tag prefix is a tag filter on the word that
    /// follows it. A bare prefix is a filter on the empty tag, which matches
    /// nothing. Anything else is searched with a trailing organic modifier
    /// removed.
    #[must_use]
    pub fn classify(&self, segment: &str) -> SegmentKind {
        if let Some(pattern) = &self.tag_pattern
            && let Some(caps) = pattern.captures(segment)
        {
            let tag = caps.get(1).map_or("", |m| m.as_str());
            return SegmentKind::TagFilter(tag.to_string());
        }
        SegmentKind::Search(self.strip_organic(segment).to_string())
    }

    /// Whether a segment asks for organic pricing
    #[must_use]
    pub fn is_organic(&self, segment: &str) -> bool {
        !self.organic_modifier.is_empty() && segment.ends_with(&self.organic_modifier)
    }

    fn strip_organic<'s>(&self, segment: &'s str) -> &'s str {
        if self.organic_modifier.is_empty() {
            return segment;
        }
        segment
            .strip_suffix(self.organic_modifier.as_str())
            .unwrap_or(segment)
    }
}
