//! Weighted multi-field fuzzy index
//!
//! Every catalog item is matched on four fields, each with a fixed weight:
//!
//! | field               | weight |
//! |---------------------|--------|
//! | `priority-keywords` | 0.4    |
//! | `keywords`          | 0.3    |
//! | `name`              | 0.2    |
//! | `value`             | 0.1    |
//!
//! Field haystacks are converted once, when the index is built. Matching is
//! done with nucleo's fuzzy atoms, case-insensitively.
//!
//! In [`MatchMode::WholeString`] the whole query, trimmed, is a single
//! needle. In [`MatchMode::Tokenized`] the query is split into words and
//! each word is matched on its own, in any order; an item matches when any
//! word does. A whole-string needle longer than [`MAX_PATTERN_LENGTH`]
//! characters is matched word by word, as if tokenized.
//!
//! Results are ranked by ascending distance. Equal distances keep catalog
//! order, so a given index always ranks a given query the same way.

use super::error::SearchError;
use crate::catalog::{CompiledCatalog, Item};
use moka::sync::Cache;
use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Config, Matcher, Utf32String};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Longest whole-string needle, in characters; longer ones are split into words
pub const MAX_PATTERN_LENGTH: usize = 32;

const MEMO_CAPACITY: u64 = 256;

static NEXT_INDEX_VERSION: AtomicU64 = AtomicU64::new(1);

/// A searchable item field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    PriorityKeywords,
    Keywords,
    Name,
    Value,
}

impl SearchField {
    pub const ALL: [Self; 4] = [
        Self::PriorityKeywords,
        Self::Keywords,
        Self::Name,
        Self::Value,
    ];

    /// Relative weight of a match in this field
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::PriorityKeywords => 0.4,
            Self::Keywords => 0.3,
            Self::Name => 0.2,
            Self::Value => 0.1,
        }
    }

    /// Field name as it appears in the item database
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PriorityKeywords => "priority-keywords",
            Self::Keywords => "keywords",
            Self::Name => "name",
            Self::Value => "value",
        }
    }

    fn haystacks(self, item: &Item) -> Vec<Utf32String> {
        match self {
            Self::PriorityKeywords => item
                .priority_keywords
                .iter()
                .map(|s| s.as_str().into())
                .collect(),
            Self::Keywords => item
                .keywords
                .iter()
                .map(|s| s.as_str().into())
                .collect(),
            Self::Name => vec![item.name.as_str().into()],
            Self::Value => vec![item.code().as_str().into()],
        }
    }
}

/// How a query is compared against item fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The whole query is one fuzzy needle
    #[default]
    WholeString,
    /// Each word of the query is matched separately, in any order
    Tokenized,
}

impl MatchMode {
    /// Mode for the user's "tokenize search" preference
    #[must_use]
    pub const fn from_tokenize(tokenize: bool) -> Self {
        if tokenize { Self::Tokenized } else { Self::WholeString }
    }
}

/// A ranked search result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub item: &'a Item,
    /// Distance from the query; lower is better, always in `(0, 1]`
    pub score: f64,
}

/// Pre-converted haystacks of one item, indexed like [`SearchField::ALL`]
struct IndexedItem {
    fields: [Vec<Utf32String>; 4],
}

impl IndexedItem {
    fn new(item: &Item) -> Self {
        Self {
            fields: SearchField::ALL.map(|field| field.haystacks(item)),
        }
    }

    /// Weighted relevance of this item, `None` when nothing matched
    fn relevance(&self, atoms: &[Atom], matcher: &mut Matcher) -> Option<f64> {
        let mut matched = false;
        let mut relevance = 0.0;

        for (field, haystacks) in SearchField::ALL.iter().zip(&self.fields) {
            let mut field_score = 0u32;
            for atom in atoms {
                let best = haystacks
                    .iter()
                    .filter_map(|haystack| atom.score(haystack.slice(..), matcher))
                    .max();
                if let Some(score) = best {
                    matched = true;
                    field_score += u32::from(score);
                }
            }
            relevance += field.weight() * f64::from(field_score);
        }

        matched.then_some(relevance)
    }
}

/// Fuzzy index over a compiled catalog
pub struct SearchIndex {
    catalog: Arc<CompiledCatalog>,
    mode: MatchMode,
    entries: Vec<IndexedItem>,
    memo: Cache<String, Arc<[(usize, f64)]>>,
    version: u64,
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("items", &self.entries.len())
            .field("mode", &self.mode)
            .field("catalog_version", &self.catalog.version())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl SearchIndex {
    /// Build an index over `catalog`
    #[must_use]
    pub fn build(catalog: Arc<CompiledCatalog>, mode: MatchMode) -> Self {
        let entries = catalog.items().iter().map(IndexedItem::new).collect();
        let version = NEXT_INDEX_VERSION.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            items = catalog.len(),
            ?mode,
            catalog_version = catalog.version(),
            version,
            "Built search index"
        );

        Self {
            catalog,
            mode,
            entries,
            memo: Cache::new(MEMO_CAPACITY),
            version,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CompiledCatalog> {
        &self.catalog
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Version stamp, unique per build
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Search the catalog, best match first
    ///
    /// A blank query returns every item in catalog order. No match is an
    /// empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::MatcherFailed` if the fuzzy matcher panics
    /// while scoring.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<'_>>, SearchError> {
        let ranked = match self.memo.get(query) {
            Some(ranked) => ranked,
            None => {
                let ranked: Arc<[(usize, f64)]> = self.rank(query)?.into();
                self.memo.insert(query.to_string(), Arc::clone(&ranked));
                ranked
            }
        };

        let items = self.catalog.items();
        Ok(ranked
            .iter()
            .map(|&(idx, score)| SearchHit { item: &items[idx], score })
            .collect())
    }

    /// Search and clone the matched items, best match first
    ///
    /// # Errors
    ///
    /// See [`SearchIndex::search`].
    pub fn search_items(&self, query: &str) -> Result<Vec<Item>, SearchError> {
        Ok(self.search(query)?.into_iter().map(|hit| hit.item.clone()).collect())
    }

    fn rank(&self, query: &str) -> Result<Vec<(usize, f64)>, SearchError> {
        let atoms = self.atoms(query);
        if atoms.is_empty() {
            return Ok((0..self.entries.len()).map(|idx| (idx, 1.0)).collect());
        }

        let scored = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut matcher = Matcher::new(Config::DEFAULT);
            self.entries
                .iter()
                .enumerate()
                .filter_map(|(idx, entry)| {
                    entry
                        .relevance(&atoms, &mut matcher)
                        .map(|relevance| (idx, 1.0 / (1.0 + relevance)))
                })
                .collect::<Vec<_>>()
        }));
        let mut ranked = scored.map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            SearchError::MatcherFailed(message)
        })?;

        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(ranked)
    }

    fn atoms(&self, query: &str) -> Vec<Atom> {
        let query = query.trim();
        let needles: Vec<&str> = match self.mode {
            MatchMode::WholeString if query.is_empty() => Vec::new(),
            MatchMode::WholeString if query.chars().count() <= MAX_PATTERN_LENGTH => vec![query],
            MatchMode::WholeString | MatchMode::Tokenized => query.split_whitespace().collect(),
        };

        needles
            .into_iter()
            .map(|needle| {
                Atom::new(
                    needle,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                    false,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::testing::sample_items;
    use proptest::prelude::*;

    fn index(items: Vec<Item>, mode: MatchMode) -> SearchIndex {
        SearchIndex::build(Arc::new(build_catalog(&items, &[])), mode)
    }

    fn names(hits: &[SearchHit<'_>]) -> Vec<String> {
        hits.iter().map(|h| h.item.name.clone()).collect()
    }

    #[test]
    fn test_field_weights() {
        let total: f64 = SearchField::ALL.iter().map(|f| f.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(SearchField::PriorityKeywords.weight() > SearchField::Keywords.weight());
        assert!(SearchField::Keywords.weight() > SearchField::Name.weight());
        assert!(SearchField::Name.weight() > SearchField::Value.weight());
    }

    #[test]
    fn test_search_by_name() {
        let idx = index(sample_items(), MatchMode::WholeString);
        let hits = idx.search("banana").unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].item.name, "Bananas");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let idx = index(sample_items(), MatchMode::WholeString);
        let hits = idx.search("BANANA").unwrap();
        assert_eq!(hits[0].item.name, "Bananas");
    }

    #[test]
    fn test_search_by_value() {
        let idx = index(sample_items(), MatchMode::WholeString);
        let hits = idx.search("4011").unwrap();
        assert!(names(&hits).contains(&"Bananas".to_string()));
    }

    #[test]
    fn test_priority_keyword_outranks_name() {
        let items = vec![
            Item::new("Stamp pad", 1),
            Item::new("Postage", 2).with_priority_keywords(["stamp"]),
        ];
        let idx = index(items, MatchMode::WholeString);
        let hits = idx.search("stamp").unwrap();
        assert_eq!(names(&hits), vec!["Postage", "Stamp pad"]);
    }

    #[test]
    fn test_keyword_outranks_value() {
        let items = vec![
            Item::new("Thing", "4242"),
            Item::new("Other", 7).with_keywords(["4242"]),
        ];
        let idx = index(items, MatchMode::WholeString);
        let hits = idx.search("4242").unwrap();
        assert_eq!(hits[0].item.name, "Other");
    }

    #[test]
    fn test_scores_ascend() {
        let idx = index(sample_items(), MatchMode::WholeString);
        let hits = idx.search("a").unwrap();
        assert!(hits.windows(2).all(|w| w[0].score <= w[1].score));
        assert!(hits.iter().all(|h| h.score > 0.0 && h.score <= 1.0));
    }

    #[test]
    fn test_no_match_is_empty() {
        let idx = index(sample_items(), MatchMode::WholeString);
        assert!(idx.search("zzzzqqqq").unwrap().is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything_in_order() {
        let items = sample_items();
        let idx = index(items.clone(), MatchMode::WholeString);
        let hits = idx.search("").unwrap();
        assert_eq!(hits.len(), items.len());
        assert_eq!(hits[0].item.name, items[0].name);
    }

    #[test]
    fn test_whole_string_requires_word_order() {
        let items = vec![Item::new("Red Onion", 4082)];
        let idx = index(items, MatchMode::WholeString);
        assert_eq!(idx.search("red onion").unwrap().len(), 1);
        assert!(idx.search("onion red").unwrap().is_empty());
    }

    #[test]
    fn test_tokenized_matches_any_order() {
        let items = vec![Item::new("Red Onion", 4082)];
        let idx = index(items, MatchMode::Tokenized);
        assert_eq!(idx.search("onion red").unwrap().len(), 1);
    }

    #[test]
    fn test_tokenized_matches_when_any_word_matches() {
        let items = vec![Item::new("Red Onion", 4082), Item::new("Garlic", 4608)];
        let idx = index(items, MatchMode::Tokenized);
        let hits = idx.search("onion qqqq").unwrap();
        assert_eq!(names(&hits), vec!["Red Onion"]);
    }

    #[test]
    fn test_tokenized_ranks_more_matched_words_first() {
        let items = vec![Item::new("Red Pepper", 1), Item::new("Red Onion", 2)];
        let idx = index(items, MatchMode::Tokenized);
        let hits = idx.search("onion red").unwrap();
        assert_eq!(hits[0].item.name, "Red Onion");
    }

    #[test]
    fn test_whole_string_ignores_surrounding_whitespace() {
        let idx = index(sample_items(), MatchMode::WholeString);
        for query in ["banana ", " banana", "\tbanana  "] {
            let hits = idx.search(query).unwrap();
            assert_eq!(hits[0].item.name, "Bananas", "query {query:?}");
        }
        assert_eq!(idx.search("   ").unwrap().len(), sample_items().len());
    }

    #[test]
    fn test_long_whole_string_query_matches_by_word() {
        let idx = index(sample_items(), MatchMode::WholeString);
        let query = "bananas yellow ripe bunch of fruit";
        assert!(query.chars().count() > MAX_PATTERN_LENGTH);

        let found = names(&idx.search(query).unwrap());
        assert!(found.contains(&"Bananas".to_string()));
        assert!(found.contains(&"Yellow Onions".to_string()));
    }

    #[test]
    fn test_long_words_are_searched() {
        let idx = index(sample_items(), MatchMode::Tokenized);
        let query = format!("apple {}", "q".repeat(MAX_PATTERN_LENGTH + 1));
        let found = names(&idx.search(&query).unwrap());
        assert!(found.contains(&"Gala Apples".to_string()));

        let idx = index(sample_items(), MatchMode::WholeString);
        assert!(idx.search(&"q".repeat(MAX_PATTERN_LENGTH * 2)).unwrap().is_empty());
    }

    #[test]
    fn test_memoized_search_matches_fresh_search() {
        let idx = index(sample_items(), MatchMode::WholeString);
        let first = names(&idx.search("apple").unwrap());
        let second = names(&idx.search("apple").unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_mode_from_tokenize() {
        assert_eq!(MatchMode::from_tokenize(true), MatchMode::Tokenized);
        assert_eq!(MatchMode::from_tokenize(false), MatchMode::WholeString);
    }

    proptest! {
        #[test]
        fn prop_rebuild_ranks_identically(query in "[a-z0-9 ]{0,12}", tokenize in any::<bool>()) {
            let catalog = Arc::new(build_catalog(&sample_items(), &[]));
            let mode = MatchMode::from_tokenize(tokenize);
            let a = SearchIndex::build(Arc::clone(&catalog), mode);
            let b = SearchIndex::build(catalog, mode);

            let ranked = |index: &SearchIndex| -> Vec<(String, f64)> {
                index
                    .search(&query)
                    .unwrap()
                    .iter()
                    .map(|h| (h.item.name.clone(), h.score))
                    .collect()
            };
            prop_assert_eq!(ranked(&a), ranked(&b));
        }
    }
}
