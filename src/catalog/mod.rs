//! Item catalog
//!
//! The catalog is the single searchable item set. It is compiled from two
//! sources, the remote item database and the user's own items, and rebuilt
//! from scratch whenever either source changes.
//!
//! # Build rules
//!
//! - Remote items come first, user items after, each in source order
//! - Items flagged `duplicate` or `ignore` are dropped
//! - Every build produces a fresh [`CompiledCatalog`] with a new version
//!   stamp; a catalog is never modified after it is built
//!
//! # Examples
//!
//! ```
//! use tillr::catalog::{build_catalog, parse_user_items, Item};
//!
//! let remote = vec![Item::new("Bananas", 4011)];
//! let user = parse_user_items("Gift card: 1234");
//! let catalog = build_catalog(&remote, &user);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.items()[1].name, "Gift card");
//! ```

mod error;
pub mod types;
mod user_items;

pub use error::CatalogError;
pub use types::{Item, ItemDb, ItemDbInfo, ItemValue};
pub use user_items::{USER_TAG, parse_user_items, try_parse_user_items};

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CATALOG_VERSION: AtomicU64 = AtomicU64::new(1);

/// The merged, filtered item set
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCatalog {
    items: Vec<Item>,
    version: u64,
}

impl CompiledCatalog {
    /// An empty catalog
    #[must_use]
    pub fn empty() -> Self {
        build_catalog(&[], &[])
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Version stamp, unique per build
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Items carrying `tag`, in catalog order
    ///
    /// An empty tag name matches nothing.
    #[must_use]
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Item> {
        if tag.is_empty() {
            return Vec::new();
        }
        self.items.iter().filter(|item| item.has_tag(tag)).cloned().collect()
    }

    /// All tags with the number of items carrying each, sorted by tag
    #[must_use]
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for tag in self.items.iter().flat_map(|item| &item.tags) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
        counts.into_iter().map(|(tag, n)| (tag.to_string(), n)).collect()
    }
}

/// Compile the catalog from the remote and user item sets
///
/// Pure function of its inputs apart from the version stamp.
#[must_use]
pub fn build_catalog(remote: &[Item], user: &[Item]) -> CompiledCatalog {
    let items: Vec<Item> = remote
        .iter()
        .chain(user)
        .filter(|item| !item.is_excluded())
        .cloned()
        .collect();

    let version = NEXT_CATALOG_VERSION.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(
        remote = remote.len(),
        user = user.len(),
        kept = items.len(),
        version,
        "Compiled item catalog"
    );

    CompiledCatalog { items, version }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_items;
    use proptest::prelude::*;

    fn flagged(name: &str, duplicate: bool, ignore: bool) -> Item {
        let mut item = Item::new(name, 1);
        item.duplicate = duplicate;
        item.ignore = ignore;
        item
    }

    #[test]
    fn test_build_remote_then_user_order() {
        let remote = vec![Item::new("r1", 1), Item::new("r2", 2)];
        let user = vec![Item::new("u1", 3)];
        let catalog = build_catalog(&remote, &user);

        let names: Vec<_> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["r1", "r2", "u1"]);
    }

    #[test]
    fn test_build_drops_duplicate_and_ignored() {
        let remote = vec![
            flagged("keep", false, false),
            flagged("dup", true, false),
            flagged("ign", false, true),
        ];
        let user = vec![flagged("both", true, true)];
        let catalog = build_catalog(&remote, &user);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].name, "keep");
    }

    #[test]
    fn test_build_does_not_touch_inputs() {
        let remote = vec![flagged("dup", true, false)];
        let _ = build_catalog(&remote, &[]);
        assert_eq!(remote.len(), 1);
    }

    #[test]
    fn test_every_build_gets_new_version() {
        let a = build_catalog(&[], &[]);
        let b = build_catalog(&[], &[]);
        assert_ne!(a.version(), b.version());
    }

    #[test]
    fn test_filter_by_tag() {
        let catalog = build_catalog(&sample_items(), &[]);
        let produce = catalog.filter_by_tag("produce");

        assert!(!produce.is_empty());
        assert!(produce.iter().all(|i| i.has_tag("produce")));
        let expected = catalog.items().iter().filter(|i| i.has_tag("produce")).count();
        assert_eq!(produce.len(), expected);
    }

    #[test]
    fn test_filter_by_empty_tag_matches_nothing() {
        let mut untagged = Item::new("odd", 1);
        untagged.tags = vec![String::new()];
        let catalog = build_catalog(&[untagged], &[]);
        assert!(catalog.filter_by_tag("").is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let remote = vec![
            Item::new("a", 1).with_tags(["produce", "fruit"]),
            Item::new("b", 2).with_tags(["produce"]),
        ];
        let catalog = build_catalog(&remote, &[]);
        assert_eq!(
            catalog.tag_counts(),
            vec![("fruit".to_string(), 1), ("produce".to_string(), 2)]
        );
    }

    proptest! {
        #[test]
        fn prop_compiled_catalog_has_no_excluded_items(
            flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..40),
            split in 0usize..40,
        ) {
            let items: Vec<Item> = flags
                .iter()
                .enumerate()
                .map(|(i, (d, g))| flagged(&format!("item{i}"), *d, *g))
                .collect();
            let split = split.min(items.len());
            let (remote, user) = items.split_at(split);

            let catalog = build_catalog(remote, user);
            prop_assert!(catalog.items().iter().all(|i| !i.duplicate && !i.ignore));
            let expected = flags.iter().filter(|(d, g)| !d && !g).count();
            prop_assert_eq!(catalog.len(), expected);
        }
    }
}
