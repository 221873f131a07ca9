//! Testing utilities for tillr
//!
//! Shared fixtures: a small grocery catalog and an index over it.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Item, build_catalog};
use crate::search::{MatchMode, SearchIndex};
use std::sync::Arc;

/// A small catalog covering produce, services and a barcode-only item
///
/// `Bananas` (PLU 4011) comes first.
#[must_use]
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Bananas", 4011).with_tags(["produce", "fruit"]),
        Item::new("Gala Apples", 4133)
            .with_keywords(["apple", "red"])
            .with_tags(["produce", "fruit"]),
        Item::new("Yellow Onions", 4093).with_tags(["produce"]),
        Item::new("Postage Stamps", "0001234")
            .with_priority_keywords(["stamps", "postage"])
            .with_tags(["service"]),
        Item::new("Paper Bag", 5).with_keywords(["sack"]),
        Item::new("Gift Card", "799366123456").with_tags(["service"]),
    ]
}

/// An index over [`sample_items`] matching whole strings
#[must_use]
pub fn sample_index() -> SearchIndex {
    let catalog = Arc::new(build_catalog(&sample_items(), &[]));
    SearchIndex::build(catalog, MatchMode::WholeString)
}
