//! Item data model
//!
//! Types shared by every stage of the lookup pipeline: the catalog [`Item`],
//! its code ([`ItemValue`]) and the remote item database payload ([`ItemDb`]).
//!
//! Field names follow the item database JSON format, so the same types
//! deserialize a freshly fetched database and the on-disk cache copy.
//!
//! # Examples
//!
//! ```
//! use tillr::catalog::{Item, ItemValue};
//!
//! let item = Item::new("Bananas", 4011).with_tags(["produce"]);
//! assert_eq!(item.value, ItemValue::from(4011));
//! assert_eq!(item.code(), "4011");
//! assert!(item.has_tag("produce"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An item code: UPC, PLU, SKU or any other scannable token
///
/// Databases store codes either as JSON numbers or strings. Strings keep
/// leading zeros intact, which matters for UPCs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    /// Numeric code
    Number(serde_json::Number),
    /// Arbitrary token
    Text(String),
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<serde_json::Number> for ItemValue {
    fn from(n: serde_json::Number) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ItemValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for ItemValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Display name
    pub name: String,

    /// The scannable code
    pub value: ItemValue,

    /// Search terms weighted above everything else
    #[serde(default, rename = "priority-keywords", skip_serializing_if = "Vec::is_empty")]
    pub priority_keywords: Vec<String>,

    /// Additional search terms
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Labels consulted by tag filter queries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Presentation hint, never interpreted here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_color: Option<String>,

    /// Overrides barcode suppression in the presentation layer
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub always_show_barcode: bool,

    /// Marked as a duplicate of another entry; dropped at build time
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub duplicate: bool,

    /// Marked as ignored; dropped at build time
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,
}

impl Item {
    /// Create an item with only a name and a code
    pub fn new(name: impl Into<String>, value: impl Into<ItemValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            priority_keywords: Vec::new(),
            keywords: Vec::new(),
            tags: Vec::new(),
            ui_color: None,
            always_show_barcode: false,
            duplicate: false,
            ignore: false,
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_priority_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// The code as it is printed and encoded
    #[must_use]
    pub fn code(&self) -> String {
        self.value.to_string()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the catalog builder drops this item
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        self.duplicate || self.ignore
    }
}

/// Descriptive header of an item database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDbInfo {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// A complete item database as served by the remote source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDb {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub items: Vec<Item>,
}

impl ItemDb {
    #[must_use]
    pub fn info(&self) -> ItemDbInfo {
        ItemDbInfo {
            name: self.name.clone(),
            version: self.version.clone(),
            organization: self.organization.clone(),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
