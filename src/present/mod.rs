//! Result presentation
//!
//! Turns a [`ResolvedSegment`] into the list the user sees:
//!
//! - the typed code, if any, always comes first
//! - catalog items follow, a page at a time for searches and all at once
//!   for tag filters
//! - a segment with neither shows a single "no items found" entry
//!
//! Organic pricing is applied here, to the presented copy only. A segment
//! ending in the organic modifier presents every 4 digit PLU whose name does
//! not already mention organic as `[Organic] <name>` with a leading `9` on
//! the code.

mod barcode;
mod pager;

pub use barcode::BarcodeKind;
pub use pager::Pager;

use crate::catalog::Item;
use crate::query::ResolvedSegment;

/// Prefix added to organic item names
pub const ORGANIC_NAME_PREFIX: &str = "[Organic] ";
/// Digit prepended to organic PLUs
pub const ORGANIC_CODE_PREFIX: char = '9';

const PLU_LENGTH: usize = 4;

/// A catalog item as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedItem {
    pub name: String,
    pub code: String,
    pub barcode: BarcodeKind,
    pub ui_color: Option<String>,
    pub always_show_barcode: bool,
}

impl PresentedItem {
    /// Present `item`, with organic pricing if `organic` is set
    #[must_use]
    pub fn new(item: &Item, organic: bool) -> Self {
        let mut name = item.name.clone();
        let mut code = item.code();

        if organic
            && code.chars().count() == PLU_LENGTH
            && !name.to_lowercase().contains("organic")
        {
            name.insert_str(0, ORGANIC_NAME_PREFIX);
            code.insert(0, ORGANIC_CODE_PREFIX);
        }

        Self {
            barcode: BarcodeKind::classify(&code),
            name,
            code,
            ui_color: item.ui_color.clone(),
            always_show_barcode: item.always_show_barcode,
        }
    }
}

/// One row of a segment's result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultEntry {
    /// Digits typed into the query
    GeneratedCode { code: String, barcode: BarcodeKind },
    Item(PresentedItem),
    /// Placeholder for a segment with nothing to show
    NoItemsFound,
}

/// Build the visible result list of a segment
#[must_use]
pub fn present_segment(resolved: &ResolvedSegment, pager: &Pager) -> Vec<ResultEntry> {
    let mut entries = Vec::new();

    if let Some(code) = &resolved.generated_code {
        entries.push(ResultEntry::GeneratedCode {
            barcode: BarcodeKind::classify(code),
            code: code.clone(),
        });
    }

    let shown = if resolved.paging() {
        pager.visible().min(resolved.items.len())
    } else {
        resolved.items.len()
    };
    entries.extend(
        resolved.items[..shown]
            .iter()
            .map(|item| ResultEntry::Item(PresentedItem::new(item, resolved.organic))),
    );

    if entries.is_empty() {
        entries.push(ResultEntry::NoItemsFound);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SegmentKind;

    fn resolved(
        kind: SegmentKind,
        items: Vec<Item>,
        code: Option<&str>,
        organic: bool,
    ) -> ResolvedSegment {
        ResolvedSegment {
            segment: String::new(),
            kind,
            items,
            generated_code: code.map(str::to_string),
            organic,
        }
    }

    fn numbered(n: usize) -> Vec<Item> {
        (0..n).map(|i| Item::new(format!("item{i}"), format!("{i}"))).collect()
    }

    #[test]
    fn test_organic_transform() {
        let item = Item::new("apple", "1234");
        let presented = PresentedItem::new(&item, true);
        assert_eq!(presented.name, "[Organic] apple");
        assert_eq!(presented.code, "91234");
        assert_eq!(item.name, "apple");
        assert_eq!(item.code(), "1234");
    }

    #[test]
    fn test_organic_transform_numeric_value() {
        let presented = PresentedItem::new(&Item::new("Bananas", 4011), true);
        assert_eq!(presented.code, "94011");
        assert_eq!(presented.barcode, BarcodeKind::QrCode);
    }

    #[test]
    fn test_organic_skips_non_plu_codes() {
        let presented = PresentedItem::new(&Item::new("apple", "12345"), true);
        assert_eq!(presented.name, "apple");
        assert_eq!(presented.code, "12345");
    }

    #[test]
    fn test_organic_skips_names_already_organic() {
        let presented = PresentedItem::new(&Item::new("Organic Gala", "4133"), true);
        assert_eq!(presented.name, "Organic Gala");
        assert_eq!(presented.code, "4133");
    }

    #[test]
    fn test_not_organic_is_unchanged() {
        let presented = PresentedItem::new(&Item::new("apple", "1234"), false);
        assert_eq!(presented.name, "apple");
        assert_eq!(presented.code, "1234");
    }

    #[test]
    fn test_present_paged_search() {
        let segment = resolved(SegmentKind::Search("x".into()), numbered(10), None, false);
        let entries = present_segment(&segment, &Pager::new(4));
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_present_tag_filter_shows_everything() {
        let segment = resolved(SegmentKind::TagFilter("x".into()), numbered(10), None, false);
        let entries = present_segment(&segment, &Pager::new(4));
        assert_eq!(entries.len(), 10);
    }

    #[test]
    fn test_generated_code_comes_first() {
        let segment = resolved(SegmentKind::Search("x".into()), numbered(2), Some("12345"), false);
        let entries = present_segment(&segment, &Pager::new(4));
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            ResultEntry::GeneratedCode { code: "12345".into(), barcode: BarcodeKind::QrCode }
        );
        assert!(matches!(entries[1], ResultEntry::Item(_)));
    }

    #[test]
    fn test_empty_state() {
        let segment = resolved(SegmentKind::Search("x".into()), Vec::new(), None, false);
        assert_eq!(present_segment(&segment, &Pager::new(4)), vec![ResultEntry::NoItemsFound]);
    }

    #[test]
    fn test_generated_code_suppresses_empty_state() {
        let segment = resolved(SegmentKind::Search("x".into()), Vec::new(), Some("4011"), false);
        let entries = present_segment(&segment, &Pager::new(4));
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], ResultEntry::GeneratedCode { .. }));
    }

    #[test]
    fn test_generated_code_is_never_organic() {
        let segment = resolved(SegmentKind::Search("x".into()), Vec::new(), Some("4011"), true);
        let entries = present_segment(&segment, &Pager::new(4));
        assert_eq!(
            entries[0],
            ResultEntry::GeneratedCode { code: "4011".into(), barcode: BarcodeKind::QrCode }
        );
    }
}
