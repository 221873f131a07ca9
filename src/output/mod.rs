//! Output formatting for CLI display
//!
//! This module formats result entries, evaluator results, tags and
//! database details for the terminal. Quiet mode drops decoration and
//! color so the output can be piped.

use crate::catalog::ItemDbInfo;
use crate::present::{BarcodeKind, PresentedItem, ResultEntry};
use colored::Colorize;

/// Short label for a barcode symbology
#[must_use]
pub const fn barcode_label(kind: BarcodeKind) -> &'static str {
    match kind {
        BarcodeKind::QrCode => "QR",
        BarcodeKind::Upc => "UPC",
        BarcodeKind::Code128 => "C128",
    }
}

/// Format one row of a result list
#[must_use]
pub fn result_entry(entry: &ResultEntry, quiet: bool) -> String {
    match entry {
        ResultEntry::GeneratedCode { code, barcode } => {
            if quiet {
                code.clone()
            } else {
                format!(
                    "  {} {} [{}]",
                    "#".cyan(),
                    code.bold(),
                    barcode_label(*barcode)
                )
            }
        }
        ResultEntry::Item(item) => presented_item(item, quiet),
        ResultEntry::NoItemsFound => {
            if quiet {
                String::new()
            } else {
                format!("  {}", "No items found".dimmed())
            }
        }
    }
}

/// Format a catalog item as `name  code`
#[must_use]
pub fn presented_item(item: &PresentedItem, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", item.code, item.name);
    }

    let barcode = if item.always_show_barcode || item.barcode != BarcodeKind::QrCode {
        format!(" [{} {}]", barcode_label(item.barcode), item.barcode.render_value(&item.code))
    } else {
        String::new()
    };
    format!("  {:<32} {}{}", item.name, item.code.green(), barcode.dimmed())
}

/// Format an arithmetic result
#[must_use]
pub fn math_result(value: f64, quiet: bool) -> String {
    if quiet {
        value.to_string()
    } else {
        format!("{} {}", "=".yellow().bold(), value.to_string().bold())
    }
}

/// Format the cents needed to reach the next dollar
#[must_use]
pub fn round_up_result(cents: u32, quiet: bool) -> String {
    if quiet {
        cents.to_string()
    } else {
        format!("{} {}", "Round up:".yellow().bold(), cents.to_string().bold())
    }
}

/// Header above a segment's results when a query has several
#[must_use]
pub fn segment_header(segment: &str, index: usize, total: usize) -> String {
    format!("[{}/{}] {}", index + 1, total, segment.bold())
}

/// Hint shown when a segment has further pages
#[must_use]
pub fn more_results(hidden: usize) -> String {
    format!("  ... {hidden} more (use --all)").dimmed().to_string()
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count} item(s))")
    }
}

/// Format the name and version of an item database
#[must_use]
pub fn db_info(info: &ItemDbInfo) -> String {
    match &info.organization {
        Some(org) => format!("{} {} ({org})", info.name.bold(), info.version),
        None => format!("{} {}", info.name.bold(), info.version),
    }
}
