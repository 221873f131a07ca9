//! Barcode symbology selection
//!
//! Produce PLUs are keyed in, so they are shown as a QR code for handheld
//! scanners. 11 and 12 digit codes are UPC-A. Everything else is Code 128.

use regex::Regex;
use std::sync::LazyLock;

static PLU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4,5}$").expect("PLU pattern is valid"));
static UPC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11,12}$").expect("UPC pattern is valid"));

/// Symbology used to render a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeKind {
    QrCode,
    Upc,
    Code128,
}

impl BarcodeKind {
    #[must_use]
    pub fn classify(code: &str) -> Self {
        if PLU.is_match(code) {
            Self::QrCode
        } else if UPC.is_match(code) {
            Self::Upc
        } else {
            Self::Code128
        }
    }

    /// The value handed to the symbol encoder
    ///
    /// UPCs are left-padded with zeros to 11 digits; the encoder computes
    /// the check digit.
    #[must_use]
    pub fn render_value(self, code: &str) -> String {
        match self {
            Self::Upc => format!("{code:0>11}"),
            Self::QrCode | Self::Code128 => code.to_string(),
        }
    }
}
