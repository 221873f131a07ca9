//! Typed code detection
//!
//! A run of digits typed into a query is most likely a code read off a
//! package. It is shown as a scannable "user entered code" ahead of the
//! catalog results.

use regex::Regex;
use std::sync::LazyLock;

/// Shortest digit run treated as a code
pub const MIN_CODE_DIGITS: usize = 4;
/// Longest digit run treated as a code
pub const MAX_CODE_DIGITS: usize = 24;

static CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[0-9]{{{MIN_CODE_DIGITS},{MAX_CODE_DIGITS}}}"))
        .expect("code pattern is valid")
});

/// The first run of 4 to 24 digits in `segment`
///
/// Longer runs yield their first 24 digits.
#[must_use]
pub fn extract_code(segment: &str) -> Option<&str> {
    CODE.find(segment).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_embedded_code() {
        assert_eq!(extract_code("banana12345xyz"), Some("12345"));
    }

    #[test]
    fn test_extract_whole_code() {
        assert_eq!(extract_code("041900076610"), Some("041900076610"));
    }

    #[test]
    fn test_extract_first_run_wins() {
        assert_eq!(extract_code("12 4011 and 4608"), Some("4011"));
    }

    #[test]
    fn test_extract_too_short() {
        assert_eq!(extract_code("1"), None);
        assert_eq!(extract_code("123"), None);
        assert_eq!(extract_code("1 23 456"), None);
        assert_eq!(extract_code("apples"), None);
    }

    #[test]
    fn test_extract_caps_length() {
        let digits = "1234567890".repeat(3);
        assert_eq!(extract_code(&digits), Some(&digits[..MAX_CODE_DIGITS]));
    }

    #[test]
    fn test_extract_ignores_non_ascii_digits() {
        assert_eq!(extract_code("٤٠١١"), None);
    }
}
