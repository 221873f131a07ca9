//! Change round-up
//!
//! Typing the cents of a total (`7`) shows how much rounds it up to the
//! next dollar (`93`).

use regex::Regex;
use std::sync::LazyLock;

static CENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("cents pattern is valid"));

/// Round-up amount for a one or two digit query
///
/// `0` and `00` yield `None`, the same as a query that is not cents at all.
#[must_use]
pub fn try_round_up(query: &str) -> Option<u32> {
    if !CENTS.is_match(query) {
        return None;
    }
    let cents: u32 = query.parse().ok()?;
    (1..100).contains(&cents).then(|| 100 - cents)
}
