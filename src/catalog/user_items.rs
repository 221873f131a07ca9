//! User-defined items
//!
//! Users keep a few extra items of their own as `name: code` lines, e.g.
//!
//! ```text
//! Gift card: 1234
//! Paper bag: 0005
//! ```
//!
//! The text is read as a YAML mapping. Every entry becomes an [`Item`]
//! tagged [`USER_TAG`].

use super::error::CatalogError;
use super::types::{Item, ItemValue};
use serde_yaml::Value;

/// Tag carried by every user-defined item
pub const USER_TAG: &str = "user";

/// Parse user item text, falling back to an empty set on malformed input
///
/// Failures are logged and never surfaced.
#[must_use]
pub fn parse_user_items(text: &str) -> Vec<Item> {
    match try_parse_user_items(text) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %e, "Ignoring user items");
            Vec::new()
        }
    }
}

/// Parse user item text
///
/// Blank text is an empty set. Entries whose key or value is not a scalar
/// are skipped with a warning.
///
/// # Errors
///
/// Returns `CatalogError::Yaml` for invalid YAML and
/// `CatalogError::NotAMapping` when the document is not a mapping.
pub fn try_parse_user_items(text: &str) -> Result<Vec<Item>, CatalogError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mapping = match serde_yaml::from_str::<Value>(text)? {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        other => return Err(CatalogError::NotAMapping(describe(&other).to_string())),
    };

    let items = mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let Some(name) = scalar_string(&key) else {
                tracing::warn!(key = describe(&key), "Skipping user item with non-scalar name");
                return None;
            };
            let Some(value) = item_value(value) else {
                tracing::warn!(%name, "Skipping user item without a usable code");
                return None;
            };
            Some(Item::new(name, value).with_tags([USER_TAG]))
        })
        .collect();

    Ok(items)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn item_value(value: Value) -> Option<ItemValue> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(ItemValue::Number(u.into()))
            } else if let Some(i) = n.as_i64() {
                Some(ItemValue::Number(i.into()))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(ItemValue::Number)
            }
        }
        Value::String(s) => Some(ItemValue::Text(s)),
        Value::Bool(b) => Some(ItemValue::Text(b.to_string())),
        _ => None,
    }
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_lines() {
        let items = try_parse_user_items("Example item: 1234\nOther item: 5678").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Example item");
        assert_eq!(items[0].code(), "1234");
        assert_eq!(items[1].name, "Other item");
        assert_eq!(items[1].code(), "5678");
    }

    #[test]
    fn test_parse_tags_every_item_as_user() {
        let items = parse_user_items("a: 1\nb: 2");
        assert!(items.iter().all(|i| i.tags == vec![USER_TAG.to_string()]));
    }

    #[test]
    fn test_parse_preserves_line_order() {
        let items = parse_user_items("zebra: 3\napple: 1\nmango: 2");
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_quoted_code_keeps_leading_zeros() {
        let items = parse_user_items("Milk: '041900076610'");
        assert_eq!(items[0].code(), "041900076610");
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(try_parse_user_items("").unwrap().is_empty());
        assert!(try_parse_user_items("   \n  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml_is_error() {
        let result = try_parse_user_items("a: [1, 2");
        assert!(matches!(result, Err(CatalogError::Yaml(_))));
    }

    #[test]
    fn test_parse_invalid_yaml_falls_back_to_empty() {
        assert!(parse_user_items("a: [1, 2").is_empty());
    }

    #[test]
    fn test_parse_non_mapping_is_error() {
        let result = try_parse_user_items("just some words");
        assert!(matches!(result, Err(CatalogError::NotAMapping(_))));
        assert!(parse_user_items("- 1\n- 2").is_empty());
    }

    #[test]
    fn test_parse_skips_nested_values() {
        let items = parse_user_items("good: 1234\nbad: [1, 2]\nempty:");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "good");
    }

    #[test]
    fn test_parse_numeric_name() {
        let items = parse_user_items("4011: 4011");
        assert_eq!(items[0].name, "4011");
    }
}
