//! Configuration for key bindings.

use serde::{Deserialize, Serialize};

/// User-configurable key names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Return to the default query
    pub reset_query: String,
    /// Leave the current overlay
    pub nav_back: String,
    /// Show the previous segment's results
    pub nav_left: String,
    /// Show the next segment's results
    pub nav_right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            reset_query: "`".to_string(),
            nav_back: "Escape".to_string(),
            nav_left: "[".to_string(),
            nav_right: "]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.reset_query, "`");
        assert_eq!(bindings.nav_back, "Escape");
        assert_eq!(bindings.nav_left, "[");
        assert_eq!(bindings.nav_right, "]");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let bindings: KeyBindings = toml::from_str("nav_left = \",\"").unwrap();
        assert_eq!(bindings.nav_left, ",");
        assert_eq!(bindings.nav_right, "]");
    }
}
