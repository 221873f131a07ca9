//! Actions triggered by key bindings.

use super::config::KeyBindings;

/// Key name that clears the input for a fresh query
pub const CLEAR_INPUT_KEY: &str = "Enter";

/// Actions a key press can trigger in the lookup view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Clear the input field and focus it
    ClearInput,
    /// Return to the default query
    ResetQuery,
    /// Show the previous segment's results
    NavLeft,
    /// Show the next segment's results
    NavRight,
    /// Leave the current overlay
    NavBack,
}

impl KeyBindings {
    /// Resolve a key press.
    ///
    /// Segment navigation is only bound while the query has more than one
    /// segment; otherwise those keys fall through as ordinary input.
    #[must_use]
    pub fn resolve(&self, key: &str, segments: usize) -> Option<KeyAction> {
        if key == CLEAR_INPUT_KEY {
            return Some(KeyAction::ClearInput);
        }
        if key == self.reset_query {
            return Some(KeyAction::ResetQuery);
        }
        if segments > 1 {
            if key == self.nav_left {
                return Some(KeyAction::NavLeft);
            }
            if key == self.nav_right {
                return Some(KeyAction::NavRight);
            }
        }
        if key == self.nav_back {
            return Some(KeyAction::NavBack);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve("Enter", 1), Some(KeyAction::ClearInput));
        assert_eq!(bindings.resolve("`", 1), Some(KeyAction::ResetQuery));
        assert_eq!(bindings.resolve("Escape", 1), Some(KeyAction::NavBack));
        assert_eq!(bindings.resolve("a", 1), None);
    }

    #[test]
    fn test_nav_requires_multiple_segments() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve("[", 1), None);
        assert_eq!(bindings.resolve("]", 1), None);
        assert_eq!(bindings.resolve("[", 2), Some(KeyAction::NavLeft));
        assert_eq!(bindings.resolve("]", 3), Some(KeyAction::NavRight));
    }

    #[test]
    fn test_resolve_custom_binding() {
        let bindings = KeyBindings {
            reset_query: "Backspace".into(),
            ..KeyBindings::default()
        };
        assert_eq!(bindings.resolve("Backspace", 1), Some(KeyAction::ResetQuery));
        assert_eq!(bindings.resolve("`", 1), None);
    }
}
