//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::search::error::SearchError;
    use std::error::Error;

    #[test]
    fn test_matcher_failed_display() {
        let error = SearchError::MatcherFailed("index out of bounds".into());
        assert_eq!(error.to_string(), "Matcher failed: index out of bounds");
    }

    #[test]
    fn test_error_debug() {
        let error = SearchError::MatcherFailed("overflow".into());
        let debug = format!("{error:?}");
        assert!(debug.contains("MatcherFailed"));
        assert!(debug.contains("overflow"));
    }

    #[test]
    fn test_error_source() {
        let error = SearchError::MatcherFailed("overflow".into());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_into_crate_error() {
        let error = SearchError::MatcherFailed("overflow".into());
        let crate_error: crate::TillrError = error.into();
        assert!(crate_error.to_string().starts_with("Search error"));
    }
}
