//! Unit tests for eval error types

#[cfg(test)]
mod tests {
    use crate::eval::error::EvalError;

    #[test]
    fn test_error_display() {
        assert_eq!(EvalError::Empty.to_string(), "Empty expression");
        assert_eq!(EvalError::UnknownName("foo".into()).to_string(), "Undefined symbol: foo");
        assert_eq!(EvalError::NonFinite.to_string(), "Result is not a finite number");
    }

    #[test]
    fn test_error_into_crate_error() {
        let crate_error: crate::TillrError = EvalError::Syntax("1 +".into()).into();
        assert_eq!(crate_error.to_string(), "Expression error: Invalid expression: 1 +");
    }
}
