//! Expression evaluation errors
//!
//! None of these reach the user. A failed evaluation only means the query
//! is not arithmetic, so no math result is shown.

use thiserror::Error;

/// Arithmetic evaluation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    Empty,

    /// The input is not a well-formed expression
    #[error("Invalid expression: {0}")]
    Syntax(String),

    /// An identifier that is neither a constant nor a function
    #[error("Undefined symbol: {0}")]
    UnknownName(String),

    /// The result is infinite or not a number
    #[error("Result is not a finite number")]
    NonFinite,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
