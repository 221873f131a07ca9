//! Auxiliary evaluators
//!
//! Run once per committed query, on the whole query before it is split
//! into segments:
//!
//! - [`try_math`]: arithmetic result, unless the query is a bare integer
//! - [`try_round_up`]: cents needed to reach the next dollar
//!
//! Both degrade to `None`; they never fail the query.

mod error;
mod math;
mod parser;
mod round_up;

pub use error::EvalError;
pub use math::{evaluate, try_math};
pub use parser::{BinOp, Expr, parse_expr};
pub use round_up::try_round_up;

/// Derived values for one committed query
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluation {
    pub math: Option<f64>,
    pub round_up: Option<u32>,
}

impl Evaluation {
    /// Run both evaluators on `query`
    #[must_use]
    pub fn of(query: &str) -> Self {
        Self {
            math: try_math(query),
            round_up: try_round_up(query),
        }
    }
}
