//! Arithmetic evaluation
//!
//! Typing `3*1.29` into the lookup box shows `= 3.87` next to the item
//! results. A query of bare digits is a code, never a calculation.

use super::error::EvalError;
use super::parser::{BinOp, Expr, parse_expr};
use regex::Regex;
use std::f64::consts;
use std::sync::LazyLock;

static PURE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("pure integer pattern is valid"));

impl Expr {
    /// Evaluate the expression tree
    ///
    /// # Errors
    ///
    /// Returns `EvalError::UnknownName` for undefined constants or functions.
    pub fn eval(&self) -> Result<f64, EvalError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Name(name) => constant(name).ok_or_else(|| EvalError::UnknownName(name.clone())),
            Self::Neg(inner) => Ok(-inner.eval()?),
            Self::Binary(op, lhs, rhs) => {
                let (l, r) = (lhs.eval()?, rhs.eval()?);
                Ok(match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => l / r,
                    BinOp::Rem => l % r,
                    BinOp::Pow => l.powf(r),
                })
            }
            Self::Call(name, arg) => {
                let f = function(name).ok_or_else(|| EvalError::UnknownName(name.clone()))?;
                Ok(f(arg.eval()?))
            }
        }
    }
}

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}

fn function(name: &str) -> Option<fn(f64) -> f64> {
    match name {
        "sqrt" => Some(f64::sqrt),
        "abs" => Some(f64::abs),
        "round" => Some(f64::round),
        "floor" => Some(f64::floor),
        "ceil" => Some(f64::ceil),
        _ => None,
    }
}

/// Evaluate an arithmetic expression
///
/// # Errors
///
/// Returns an `EvalError` when the input does not parse, names an unknown
/// symbol, or produces an infinite or NaN result.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let value = parse_expr(input)?.eval()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Math result for a whole query, if it is a calculation
///
/// Pure integers are skipped. Evaluation failures are swallowed.
#[must_use]
pub fn try_math(query: &str) -> Option<f64> {
    if PURE_INTEGER.is_match(query) {
        return None;
    }
    match evaluate(query) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::trace!(query, error = %e, "Query is not arithmetic");
            None
        }
    }
}
