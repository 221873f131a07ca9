//! Arithmetic expression parser
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/" | "%") unary)*
//! unary   := ("-" | "+") unary | power
//! power   := primary ("^" unary)?
//! primary := number | "(" expr ")" | name "(" expr ")" | name
//! ```
//!
//! `^` is right associative and binds tighter than unary minus, so `-2^2`
//! is `-4` and `2^-1` is `0.5`.

use super::error::EvalError;
use nom::{
    IResult,
    branch::alt,
    character::complete::{alpha1, alphanumeric0, char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::fold_many0,
    sequence::{delimited, pair, preceded, tuple},
};

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinOp {
    const fn from_char(c: char) -> Self {
        match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            '%' => Self::Rem,
            _ => Self::Pow,
        }
    }
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// A named constant such as `pi`
    Name(String),
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    /// A single-argument function call such as `sqrt(2)`
    Call(String, Box<Expr>),
}

/// Parse a complete expression
///
/// # Errors
///
/// Returns `EvalError::Empty` for blank input and `EvalError::Syntax` when
/// the input is not a complete expression.
pub fn parse_expr(input: &str) -> Result<Expr, EvalError> {
    if input.trim().is_empty() {
        return Err(EvalError::Empty);
    }

    all_consuming(ws(expr))(input)
        .map(|(_, parsed)| parsed)
        .map_err(|_| EvalError::Syntax(input.to_string()))
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn binary(op: char, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary(BinOp::from_char(op), Box::new(lhs), Box::new(rhs))
}

fn expr(input: &str) -> IResult<&str, Expr> {
    let (input, first) = term(input)?;
    fold_many0(
        pair(ws(one_of("+-")), term),
        move || first.clone(),
        |lhs, (op, rhs)| binary(op, lhs, rhs),
    )(input)
}

fn term(input: &str) -> IResult<&str, Expr> {
    let (input, first) = unary(input)?;
    fold_many0(
        pair(ws(one_of("*/%")), unary),
        move || first.clone(),
        |lhs, (op, rhs)| binary(op, lhs, rhs),
    )(input)
}

fn unary(input: &str) -> IResult<&str, Expr> {
    alt((
        map(preceded(ws(char('-')), unary), |e| Expr::Neg(Box::new(e))),
        preceded(ws(char('+')), unary),
        power,
    ))(input)
}

fn power(input: &str) -> IResult<&str, Expr> {
    let (input, base) = primary(input)?;
    let (input, exponent) = opt(preceded(ws(char('^')), unary))(input)?;
    Ok(match exponent {
        Some(exponent) => (input, binary('^', base, exponent)),
        None => (input, base),
    })
}

fn primary(input: &str) -> IResult<&str, Expr> {
    ws(alt((
        number,
        delimited(char('('), ws(expr), char(')')),
        call,
        map(identifier, |name| Expr::Name(name.to_lowercase())),
    )))(input)
}

fn number(input: &str) -> IResult<&str, Expr> {
    map_res(
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        |s: &str| s.parse::<f64>().map(Expr::Number),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(alpha1, alphanumeric0))(input)
}

fn call(input: &str) -> IResult<&str, Expr> {
    map(
        tuple((identifier, multispace0, delimited(char('('), ws(expr), char(')')))),
        |(name, _, arg)| Expr::Call(name.to_lowercase(), Box::new(arg)),
    )(input)
}
