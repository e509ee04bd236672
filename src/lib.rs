//! # parseva
//!
//! parseva is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression such as `sqrt(sin(0) + 20 + sqrt(25))`, parses
//! it into a syntax tree that honors precedence and associativity, and reduces
//! that tree to a single `f64`.
//!
//! ```
//! assert_eq!(parseva::evaluate("sqrt(sin(0) + 20 + sqrt(50 - pow(5, 2)))").unwrap(),
//!            5.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

pub use crate::{ast::Expr, error::EvalError};
use crate::interpreter::{lexer::tokenize, parser::core::parse as parse_tokens};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, the closed set of node types the
/// parser builds and the evaluator consumes.
///
/// # Responsibilities
/// - Defines one variant per arithmetic construct.
/// - Renders trees in a fully parenthesized form for inspection.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// This module defines all errors that can be raised while turning text into
/// a syntax tree, with the position of the offending input. Evaluation has no
/// error type: it is total.
///
/// # Responsibilities
/// - Defines error enums for each failing phase (lexer, parser).
/// - Wraps them into the single [`EvalError`] reported to callers.
pub mod error;
/// Orchestrates the pipeline from text to number.
///
/// This module ties together lexing, parsing, the builtin function table and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Holds the fixed table of builtin functions.
pub mod interpreter;

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized, parsed and evaluated in one go. Numeric edge
/// cases are results, not errors: `0/0` gives NaN and `1/0` gives infinity.
///
/// # Errors
/// Returns an [`EvalError`] if the text contains an invalid character or does
/// not form a valid expression, including calls to unknown functions and
/// calls with the wrong number of arguments.
///
/// # Examples
/// ```
/// use parseva::evaluate;
///
/// assert_eq!(evaluate("2 + -1").unwrap(), 1.0);
/// assert_eq!(evaluate("13!").unwrap(), 6_227_020_800.0);
/// assert!(evaluate("0/0").unwrap().is_nan());
///
/// // Unknown function.
/// assert!(evaluate("foo(1)").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let expr = parse(expression)?;
    let value = expr.evaluate();
    debug!("{expression:?} evaluated to {value}");
    Ok(value)
}

/// Parses an arithmetic expression without evaluating it.
///
/// The returned tree is immutable and call-valid, so it can be evaluated any
/// number of times with [`Expr::evaluate`].
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use parseva::parse;
///
/// let expr = parse("-2!").unwrap();
/// assert_eq!(expr.to_string(), "(-(2)!)");
/// assert_eq!(expr.evaluate(), -2.0);
/// ```
pub fn parse(expression: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(expression)?;
    let expr = parse_tokens(&tokens)?;
    debug!("parsed {expression:?} as {expr}");
    Ok(expr)
}
