/// Parser entry points.
///
/// Holds the top-level `parse` function, which requires the whole token
/// stream to be consumed, and `parse_expression`, the grammar's start rule.
pub mod core;

/// Unary, postfix and primary expressions.
///
/// Handles negation, factorial, numeric literals, function calls and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers: `+`/`-` and
/// `*`/`/`.
pub mod binary;

/// Shared parsing helpers.
///
/// Token lookahead, argument lists, and parenthesis matching.
pub mod utils;
