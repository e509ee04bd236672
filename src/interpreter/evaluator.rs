/// Core evaluation logic.
///
/// Contains the structural match that reduces a syntax tree to an `f64`.
pub mod core;

/// Unary operator evaluation.
///
/// Implements the factorial, including its extension to non-integral
/// operands through the gamma function.
pub mod unary;

/// Function call evaluation.
///
/// Dispatches evaluated arguments to the builtin table.
pub mod function;
