/// Lexing errors.
///
/// Raised while the input text is split into tokens, before any grammar is
/// applied.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from tokens: grammar mismatches, unbalanced parentheses, and calls to
/// functions that are unknown or given the wrong number of arguments.
pub mod parse_error;
/// The single error type reported by the public entry points.
///
/// Wraps lexing and parsing failures so callers only need to handle one
/// type. Evaluation itself never fails, so there is no evaluation variant.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
