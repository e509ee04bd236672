use thiserror::Error;

use crate::error::{LexError, ParseError};

/// The failure reported by [`crate::evaluate`] and [`crate::parse`].
///
/// # Example
/// ```
/// use parseva::{
///     error::{EvalError, ParseError},
///     evaluate,
/// };
///
/// let err = evaluate("foo(1)").unwrap_err();
/// assert!(matches!(err, EvalError::Parse(ParseError::UnknownFunction { .. })));
/// assert_eq!(err.position(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input contained a character that starts no token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl EvalError {
    /// Returns the 0-based character position of the offending input.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
        }
    }
}
