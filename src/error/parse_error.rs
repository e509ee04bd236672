use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// Every variant carries the 0-based character position of the token that
/// caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that fits no grammar production at this point.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// An opening parenthesis was never closed, or a closing one was never
    /// opened.
    #[error("Error at position {position}: Unmatched parenthesis.")]
    UnmatchedParenthesis {
        /// Position of the parenthesis without a partner.
        position: usize,
    },
    /// Called a function that is not in the builtin table.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name that was called.
        name:     String,
        /// Where the name starts.
        position: usize,
    },
    /// Called a known function with the wrong number of arguments.
    #[error("Error at position {position}: Function '{name}' takes {expected} argument(s), but {found} were supplied.")]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// The registered arity.
        expected: usize,
        /// The number of arguments parsed.
        found:    usize,
        /// Where the name starts.
        position: usize,
    },
    /// A numeric literal could not be converted to an `f64`.
    #[error("Error at position {position}: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal text.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// The input nests groups, calls or negations too deeply, or builds a
    /// syntax tree taller than the parser allows.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    TooDeep {
        /// The token that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the input position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnmatchedParenthesis { position }
            | Self::TooDeep { position }
            | Self::UnknownFunction { position, .. }
            | Self::ArityMismatch { position, .. }
            | Self::InvalidNumber { position, .. } => *position,
        }
    }
}
