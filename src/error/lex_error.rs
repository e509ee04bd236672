use thiserror::Error;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// 0-based character index in the input.
        position:  usize,
    },
}

impl LexError {
    /// Returns the input position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } => *position,
        }
    }
}
