use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers and identifiers keep their literal text; the parser decides what
/// to do with it. Unicode whitespace between tokens is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; function names such as `sqrt` or `log10`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input. Never matched by the lexer itself; [`tokenize`] appends
    /// it so the parser never runs past the stream.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "'{text}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Bang => write!(f, "'!'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Splits `source` into tokens, each paired with its 0-based character
/// position.
///
/// The returned sequence always ends with [`Token::End`], positioned one past
/// the last character.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that starts
/// no token.
///
/// # Example
/// ```
/// use parseva::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 + sqrt(9)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("2".to_string()), 0),
///                 (Token::Plus, 2),
///                 (Token::Identifier("sqrt".to_string()), 4),
///                 (Token::LParen, 8),
///                 (Token::Number("9".to_string()), 9),
///                 (Token::RParen, 10),
///                 (Token::End, 11)]);
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let position = char_position(source, start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let character = source.get(start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or_default();
                return Err(LexError::InvalidCharacter { character,
                                                        position });
            },
        }
    }

    tokens.push((Token::End, source.chars().count()));
    trace!("tokenized {} token(s) from {source:?}", tokens.len());

    Ok(tokens)
}

/// Converts a byte offset from the lexer into a character index.
fn char_position(source: &str, byte_offset: usize) -> usize {
    source.get(..byte_offset)
          .map_or(byte_offset, |prefix| prefix.chars().count())
}
