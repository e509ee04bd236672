use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its height; a lone literal has height 1.
pub type Subtree = (Expr, usize);

/// Deepest run of groups, call argument lists and negations the parser
/// descends into.
pub const MAX_NESTING: usize = 128;

/// Greatest height of a syntax tree the parser builds.
///
/// Evaluating, printing and dropping a tree all recurse once per level, so
/// this keeps them within a bounded stack.
pub const MAX_HEIGHT: usize = 4096;

/// Tracks how deep the parser currently is in the input.
///
/// `depth` counts the groups, call argument lists and negations entered on
/// the way down to the current token; `open_parens` counts the `(` among
/// them that are still waiting for their `)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nesting {
    depth:       usize,
    open_parens: usize,
}

impl Nesting {
    /// Enters one level without opening a parenthesis (a negation).
    ///
    /// # Errors
    /// [`ParseError::TooDeep`] at `position` past [`MAX_NESTING`] levels.
    pub fn descend(self, position: usize) -> ParseResult<Self> {
        let depth = self.depth + 1;
        if depth > MAX_NESTING {
            return Err(ParseError::TooDeep { position });
        }
        Ok(Self { depth, ..self })
    }

    /// Enters the group or argument list opened by the `(` at `position`.
    ///
    /// # Errors
    /// [`ParseError::TooDeep`] at `position` past [`MAX_NESTING`] levels.
    pub fn open_paren(self, position: usize) -> ParseResult<Self> {
        let inner = self.descend(position)?;
        Ok(Self { open_parens: inner.open_parens + 1,
                  ..inner })
    }

    /// Whether a `)` at this point would close a group or argument list.
    #[must_use]
    pub const fn inside_parens(self) -> bool {
        self.open_parens > 0
    }
}

/// Accepts a subtree `height` no greater than [`MAX_HEIGHT`].
///
/// # Errors
/// [`ParseError::TooDeep`] at `position`, the token that would have raised
/// the tree past the limit.
pub fn check_height(height: usize, position: usize) -> ParseResult<usize> {
    if height > MAX_HEIGHT {
        Err(ParseError::TooDeep { position })
    } else {
        Ok(height)
    }
}

/// Parses a complete token stream into a single expression.
///
/// The whole stream must be consumed: after the expression only
/// [`Token::End`] may follow. A stray `)` there is reported as
/// [`ParseError::UnmatchedParenthesis`], anything else as
/// [`ParseError::UnexpectedToken`].
///
/// # Errors
/// Any [`ParseError`] raised by the grammar.
///
/// # Example
/// ```
/// use parseva::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("8 - 3 - 2").unwrap();
/// assert_eq!(parse(&tokens).unwrap().evaluate(), 3.0);
///
/// let tokens = tokenize("(1 + 2))").unwrap();
/// assert_eq!(parse(&tokens),
///            Err(ParseError::UnmatchedParenthesis { position: 7 }));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let (expr, height) = parse_expression(&mut iter, Nesting::default())?;

    match iter.next() {
        Some((Token::End, _)) | None => {
            trace!("parsed {} node(s), height {height}", expr.node_count());
            Ok(expr)
        },
        Some((Token::RParen, position)) => {
            Err(ParseError::UnmatchedParenthesis { position: *position })
        },
        Some((token, position)) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                     position: *position, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, also used for every
/// parenthesized group and call argument. It begins at the lowest-precedence
/// level, addition, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `nesting`: How deep the expression sits in the input.
///
/// # Returns
/// The parsed expression node and its height.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, nesting)
}
