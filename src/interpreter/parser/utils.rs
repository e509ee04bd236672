use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Nesting, ParseResult},
    },
};

/// Parses a comma-separated list of items up to the closing `)`.
///
/// Used for function argument lists. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// The list must hold at least one item.
///
/// Grammar (simplified): `list := item ("," item)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
/// - `open`: Position of the `(` that opened the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered (`UnexpectedToken`),
/// - the input ends before the closing `)` (`UnmatchedParenthesis`).
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    loop {
        items.push(parse_item(tokens)?);
        match peek_token(tokens)? {
            (Token::Comma, _) => {
                tokens.next();
            },
            (Token::RParen, _) => {
                tokens.next();
                break;
            },
            (Token::End, _) => return Err(ParseError::UnmatchedParenthesis { position: open }),
            (token, position) => return Err(unexpected(token, *position)),
        }
    }
    Ok(items)
}

/// Consumes the `)` closing the group opened at `open`.
///
/// # Errors
/// - `UnmatchedParenthesis` (at `open`) if the input ends first.
/// - `UnexpectedToken` for any other token.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  open: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match peek_token(tokens)? {
        (Token::RParen, _) => {
            tokens.next();
            Ok(())
        },
        (Token::End, _) => Err(ParseError::UnmatchedParenthesis { position: open }),
        (token, position) => Err(unexpected(token, *position)),
    }
}

/// Returns the next token without consuming it.
///
/// A well-formed stream always ends in [`Token::End`], which no production
/// consumes, so running dry only happens for hand-built streams; it is
/// reported as an unexpected end of input.
pub(in crate::interpreter::parser) fn peek_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().copied().ok_or_else(end_of_input)
}

/// Consumes and returns the next token.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next().ok_or_else(end_of_input)
}

/// Builds the `UnexpectedToken` error for `token` at `position`.
fn unexpected(token: &Token, position: usize) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  position }
}

/// Builds the error for a `token` that cannot start an operand.
///
/// A `)` that closes nothing at this `nesting` is an
/// `UnmatchedParenthesis`; any other token is unexpected.
pub(in crate::interpreter::parser) fn stray_token(token: &Token,
                                                  position: usize,
                                                  nesting: Nesting)
                                                  -> ParseError {
    match token {
        Token::RParen if !nesting.inside_parens() => ParseError::UnmatchedParenthesis { position },
        _ => unexpected(token, position),
    }
}

fn end_of_input() -> ParseError {
    unexpected(&Token::End, 0)
}
