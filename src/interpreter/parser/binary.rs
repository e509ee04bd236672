use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Nesting, ParseResult, Subtree, check_height},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
/// becomes `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `nesting`: How deep the chain sits in the input.
///
/// # Returns
/// An `Expr::Addition`/`Expr::Subtraction` tree representing the parsed
/// expression, with its height.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_multiplicative(tokens, nesting)?;
    while let Some((op, position)) = peek_operator(tokens).filter(|(op, _)| op.is_additive()) {
        tokens.next();
        let (right, right_height) = parse_multiplicative(tokens, nesting)?;
        height = check_height(height.max(right_height) + 1, position)?;
        left = op.node(left, right);
    }
    Ok((left, height))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which share one
/// precedence tier.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `nesting`: How deep the chain sits in the input.
///
/// # Returns
/// A binary expression tree combining unary-level nodes, with its height.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut height) = parse_unary(tokens, nesting)?;
    while let Some((op, position)) = peek_operator(tokens).filter(|(op, _)| op.is_multiplicative()) {
        tokens.next();
        let (right, right_height) = parse_unary(tokens, nesting)?;
        height = check_height(height.max(right_height) + 1, position)?;
        left = op.node(left, right);
    }
    Ok((left, height))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`), `None` for all other tokens.
///
/// # Example
/// ```
/// use parseva::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

fn peek_operator<'a, I>(tokens: &mut Peekable<I>) -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek()
          .and_then(|(token, position)| token_to_binary_operator(token).map(|op| (op, *position)))
}
