use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        function::core::lookup,
        lexer::Token,
        parser::{
            core::{Nesting, ParseResult, Subtree, check_height, parse_expression},
            utils::{expect_closing_paren, next_token, parse_comma_separated, peek_token, stray_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix `-` (numeric negation). Negation is right-associative, so
/// `--x` is parsed as `-(-x)`, and it binds looser than the postfix
/// factorial, so `-2!` is `-(2!)`. Every `-` counts as one level of
/// nesting.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies an optional factorial via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary   := "-" unary | postfix
///     postfix := primary "!"?
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `nesting`: How deep the operand sits in the input.
///
/// # Returns
/// An [`Expr::Negate`] or a primary expression possibly wrapped in
/// [`Expr::Factorial`], with its height.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let (inner, height) = parse_unary(tokens, nesting.descend(position)?)?;
        Ok((Expr::Negate { inner: Box::new(inner) }, check_height(height + 1, position)?))
    } else {
        let primary = parse_primary(tokens, nesting)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER "(" expression ("," expression)* ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `nesting`: How deep the operand sits in the input.
///
/// # Returns
/// The parsed primary [`Expr`] and its height, or a `ParseError` on
/// failure. A `)` that closes nothing is an
/// [`ParseError::UnmatchedParenthesis`].
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match peek_token(tokens)? {
        (Token::Number(_), _) => parse_number(tokens),
        (Token::Identifier(_), _) => parse_call(tokens, nesting),
        (Token::LParen, _) => parse_grouping(tokens, nesting),
        (token, position) => Err(stray_token(token, *position, nesting)),
    }
}

/// Applies a single optional postfix `!` to `node`.
///
/// A second `!` is not consumed; it is left for the caller, which rejects
/// it as an unexpected token.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, (node, height): Subtree) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Bang, position)) = tokens.peek() {
        let height = check_height(height + 1, *position)?;
        tokens.next();
        Ok((Expr::Factorial { inner: Box::new(node) }, height))
    } else {
        Ok((node, height))
    }
}

/// Parses a numeric literal.
///
/// The lexer only produces digit strings with an optional fractional part,
/// so conversion cannot fail on its output. A hand-built token stream can
/// still carry any text, which is reported as
/// [`ParseError::InvalidNumber`].
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match next_token(tokens)? {
        (Token::Number(literal), position) => {
            literal.parse()
                   .map(|value| (Expr::number(value), 1))
                   .map_err(|_| ParseError::InvalidNumber { literal:  literal.clone(),
                                                            position: *position, })
        },
        (token, position) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                               position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Reaching the end of input
/// first yields `ParseError::UnmatchedParenthesis` pointing at the `(`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, open) = next_token(tokens)?;
    let subtree = parse_expression(tokens, nesting.open_paren(*open)?)?;
    expect_closing_paren(tokens, *open)?;
    Ok(subtree)
}

/// Parses a builtin function call.
///
/// Supported form: `identifier(arg1, arg2, ...)` with at least one argument.
///
/// The name is resolved against the builtin table as soon as it is read, and
/// the number of parsed arguments is checked against the builtin's arity, so
/// every [`Expr::Call`] this returns can be evaluated without further checks.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is not a builtin (`UnknownFunction`),
/// - `(` does not follow the name,
/// - an argument fails to parse or the closing `)` is missing,
/// - the argument count differs from the arity (`ArityMismatch`).
fn parse_call<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, position) = match next_token(tokens)? {
        (Token::Identifier(name), position) => (name, *position),
        (token, position) => return Err(stray_token(token, *position, nesting)),
    };

    let builtin = lookup(name).ok_or_else(|| ParseError::UnknownFunction { name: name.clone(),
                                                                           position })?;

    let open = match peek_token(tokens)? {
        (Token::LParen, open) => *open,
        (token, position) => return Err(stray_token(token, *position, nesting)),
    };
    tokens.next();

    let inner = nesting.open_paren(open)?;
    let args = parse_comma_separated(tokens, |tokens| parse_expression(tokens, inner), open)?;
    if args.len() != builtin.arity() {
        return Err(ParseError::ArityMismatch { name: name.clone(),
                                               expected: builtin.arity(),
                                               found: args.len(),
                                               position });
    }

    let tallest = args.iter().map(|(_, height)| *height).max().unwrap_or(0);
    let height = check_height(tallest + 1, position)?;
    let args = args.into_iter().map(|(arg, _)| arg).collect();

    Ok((Expr::Call { name: builtin.name().to_string(),
                     args },
        height))
}
