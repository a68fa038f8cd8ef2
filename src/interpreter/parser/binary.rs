use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, check_depth},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`, so `a - b - c`
/// parses as `(a - b) - c`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `end`: Byte offset reported when the input runs out.
/// - `nesting`: Number of enclosing parentheses.
///
/// # Returns
/// An expression tree combining term-level nodes, and its depth.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             end: usize,
                             nesting: usize)
                             -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut depth) = parse_multiplicative(tokens, end, nesting)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let position = *position;
        tokens.next();
        let (right, right_depth) = parse_multiplicative(tokens, end, nesting)?;
        depth = check_depth(depth.max(right_depth) + 1, position)?;
        left = Expr::binary(op, left, right);
    }
    Ok((left, depth))
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative operators `*` and `/`, which bind tighter
/// than `+` and `-`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `end`: Byte offset reported when the input runs out.
/// - `nesting`: Number of enclosing parentheses.
///
/// # Returns
/// An expression tree combining factor-level nodes, and its depth.
///
/// # Errors
/// `NestingTooDeep` at the operator that would make the tree deeper than
/// [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH).
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   end: usize,
                                   nesting: usize)
                                   -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut left, mut depth) = parse_factor(tokens, end, nesting)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let position = *position;
        tokens.next();
        let (right, right_depth) = parse_factor(tokens, end, nesting)?;
        depth = check_depth(depth.max(right_depth) + 1, position)?;
        left = Expr::binary(op, left, right);
    }
    Ok((left, depth))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for literals, identifiers and parentheses.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
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
