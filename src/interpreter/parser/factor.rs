use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a factor, the atomic level of the grammar.
///
/// Grammar:
/// ```text
///     factor := "(" expression ")"
///             | NUMBER
///             | IDENTIFIER
/// ```
/// The token is consumed only when it can start a factor.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `end`: Byte offset reported when the input runs out.
/// - `nesting`: Number of enclosing parentheses.
///
/// # Returns
/// The factor and the depth of its tree; a group is as deep as its contents.
///
/// # Errors
/// - `UnexpectedToken` when the next token is an operator or `)`, or when the
///   input has ended.
/// - `UnbalancedParentheses` from a group missing its `)`.
/// - `NestingTooDeep` for a `(` nested more than [`MAX_DEPTH`] levels deep.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                                  end: usize,
                                  nesting: usize)
                                  -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, position)) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedToken { token:    None,
                                                 position: end, });
    };

    match token {
        Token::LParen => {
            if nesting >= MAX_DEPTH {
                return Err(ParseError::NestingTooDeep { position: *position });
            }
            tokens.next();
            parse_grouping(tokens, *position, end, nesting + 1)
        },
        Token::Integer(value) => {
            tokens.next();
            Ok((Expr::Number(*value), 1))
        },
        Token::Identifier(name) => {
            tokens.next();
            Ok((Expr::Variable(name.clone()), 1))
        },
        tok => Err(ParseError::UnexpectedToken { token:    Some(tok.to_string()),
                                                 position: *position, }),
    }
}

/// Parses the inside of a parenthesised group whose `(` has been consumed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the `(`.
/// - `open`: Position of the `(`, reported if it is never closed.
/// - `end`: Byte offset reported when the input runs out.
/// - `nesting`: Number of enclosing parentheses, this one included.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open: usize,
                         end: usize,
                         nesting: usize)
                         -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let group = parse_expression(tokens, end, nesting)?;

    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(group)
        },
        _ => Err(ParseError::UnbalancedParentheses { position: open }),
    }
}
