use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

/// Result type used by the tokenizer and parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree, and deepest parenthesis nesting, the parser
/// accepts.
///
/// Evaluation, `Display` and dropping a tree all recurse once per level, so
/// this bound keeps every later walk of a parsed tree within the stack.
pub const MAX_DEPTH: usize = 256;

/// Accepts `depth` if it is within [`MAX_DEPTH`].
///
/// # Errors
/// `NestingTooDeep` reported at `position` otherwise.
pub(crate) const fn check_depth(depth: usize, position: usize) -> ParseResult<usize> {
    if depth > MAX_DEPTH {
        Err(ParseError::NestingTooDeep { position })
    } else {
        Ok(depth)
    }
}

/// Parses a full expression.
///
/// This is the grammar's start rule. It begins at the lowest-precedence level,
/// addition and subtraction, and recursively descends from there.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `end`: Byte offset reported when the input runs out.
/// - `nesting`: Number of enclosing parentheses.
///
/// # Returns
/// The parsed expression node and the depth of its tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               end: usize,
                               nesting: usize)
                               -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, end, nesting)
}

/// Parses `source` into an expression tree.
///
/// Parsing stops as soon as a complete expression has been read; anything
/// after it is ignored, so `"5 3"` parses as `5` and `"x)"` as `x`. Use
/// [`parse_strict`] to reject leftover input.
///
/// # Errors
/// Returns the tokenizer's errors, `UnexpectedToken` when a factor is missing
/// or malformed, `UnbalancedParentheses` when a `(` is not closed, and
/// `NestingTooDeep` when the tree or the parentheses go deeper than
/// [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use minicalc::{ast::Expr, interpreter::parser::core::parse};
///
/// assert_eq!(parse("2 3").unwrap(), Expr::Number(2));
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let (expr, _) = parse_expression(&mut iter, source.len(), 0)?;
    if let Some((token, position)) = iter.peek() {
        debug!(%token, position, "ignoring trailing tokens");
    }

    debug!(%expr, "parsed expression");
    Ok(expr)
}

/// Parses `source` and requires every token to be consumed.
///
/// # Errors
/// Everything [`parse`] reports, plus `UnexpectedTrailingTokens` for the first
/// token left after a complete expression.
///
/// # Example
/// ```
/// use minicalc::{error::ParseError, interpreter::parser::core::parse_strict};
///
/// assert!(matches!(parse_strict("(1 + 2))"),
///                  Err(ParseError::UnexpectedTrailingTokens { position: 7, .. })));
/// ```
pub fn parse_strict(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let (expr, _) = parse_expression(&mut iter, source.len(), 0)?;
    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    debug!(%expr, "parsed expression");
    Ok(expr)
}
