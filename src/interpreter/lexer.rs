use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// Only runs of plain spaces are skipped; every other character that is not
/// part of a token is rejected by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r" +")]
pub enum Token {
    /// Integer literal tokens, such as `42`. There is no sign; `-` is always
    /// an operator.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens, such as `x` or `total`. Only ASCII letters; a digit
    /// ends the identifier and starts an integer literal.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Converts source text into tokens paired with their byte offsets.
///
/// Scanning is left to right and stops at the first character that cannot
/// start a token. Each call is independent of every other call.
///
/// # Errors
/// - `InvalidCharacter` for any character outside the expression alphabet,
///   including tabs and newlines.
/// - `LiteralTooLarge` for an integer literal that does not fit an `i64`.
///
/// # Example
/// ```
/// use minicalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(x + 12)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Identifier("x".to_string()), 1),
///                 (Token::Plus, 3),
///                 (Token::Integer(12), 5),
///                 (Token::RParen, 7)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(token) => {
                trace!(%token, position, "scanned token");
                tokens.push((token, position));
            },
            Err(()) => return Err(lex_error(source, lexer.slice(), position)),
        }
    }

    Ok(tokens)
}

/// Classifies a slice the lexer could not turn into a token.
///
/// A digit run only fails when [`parse_integer`] rejected it, so it is
/// reported as an oversized literal; anything else is a bad character.
fn lex_error(source: &str, slice: &str, position: usize) -> ParseError {
    if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        return ParseError::LiteralTooLarge { literal: slice.to_string(),
                                             position };
    }

    let character = source[position..].chars().next().unwrap_or_default();
    ParseError::InvalidCharacter { character, position }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal overflows an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
