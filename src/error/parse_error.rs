use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every `position` is a byte offset into the source text. The tokenizer only
/// accepts ASCII, so offsets of accepted input are also character indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside `[0-9a-zA-Z()+\-*/ ]` was found.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// An integer literal was too large to be represented as an `i64`.
    #[error("integer literal '{literal}' at position {position} is too large")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// A factor was expected but something else was found.
    ///
    /// `token` is `None` when the input ended where a factor was required,
    /// e.g. `5 +`.
    #[error("expected a number, variable or '(' but found {} at position {position}",
            describe_token(.token))]
    UnexpectedToken {
        /// The token encountered, if any.
        token:    Option<String>,
        /// Where it was found.
        position: usize,
    },
    /// A `(` was never closed by a matching `)`.
    #[error("expected ')' to close the '(' at position {position}")]
    UnbalancedParentheses {
        /// Position of the unmatched `(`.
        position: usize,
    },
    /// The expression nests deeper than the parser accepts, either through
    /// parentheses or through a long chain of operators.
    #[error("expression nested too deeply at position {position}")]
    NestingTooDeep {
        /// The `(` or operator that went past the limit.
        position: usize,
    },
    /// Tokens remained after a complete expression in strict mode.
    #[error("unexpected trailing token '{token}' at position {position}")]
    UnexpectedTrailingTokens {
        /// The first token left over.
        token:    String,
        /// Where it was found.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnbalancedParentheses { position }
            | Self::NestingTooDeep { position }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}

fn describe_token(token: &Option<String>) -> String {
    token.as_deref()
         .map_or_else(|| "end of input".to_string(), |t| format!("'{t}'"))
}
