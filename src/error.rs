/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing source
/// text: characters outside the expression alphabet, literals that do not fit
/// an `i64`, misplaced tokens and unclosed parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating an expression tree
/// against a [`Context`](crate::interpreter::evaluator::core::Context).
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure from parsing followed by evaluation.
///
/// Returned by [`get_result`](crate::get_result). The original error is kept
/// intact so callers can still match on its kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
