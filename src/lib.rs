//! # minicalc
//!
//! minicalc is a small integer expression interpreter written in Rust.
//! It tokenizes and parses arithmetic over integer literals and variables
//! (`+`, `-`, `*`, `/` and parentheses) into an expression tree, then
//! evaluates that tree against a [`Context`] of variable bindings.
//!
//! ```
//! use minicalc::{Context, evaluate, parse};
//!
//! let context: Context = [("x", 10), ("y", 5), ("z", 2)].into_iter().collect();
//!
//! assert_eq!(evaluate(&parse("(x + y) * z").unwrap(), &context), Ok(30));
//! assert_eq!(evaluate(&parse("x + y * z").unwrap(), &context), Ok(20));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an arithmetic
/// expression as a tree. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the number, variable and binary operator nodes.
/// - Renders trees back to (fully parenthesised) source text.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines every error that can be raised while tokenizing,
/// parsing or evaluating an expression. Each kind is a distinct variant with
/// structured fields, so callers can react to it programmatically.
///
/// # Responsibilities
/// - Defines `ParseError` (tokenizer and parser) and `RuntimeError`
///   (evaluator).
/// - Attaches source positions to parse errors.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Converts source text into tokens.
/// - Builds expression trees by recursive descent.
/// - Evaluates trees against a variable context.
pub mod interpreter;
/// General utilities for checked integer arithmetic.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Binding, Context},
        lexer::tokenize,
        parser::core::{parse, parse_strict},
    },
};
use crate::{ast::Expr, error::RuntimeError};

/// Evaluates an expression tree against a context.
///
/// Equivalent to [`Context::eval`].
///
/// # Errors
/// `UndefinedVariable`, `DivisionByZero` or `Overflow`.
///
/// # Examples
/// ```
/// use minicalc::{Context, error::RuntimeError, evaluate, parse};
///
/// let expr = parse("10 / 0").unwrap();
/// assert_eq!(evaluate(&expr, &Context::new()), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr, context: &Context) -> Result<i64, RuntimeError> {
    context.eval(expr)
}

/// Parses `source` and evaluates it against `context` in one step.
///
/// Trailing input after a complete expression is ignored, as in [`parse`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails. The variant tells which
/// phase failed and wraps the original error.
///
/// # Examples
/// ```
/// use minicalc::{Context, Error, error::RuntimeError, get_result};
///
/// let mut context = Context::new();
/// context.set("x", 10);
///
/// assert_eq!(get_result("100 / (x - 5)", &context), Ok(20));
///
/// let err = get_result("x + unknown", &context).unwrap_err();
/// assert_eq!(err,
///            Error::Runtime(RuntimeError::UndefinedVariable { name: "unknown".to_string() }));
/// ```
pub fn get_result(source: &str, context: &Context) -> Result<i64, Error> {
    let expr = parse(source)?;
    Ok(context.eval(&expr)?)
}
