/// The evaluator module walks expression trees and computes results.
///
/// It defines the variable [`Context`](evaluator::core::Context), resolves
/// variables against it and performs checked integer arithmetic, reporting
/// undefined variables, division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// It turns the raw character stream into integer literals, identifiers,
/// operators and parentheses, each tagged with its byte offset, and rejects
/// characters outside the expression alphabet.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// A recursive-descent parser over the grammar
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '(' expression ')' | NUMBER | IDENTIFIER
/// ```
///
/// which gives `*` and `/` higher precedence than `+` and `-`, all
/// left-associative.
pub mod parser;
