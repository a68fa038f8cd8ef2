/// Parser entry points and shared result type.
///
/// Tokenizes the source, hands the token cursor to the grammar rules and
/// optionally checks that the whole input was consumed.
pub mod core;

/// Binary operator levels of the grammar.
///
/// `expression` (`+`, `-`) and `term` (`*`, `/`), both left-associative.
pub mod binary;

/// Factor parsing: literals, variables and parenthesised groups.
pub mod factor;
