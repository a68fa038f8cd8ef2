/// Core evaluation logic and context management.
///
/// Contains the variable context, the recursive tree walk and the shared
/// result type.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to evaluated operands with overflow and
/// division-by-zero checks.
pub mod binary;
