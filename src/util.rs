/// Checked integer helpers.
///
/// Arithmetic used by the evaluator that must never panic, whatever the
/// operand values.
pub mod num;
