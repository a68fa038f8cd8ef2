use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A variable has no binding in the context.
    #[error("variable '{name}' is not defined")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit in an `i64`.
    #[error("integer overflow while computing {left} {op} {right}")]
    Overflow {
        /// The left operand value.
        left:  i64,
        /// The operator being applied.
        op:    crate::ast::BinaryOperator,
        /// The right operand value.
        right: i64,
    },
}
