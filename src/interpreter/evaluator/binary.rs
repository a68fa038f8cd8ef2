use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::checked_floor_div,
};

impl Context {
    /// Applies a binary arithmetic operator to two evaluated operands.
    ///
    /// All four operators are checked: a result outside the `i64` range is
    /// reported as `Overflow` rather than wrapping or panicking. Division
    /// rounds toward negative infinity.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `Div` and `right` is zero.
    /// - `Overflow` if the result does not fit an `i64`.
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::BinaryOperator, error::RuntimeError, Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2), Ok(-4));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// assert!(matches!(Context::eval_binary(BinaryOperator::Mul, i64::MAX, 2),
    ///                  Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                checked_floor_div(left, right)
            },
        };

        result.ok_or(RuntimeError::Overflow { left, op, right })
    }
}
