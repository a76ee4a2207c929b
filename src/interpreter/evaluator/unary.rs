use crate::{
    ast::{Position, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: flips the sign of a number.
    /// - `LogicalNegate`: `1` for `none`, `none` for everything else.
    /// - `BitwiseComplement`: `!n` on a whole number. The parser never
    ///   produces it; it is available to hosts that build trees directly.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use mapscript::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let at = Position::start();
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), at).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// // Zero is true, so its negation is false.
    /// let v = Context::eval_unary(UnaryOperator::LogicalNegate, &Value::Number(0.0), at).unwrap();
    /// assert_eq!(v, Value::None);
    ///
    /// let v = Context::eval_unary(UnaryOperator::BitwiseComplement, &Value::Number(0.0), at).unwrap();
    /// assert_eq!(v, Value::Number(-1.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number(position)?)),
            UnaryOperator::LogicalNegate => Ok(Value::boolean(!value.is_true())),
            UnaryOperator::BitwiseComplement => {
                let n = f64_to_i64_checked(value.as_number(position)?, position)?;
                Ok(Value::Number(i64_to_f64_checked(!n, position)?))
            },
        }
    }
}
