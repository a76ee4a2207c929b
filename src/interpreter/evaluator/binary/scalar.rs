use crate::{
    ast::{BinaryOperator, Position},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation on two numbers.
    ///
    /// Follows IEEE 754 double semantics throughout: dividing by zero gives
    /// an infinity or NaN instead of an error, and `%` is the remainder with
    /// the sign of the dividend.
    ///
    /// # Parameters
    /// - `op`: One of `+ - * / %`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Errors
    /// `ExpectedNumber` if either operand is not a number.
    ///
    /// # Example
    /// ```
    /// use mapscript::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let at = Position::start();
    ///
    /// let r = Context::eval_scalar_op(BinaryOperator::Remainder,
    ///                                 &Value::Number(-7.0),
    ///                                 &Value::Number(3.0),
    ///                                 at).unwrap();
    /// assert_eq!(r, Value::Number(-1.0));
    ///
    /// let r = Context::eval_scalar_op(BinaryOperator::Divide,
    ///                                 &Value::Number(1.0),
    ///                                 &Value::Number(0.0),
    ///                                 at).unwrap();
    /// assert_eq!(r, Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: Position)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Divide, Multiply, Remainder, Subtract};

        let l = left.as_number(position)?;
        let r = right.as_number(position)?;

        Ok(Value::Number(match op {
                             Add => l + r,
                             Subtract => l - r,
                             Multiply => l * r,
                             Divide => l / r,
                             Remainder => l % r,
                             _ => {
                                 return Err(EvalError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                                                                   position });
                             },
                         }))
    }
}
