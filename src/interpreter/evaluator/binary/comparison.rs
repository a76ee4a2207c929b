use crate::{
    ast::{BinaryOperator, Position},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison between two values.
    ///
    /// `==` and `!=` compare structurally: vectors component by component,
    /// strings and numbers by value, and values of different types are
    /// simply unequal. The relational operators only accept numbers.
    ///
    /// The result follows the language's boolean convention: `1` for true,
    /// `none` for false.
    ///
    /// # Errors
    /// `ExpectedNumber` if a relational operator gets a non-number.
    ///
    /// # Example
    /// ```
    /// use mapscript::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let at = Position::start();
    /// let eq = Context::eval_comparison(BinaryOperator::Equals,
    ///                                   &Value::from([1.0, 2.0]),
    ///                                   &Value::from([1.0, 2.0]),
    ///                                   at).unwrap();
    /// assert_eq!(eq, Value::Number(1.0));
    ///
    /// let mixed = Context::eval_comparison(BinaryOperator::Equals,
    ///                                      &Value::Number(1.0),
    ///                                      &Value::from("1"),
    ///                                      at).unwrap();
    /// assert_eq!(mixed, Value::None);
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equals, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NotEquals};

        let result = match op {
            Equals => left == right,
            NotEquals => left != right,
            GreaterThan | GreaterThanOrEqual | LessThan | LessThanOrEqual => {
                let l = left.as_number(position)?;
                let r = right.as_number(position)?;

                match op {
                    GreaterThan => l > r,
                    GreaterThanOrEqual => l >= r,
                    LessThan => l < r,
                    _ => l <= r,
                }
            },
            _ => {
                return Err(EvalError::TypeError { details: format!("'{op}' is not a comparison"),
                                                  position });
            },
        };

        Ok(Value::boolean(result))
    }
}
