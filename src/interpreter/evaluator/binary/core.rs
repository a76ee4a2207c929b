use crate::{
    ast::{BinaryOperator, Expr, Position},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// `and` and `or` go through [`Context::eval_logic`] so that the right
    /// operand is only evaluated when the left one does not decide the
    /// result. Every other operator evaluates both operands, left first.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          position: Position)
                          -> EvalResult<Value> {
        if matches!(op, BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr) {
            return self.eval_logic(op, left, right);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, position)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, equality and relational
    /// operators to `eval_comparison`. The logical operators pick one of the
    /// two values the same way the short-circuit path does.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use mapscript::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, Position::start());
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, position: Position) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Divide, Equals, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, LogicalAnd,
            LogicalOr, Multiply, NotEquals, Remainder, Subtract,
        };

        match op {
            Add | Subtract | Multiply | Divide | Remainder => Self::eval_scalar_op(op, left, right, position),
            Equals | NotEquals | GreaterThan | GreaterThanOrEqual | LessThan | LessThanOrEqual => {
                Self::eval_comparison(op, left, right, position)
            },
            LogicalAnd | LogicalOr => Ok(Self::select_logic(op, left, right).clone()),
        }
    }
}
