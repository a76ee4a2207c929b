use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `left and right` or `left or right` with short-circuiting.
    ///
    /// The result is one of the operands, not a converted boolean: `and`
    /// yields the left value when it is `none`, otherwise the right value;
    /// `or` yields the left value when it is not `none`, otherwise the right
    /// value. When the left value decides, the right subtree is never
    /// evaluated, so it may contain anything that would fail.
    ///
    /// # Example
    /// ```
    /// use mapscript::{Context, evaluate};
    ///
    /// let mut ctx = Context::new();
    /// ctx.bind("f", mapscript::Value::None);
    ///
    /// // `missing()` is never called.
    /// assert!(evaluate("f and missing()", &ctx).unwrap().is_none());
    /// assert_eq!(evaluate("f or 'fallback'", &ctx).unwrap().to_string(), "fallback");
    /// ```
    pub fn eval_logic(&self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<Value> {
        let left = self.eval(left)?;

        if left_decides(op, &left) {
            Ok(left)
        } else {
            self.eval(right)
        }
    }

    /// Picks the result of a logical operator from two evaluated operands.
    #[must_use]
    pub fn select_logic<'v>(op: BinaryOperator, left: &'v Value, right: &'v Value) -> &'v Value {
        if left_decides(op, left) { left } else { right }
    }
}

/// `or` is decided by a true left operand, `and` by a false one.
fn left_decides(op: BinaryOperator, left: &Value) -> bool {
    left.is_true() == (op == BinaryOperator::LogicalOr)
}
