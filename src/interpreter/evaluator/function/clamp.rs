use crate::{
    ast::Position,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Clamps a numeric value between a minimum and maximum bound.
///
/// If `min > max` or either bound is NaN, an `InvalidArgument` error is
/// returned.
///
/// # Parameters
/// - `args`: Slice containing `[value, min, max]`.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// `value`, moved into the range `[min, max]`.
///
/// # Example
/// ```
/// use mapscript::{
///     ast::Position,
///     interpreter::{evaluator::function::clamp::clamp, value::core::Value},
/// };
///
/// let result = clamp(&[Value::Number(5.0), Value::Number(0.0), Value::Number(3.0)],
///                    Position::start()).unwrap();
///
/// // 5 clamped between 0 and 3 yields 3
/// assert_eq!(result, Value::Number(3.0));
/// ```
pub fn clamp(args: &[Value], position: Position) -> EvalResult<Value> {
    let value = args[0].as_number(position)?;
    let min = args[1].as_number(position)?;
    let max = args[2].as_number(position)?;

    if min.is_nan() || max.is_nan() || min > max {
        return Err(EvalError::InvalidArgument { details: format!("clamp: min ({min}) > max ({max})"),
                                                position });
    }

    Ok(Value::Number(value.clamp(min, max)))
}
