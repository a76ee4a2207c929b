use crate::{
    ast::Position,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the minimum or maximum of one or more numbers.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`. Any non-numeric argument produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: At least one argument.
/// - `position`: Source position for error reporting.
///
/// # Example
/// ```
/// use mapscript::{
///     ast::Position,
///     interpreter::{evaluator::function::min_max::min_max, value::core::Value},
/// };
///
/// let at = Position::start();
///
/// let r = min_max("min", &[Value::Number(3.0), Value::Number(7.0)], at).unwrap();
/// assert_eq!(r, Value::Number(3.0));
///
/// let r = min_max("max", &[Value::Number(2.5), Value::Number(1.0), Value::Number(-4.0)], at).unwrap();
/// assert_eq!(r, Value::Number(2.5));
/// ```
pub fn min_max(name: &str, args: &[Value], position: Position) -> EvalResult<Value> {
    let pick = if name == "min" { f64::min } else { f64::max };

    let mut result = args[0].as_number(position)?;
    for arg in &args[1..] {
        result = pick(result, arg.as_number(position)?);
    }

    Ok(Value::Number(result))
}
