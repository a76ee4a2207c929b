use crate::{
    ast::Position,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_f64_checked,
};

/// Applies an `f64` method to a single numeric argument.
///
/// The generated functions expect exactly one argument; arity is checked by
/// the caller. Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed number.
///
/// # Example
/// ```
/// use mapscript::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::floor, value::core::Value},
/// };
///
/// let r = floor(&[Value::Number(3.8)], Position::start()).unwrap();
/// assert_eq!(r, Value::Number(3.0));
/// ```
macro_rules! number_builtin {
    ($fname:ident, $f64_fn:ident) => {
        pub fn $fname(args: &[Value], position: Position) -> EvalResult<Value> {
            Ok(Value::Number(args[0].as_number(position)?.$f64_fn()))
        }
    };
}

number_builtin!(abs, abs);
number_builtin!(floor, floor);
number_builtin!(ceil, ceil);
number_builtin!(round, round);
number_builtin!(trunc, trunc);
number_builtin!(sqrt, sqrt);
number_builtin!(sin, sin);
number_builtin!(cos, cos);
number_builtin!(tan, tan);
number_builtin!(radians, to_radians);
number_builtin!(degrees, to_degrees);

/// Returns `-1`, `0` or `1` according to the sign of a number.
///
/// Unlike `f64::signum`, zero maps to `0`.
///
/// # Example
/// ```
/// use mapscript::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::sign, value::core::Value},
/// };
///
/// assert_eq!(sign(&[Value::Number(-42.0)], Position::start()).unwrap(), Value::Number(-1.0));
/// assert_eq!(sign(&[Value::Number(0.0)], Position::start()).unwrap(), Value::Number(0.0));
/// ```
pub fn sign(args: &[Value], position: Position) -> EvalResult<Value> {
    let n = args[0].as_number(position)?;
    Ok(Value::Number(if n == 0.0 || n.is_nan() { n } else { n.signum() }))
}

/// `atan2(y, x)`: the angle of the point `(x, y)` in radians.
pub fn atan2(args: &[Value], position: Position) -> EvalResult<Value> {
    let y = args[0].as_number(position)?;
    let x = args[1].as_number(position)?;
    Ok(Value::Number(y.atan2(x)))
}

/// `lerp(a, b, t)`: linear interpolation between `a` and `b`.
///
/// `a` and `b` are either both numbers or both vectors of the same length;
/// vectors are interpolated component-wise. `t` is not clamped.
///
/// # Example
/// ```
/// use mapscript::{Context, evaluate};
///
/// let ctx = Context::with_builtins();
/// assert_eq!(evaluate("lerp(0, 10, 0.25)", &ctx).unwrap().to_string(), "2.5");
/// assert_eq!(evaluate("lerp([0, 0], [4, 8], 0.5)", &ctx).unwrap().to_string(), "2 4");
/// ```
pub fn lerp(args: &[Value], position: Position) -> EvalResult<Value> {
    let t = args[2].as_number(position)?;

    match (&args[0], &args[1]) {
        (Value::Vector(a), Value::Vector(b)) => {
            if a.len() != b.len() {
                return Err(EvalError::InvalidArgument { details: format!("lerp: vectors of length {} and {} differ in length",
                                                                         a.len(),
                                                                         b.len()),
                                                        position });
            }

            Ok(Value::from(a.iter()
                            .zip(b.iter())
                            .map(|(a, b)| a + (b - a) * t)
                            .collect::<Vec<_>>()))
        },
        (a, b) => {
            let a = a.as_number(position)?;
            let b = b.as_number(position)?;
            Ok(Value::Number(a + (b - a) * t))
        },
    }
}

/// Builds a vector.
///
/// Either from its numeric components, `vec(1, 2, 3)`, or from a single
/// string of space separated numbers as map files write origins and angles,
/// `vec('0 90 0')`.
///
/// # Errors
/// `InvalidArgument` if the string contains something that is not a number.
///
/// # Example
/// ```
/// use mapscript::{Context, evaluate};
///
/// let ctx = Context::with_builtins();
/// assert_eq!(evaluate("vec('0 90 0')[1]", &ctx).unwrap().to_string(), "90");
/// assert_eq!(evaluate("vec(1, 2).count", &ctx).unwrap().to_string(), "2");
/// ```
pub fn vec(args: &[Value], position: Position) -> EvalResult<Value> {
    if let [Value::String(text)] = args {
        let components = text.split_whitespace()
                             .map(|word| parse_number(word, position))
                             .collect::<EvalResult<Vec<f64>>>()?;
        return Ok(Value::from(components));
    }

    let components = args.iter()
                         .map(|arg| arg.as_number(position))
                         .collect::<EvalResult<Vec<f64>>>()?;
    Ok(Value::from(components))
}

/// Number of components of a vector, or of characters of a string.
pub fn len(args: &[Value], position: Position) -> EvalResult<Value> {
    let length = match &args[0] {
        Value::Vector(v) => v.len(),
        Value::String(s) => s.chars().count(),
        other => {
            return Err(EvalError::TypeError { details: format!("len: expected a vector or a string, found {}",
                                                               other.type_name()),
                                              position });
        },
    };

    Ok(Value::Number(usize_to_f64_checked(length, position)?))
}

/// Converts any value to its display text.
///
/// # Example
/// ```
/// use mapscript::{Context, evaluate};
///
/// let ctx = Context::with_builtins();
/// assert_eq!(evaluate("str([1, 2.5]) == '1 2.5'", &ctx).unwrap().to_string(), "1");
/// ```
pub fn str_fn(args: &[Value], _position: Position) -> EvalResult<Value> {
    Ok(Value::String(args[0].to_string()))
}

/// Converts a string to a number. Numbers pass through unchanged.
///
/// # Errors
/// `InvalidArgument` if the text is not a number.
pub fn num_fn(args: &[Value], position: Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::String(text) => Ok(Value::Number(parse_number(text.trim(), position)?)),
        other => Err(EvalError::ExpectedNumber { found: other.type_name(),
                                                 position }),
    }
}

/// Asserts that the argument is true, i.e. not `none`.
///
/// If the value is `none`, an `AssertionFailed` error is returned.
/// Otherwise the function returns the value unchanged.
///
/// # Example
/// ```
/// use mapscript::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::assert_fn, value::core::Value},
/// };
///
/// let r = assert_fn(&[Value::Number(0.0)], Position::start()).unwrap();
/// assert_eq!(r, Value::Number(0.0));
///
/// assert!(assert_fn(&[Value::None], Position::start()).is_err());
/// ```
pub fn assert_fn(args: &[Value], position: Position) -> EvalResult<Value> {
    if !args[0].is_true() {
        return Err(EvalError::AssertionFailed { position });
    }
    Ok(args[0].clone())
}

fn parse_number(text: &str, position: Position) -> EvalResult<f64> {
    text.parse().map_err(|_| EvalError::InvalidArgument { details: format!("'{text}' is not a number"),
                                                          position })
}
