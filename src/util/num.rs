use crate::{ast::Position, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Returns `true` if `value` is finite and has no fractional part.
#[must_use]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Converts an index value to `usize`.
///
/// ## Errors
/// Returns `EvalError::InvalidIndex` if the value is negative, fractional,
/// not finite, or larger than `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use mapscript::{ast::Position, util::num::f64_to_index_checked};
///
/// assert_eq!(f64_to_index_checked(2.0, Position::start()).unwrap(), 2);
/// assert!(f64_to_index_checked(1.5, Position::start()).is_err());
/// assert!(f64_to_index_checked(-1.0, Position::start()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn f64_to_index_checked(value: f64, position: Position) -> EvalResult<usize> {
    if !is_whole(value) || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(EvalError::InvalidIndex { index: value,
                                             position });
    }

    usize::try_from(value as u64).map_err(|_| EvalError::InvalidIndex { index: value,
                                                                          position })
}

/// Converts a whole `f64` to `i64`.
///
/// ## Errors
/// Returns `EvalError::InvalidArgument` if the value is fractional, not
/// finite, or outside `±MAX_SAFE_I64_INT`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, position: Position) -> EvalResult<i64> {
    if !is_whole(value) || value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(EvalError::InvalidArgument { details: format!("Expected a whole number, found {value}"),
                                                position });
    }

    Ok(value as i64)
}

/// Converts a whole `i64` back to `f64`.
///
/// ## Errors
/// Returns `EvalError::InvalidArgument` if the value exceeds
/// `MAX_SAFE_I64_INT` in absolute value.
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64, position: Position) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(EvalError::InvalidArgument { details: format!("{value} is too large to be represented exactly"),
                                                position });
    }

    Ok(value as f64)
}

/// Safely converts a `usize` (a length or count) to `f64`.
///
/// ## Errors
/// Returns `EvalError::InvalidArgument` if the value exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use mapscript::{ast::Position, util::num::usize_to_f64_checked};
///
/// assert_eq!(usize_to_f64_checked(3, Position::start()).unwrap(), 3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, position: Position) -> EvalResult<f64> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(EvalError::InvalidArgument { details: format!("{value} is too large to be represented exactly"),
                                              position }),
    }
}
