/// Call evaluation and the host library table.
///
/// Evaluates call expressions and binds the native host functions into a
/// context on request.
pub mod core;

/// Built-in function implementations.
///
/// Rounding, trigonometry, conversions and assertions exposed by the host
/// library.
pub mod builtin;

/// The `clamp` function implementation.
///
/// Restricts a value to a specified inclusive range.
pub mod clamp;

/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
