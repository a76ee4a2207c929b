/// Operator dispatch and the short-circuit entry point.
pub mod core;

/// `and` / `or`.
pub mod logic;

/// Equality and relational operators.
pub mod comparison;

/// Arithmetic on numbers.
pub mod scalar;
