/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the short-circuiting logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, logical not and bitwise complement.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the expression dispatch and batch
/// assignment.
pub mod core;

/// Member access, indexing and vector construction.
///
/// Resolves `.member` through the type registry and reads vector
/// components.
pub mod access;

/// Function evaluation.
///
/// Handles calls of native and bound-method values, and the optional host
/// library of native functions.
pub mod function;
