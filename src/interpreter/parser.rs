/// Parser entry points and the shift/reduce driver.
///
/// Holds the parser state, the main loop and the final collapse check for
/// both single expressions and assignment batches.
pub mod core;

/// The parse stack.
///
/// Defines the items the parser stacks up and the generic "match the top of
/// the stack and replace it" primitive every reduction is built on.
mod stack;

/// Shifting tokens onto the stack.
///
/// Converts each token into a stack item and rejects tokens that can never
/// be reduced where they appear.
mod shift;

/// Postfix reductions.
///
/// Variables, member access, calls, grouping parentheses, indexing and
/// vector literals.
mod postfix;

/// Unary operator reduction.
mod unary;

/// Binary operator reduction.
///
/// Defers a reduction while the next token is an operator that binds
/// tighter, which is what gives the operators their precedence.
mod binary;

/// Conditional reduction for both `c ? a : b` and `a if c else b`.
mod conditional;

/// Assignment batches (`name = expression;`).
mod assignment;

/// Argument lists and other shared helpers.
mod utils;
