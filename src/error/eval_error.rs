use crate::ast::Position;

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the position of the expression node that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// A `.member` that the target's type does not expose.
    #[error("Error at {position}: Type '{type_name}' has no member '{member}'.")]
    UnknownMember {
        /// Name of the target's type descriptor.
        type_name: String,
        /// The requested member.
        member:    String,
        /// The source position where the error occurred.
        position:  Position,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at {position}: {details}")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A number was expected, but not found.
    #[error("Error at {position}: Expected a number, found {found}.")]
    ExpectedNumber {
        /// Type name of the value that was found.
        found:    &'static str,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A vector was expected, but not found.
    #[error("Error at {position}: Expected a vector, found {found}.")]
    ExpectedVector {
        /// Type name of the value that was found.
        found:    &'static str,
        /// The source position where the error occurred.
        position: Position,
    },
    /// An index that is negative, fractional or not finite.
    #[error("Error at {position}: Invalid index {index}, expected a whole non-negative number.")]
    InvalidIndex {
        /// The offending index.
        index:    f64,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Tried to access a vector component outside its bounds.
    #[error("Error at {position}: Index {index} is out of bounds for a vector of length {length}.")]
    IndexOutOfBounds {
        /// The index that was requested.
        index:    usize,
        /// Number of components in the vector.
        length:   usize,
        /// The source position where the error occurred.
        position: Position,
    },
    /// The callee of a call is not a function.
    #[error("Error at {position}: A value of type '{found}' cannot be called.")]
    NotCallable {
        /// Type name of the callee value.
        found:    &'static str,
        /// The source position where the error occurred.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at {position}: '{name}' expects {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// Name of the function or method.
        name:     String,
        /// Description of the accepted argument counts.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// The source position where the error occurred.
        position: Position,
    },
    /// An argument was invalid or out of range.
    #[error("Error at {position}: {details}")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// An `assert` call received `none`.
    #[error("Error at {position}: Assertion failed.")]
    AssertionFailed {
        /// The source position where the error occurred.
        position: Position,
    },
}

impl EvalError {
    /// The source position the error was reported at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownMember { position, .. }
            | Self::TypeError { position, .. }
            | Self::ExpectedNumber { position, .. }
            | Self::ExpectedVector { position, .. }
            | Self::InvalidIndex { position, .. }
            | Self::IndexOutOfBounds { position, .. }
            | Self::NotCallable { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::InvalidArgument { position, .. }
            | Self::AssertionFailed { position } => *position,
        }
    }
}
