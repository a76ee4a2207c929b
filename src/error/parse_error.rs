use crate::ast::Position;

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token appeared where no reduction can use it.
    #[error("Error at {position}: Unexpected token {token}: {details}.")]
    UnexpectedToken {
        /// The token encountered, as written in the source.
        token:    String,
        /// What the parser expected instead.
        details:  &'static str,
        /// Position of the token.
        position: Position,
    },
    /// The input did not collapse to exactly one expression.
    #[error("Error at {position}: Invalid expression.")]
    InvalidExpression {
        /// Position of the first token left unreduced, or of the end of input.
        position: Position,
    },
    /// The input did not collapse to one sequence of assignments.
    #[error("Error at {position}: Invalid assignments sequence.")]
    InvalidAssignments {
        /// Position of the first token left unreduced, or of the end of input.
        position: Position,
    },
    /// The left-hand side of `=` is not a plain name.
    #[error("Error at {position}: Only a variable name can be assigned to.")]
    InvalidAssignmentTarget {
        /// Position of the `=`.
        position: Position,
    },
}

impl ParseError {
    /// The source position the error was reported at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::InvalidExpression { position }
            | Self::InvalidAssignments { position }
            | Self::InvalidAssignmentTarget { position } => *position,
        }
    }
}
