use crate::ast::Position;

/// Represents all errors that can occur while tokenizing source text.
///
/// Lexing stops at the first of these; there is no resynchronization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `'` opened a string that never closes.
    #[error("Error at {position}: Unterminated string literal.")]
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
    /// `=`, `&` or `|` appeared without its doubling character.
    #[error("Error at {position}: Incomplete operator '{found}', expected '{expected}'.")]
    IncompleteOperator {
        /// The lone character that was found.
        found:    char,
        /// The two-character operator it must be part of.
        expected: &'static str,
        /// Position of the lone character.
        position: Position,
    },
    /// A character that starts no token.
    #[error("Error at {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Position of the character.
        position:  Position,
    },
}

impl LexError {
    /// The source position the error was reported at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnterminatedString { position }
            | Self::IncompleteOperator { position, .. }
            | Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}
