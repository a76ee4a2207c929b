/// Lexing errors.
///
/// Defines the failures of the tokenizer: unterminated strings, incomplete
/// two-character operators and characters the language does not know.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types raised while reducing a token stream into an
/// expression tree or an assignment batch.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking an expression
/// tree: unknown members, type mismatches, bad indices and call failures.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

use crate::ast::Position;

/// Any failure of the one-shot entry points such as [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not reduce to an expression or assignment batch.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a parsed expression failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// The source position the failure was reported at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}
