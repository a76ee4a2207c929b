use crate::{
    ast::{Assignment, Expr, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            stack::{StackItem, reduce},
        },
    },
};

impl Parser<'_> {
    /// `name '=' expr ';'` becomes a one-entry batch.
    pub(super) fn reduce_assignment(&mut self) -> bool {
        if !self.top_is_token(&Token::Semicolon) {
            return false;
        }

        reduce!(self, "assignment", 4,
                [StackItem::Expr(Expr::Variable { name, position }),
                 StackItem::Token(Token::Assign, _),
                 StackItem::Expr(value),
                 StackItem::Token(Token::Semicolon, _)] => {
                    StackItem::Assignments(vec![Assignment { name,
                                                             value,
                                                             position }])
                })
    }

    /// Joins two adjacent batches, keeping source order.
    pub(super) fn merge_assignments(&mut self) -> bool {
        if !matches!(self.stack.last(), Some(StackItem::Assignments(_))) {
            return false;
        }

        reduce!(self, "assignments", 2,
                [StackItem::Assignments(first), StackItem::Assignments(second)] => {
                    let mut first = first;
                    first.extend(second);
                    StackItem::Assignments(first)
                })
    }

    /// A `=` must directly follow a plain name at the start of an entry.
    pub(super) fn check_assignment_target(&self, token: &Token, position: Position) -> ParseResult<()> {
        match self.stack.as_slice() {
            [StackItem::Expr(Expr::Variable { .. })]
            | [.., StackItem::Assignments(_), StackItem::Expr(Expr::Variable { .. })] => Ok(()),
            [StackItem::Expr(_)] | [.., StackItem::Assignments(_), StackItem::Expr(_)] => {
                Err(ParseError::InvalidAssignmentTarget { position })
            },
            _ => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                   details: "an assignment can only start with a name",
                                                   position }),
        }
    }

    /// Whether a `;` would complete a `name = expression` entry.
    pub(super) fn has_pending_assignment(&self) -> bool {
        matches!(self.stack.as_slice(),
                 [.., StackItem::Token(Token::Assign, _), StackItem::Expr(_)])
    }
}
