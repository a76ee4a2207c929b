use crate::interpreter::{
    lexer::Token,
    parser::{
        core::Parser,
        stack::{StackItem, reduce},
    },
};

/// Whether the next token starts a member access, call or index, all of
/// which bind tighter than any operator.
pub(super) const fn postfix_follows(lookahead: Option<&Token>) -> bool {
    matches!(lookahead, Some(Token::Dot | Token::LParen | Token::LBracket))
}

impl Parser<'_> {
    /// Accumulates comma separated expressions into a list.
    ///
    /// The same list serves call arguments and vector elements; the bracket
    /// that closes it decides which. The trailing element is only taken
    /// once it is complete, i.e. the next token is `,`, `)` or `]`.
    pub(super) fn reduce_list(&mut self) -> bool {
        if !matches!(self.lookahead(), Some(Token::Comma | Token::RParen | Token::RBracket)) {
            return false;
        }

        reduce!(self, "list", 3,
                [StackItem::Expr(first), StackItem::Token(Token::Comma, _), StackItem::Expr(next)] => {
                    let position = first.position();
                    StackItem::List(vec![first, next], position)
                },
                [StackItem::List(elements, position), StackItem::Token(Token::Comma, _), StackItem::Expr(next)] => {
                    let mut elements = elements;
                    elements.push(next);
                    StackItem::List(elements, position)
                })
    }
}
