use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            binary::token_to_binary_operator,
            core::Parser,
            stack::{StackItem, reduce},
            utils::postfix_follows,
        },
    },
};

impl Parser<'_> {
    /// Reduces `cond ? then : else` and `then if cond else else` to the same
    /// node.
    ///
    /// The else branch extends as far to the right as it can: the reduction
    /// waits while the next token is any infix operator, a postfix opener,
    /// or the start of another conditional, so `a ? b : c ? d : e` nests as
    /// `a ? b : (c ? d : e)`.
    pub(super) fn reduce_conditional(&mut self) -> bool {
        let lookahead = self.lookahead();
        if postfix_follows(lookahead)
           || lookahead.is_some_and(|token| {
                          matches!(token, Token::Question | Token::If) || token_to_binary_operator(token).is_some()
                      })
        {
            return false;
        }

        reduce!(self, "conditional", 5,
                [StackItem::Expr(condition),
                 StackItem::Token(Token::Question, position),
                 StackItem::Expr(then_branch),
                 StackItem::Token(Token::Colon, _),
                 StackItem::Expr(else_branch)]
                | [StackItem::Expr(then_branch),
                   StackItem::Token(Token::If, position),
                   StackItem::Expr(condition),
                   StackItem::Token(Token::Else, _),
                   StackItem::Expr(else_branch)] => {
                    StackItem::Expr(Expr::Conditional { condition: Box::new(condition),
                                                        then_branch: Box::new(then_branch),
                                                        else_branch: Box::new(else_branch),
                                                        position })
                })
    }
}
