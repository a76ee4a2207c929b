use crate::{
    ast::{Expr, Position},
    interpreter::{
        lexer::Token,
        parser::{
            core::Parser,
            stack::{StackItem, reduce},
        },
    },
};

impl Parser<'_> {
    /// `expr '.' identifier` becomes a member access, any other identifier a
    /// variable.
    pub(super) fn reduce_identifier(&mut self) -> bool {
        if !matches!(self.stack.last(), Some(StackItem::Token(Token::Identifier(_), _))) {
            return false;
        }

        reduce!(self, "member", 3,
                [StackItem::Expr(object),
                 StackItem::Token(Token::Dot, position),
                 StackItem::Token(Token::Identifier(member), _)] => {
                    StackItem::Expr(Expr::MemberAccess { object: Box::new(object),
                                                         member,
                                                         position })
                })
        || reduce!(self, "variable", 1,
                   [StackItem::Token(Token::Identifier(name), position)] => {
                       StackItem::Expr(Expr::Variable { name, position })
                   })
    }

    /// Reduces a closing `)`: a call when an expression precedes the `(`,
    /// otherwise a grouping that leaves only the inner expression.
    pub(super) fn reduce_parenthesis(&mut self) -> bool {
        if !self.top_is_token(&Token::RParen) {
            return false;
        }

        reduce!(self, "call", 3,
                [StackItem::Expr(callee), StackItem::Token(Token::LParen, position), StackItem::Token(Token::RParen, _)] => {
                    call(callee, Vec::new(), position)
                })
        || reduce!(self, "call", 4,
                   [StackItem::Expr(callee),
                    StackItem::Token(Token::LParen, position),
                    StackItem::Expr(argument),
                    StackItem::Token(Token::RParen, _)] => call(callee, vec![argument], position),
                   [StackItem::Expr(callee),
                    StackItem::Token(Token::LParen, position),
                    StackItem::List(arguments, _),
                    StackItem::Token(Token::RParen, _)] => call(callee, arguments, position))
        || reduce!(self, "group", 3,
                   [StackItem::Token(Token::LParen, _), StackItem::Expr(inner), StackItem::Token(Token::RParen, _)] => {
                       StackItem::Expr(inner)
                   })
    }

    /// Reduces a closing `]`: indexing when an expression precedes the `[`,
    /// otherwise a vector literal.
    pub(super) fn reduce_bracket(&mut self) -> bool {
        if !self.top_is_token(&Token::RBracket) {
            return false;
        }

        if reduce!(self, "index", 4,
                   [StackItem::Expr(object),
                    StackItem::Token(Token::LBracket, position),
                    StackItem::Expr(index),
                    StackItem::Token(Token::RBracket, _)] => {
                       StackItem::Expr(Expr::Index { object: Box::new(object),
                                                     index: Box::new(index),
                                                     position })
                   })
        {
            return true;
        }

        // `a[]` and `a[1, 2]` are neither an index nor a vector.
        let empty = !self.is_expr_at(2);
        let filled = !self.is_expr_at(3);

        (empty
         && reduce!(self, "vector", 2,
                    [StackItem::Token(Token::LBracket, position), StackItem::Token(Token::RBracket, _)] => {
                        vector(Vec::new(), position)
                    }))
        || (filled
            && reduce!(self, "vector", 3,
                       [StackItem::Token(Token::LBracket, position),
                        StackItem::Expr(element),
                        StackItem::Token(Token::RBracket, _)] => vector(vec![element], position),
                       [StackItem::Token(Token::LBracket, position),
                        StackItem::List(elements, _),
                        StackItem::Token(Token::RBracket, _)] => vector(elements, position)))
    }
}

fn call(callee: Expr, arguments: Vec<Expr>, position: Position) -> StackItem {
    StackItem::Expr(Expr::FunctionCall { callee: Box::new(callee),
                                         arguments,
                                         position })
}

fn vector(elements: Vec<Expr>, position: Position) -> StackItem {
    StackItem::Expr(Expr::VectorLiteral { elements, position })
}
