use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::Parser,
            stack::{StackItem, reduce},
            utils::postfix_follows,
        },
    },
};

/// Maps a token to the infix operator it spells, if any.
///
/// `and`/`&&` and `or`/`||` are synonyms. `-` always maps to subtraction;
/// the shift step decides whether it is used as negation instead.
///
/// # Parameters
/// - `token`: The token to map.
///
/// # Returns
/// The operator, or `None` if the token is not an infix operator.
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Star => Some(BinaryOperator::Multiply),
        Token::Slash => Some(BinaryOperator::Divide),
        Token::Percent => Some(BinaryOperator::Remainder),
        Token::Less => Some(BinaryOperator::LessThan),
        Token::Greater => Some(BinaryOperator::GreaterThan),
        Token::LessEqual => Some(BinaryOperator::LessThanOrEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterThanOrEqual),
        Token::EqualEqual => Some(BinaryOperator::Equals),
        Token::BangEqual => Some(BinaryOperator::NotEquals),
        Token::And | Token::DoubleAmpersand => Some(BinaryOperator::LogicalAnd),
        Token::Or | Token::DoublePipe => Some(BinaryOperator::LogicalOr),
        _ => None,
    }
}

/// Whether the operator in `lookahead` binds strictly tighter than `op`.
///
/// Equal precedence does not count, which makes every operator left
/// associative: `1 - 2 - 3` is `(1 - 2) - 3`.
fn binds_tighter(lookahead: Option<&Token>, op: BinaryOperator) -> bool {
    lookahead.and_then(token_to_binary_operator)
             .is_some_and(|next| next.precedence() > op.precedence())
}

impl Parser<'_> {
    /// Reduces `left op right`, unless the right operand may still grow: the
    /// next token is a postfix opener, or an operator that binds tighter
    /// than `op` and therefore takes `right` as its own left operand.
    pub(super) fn reduce_binary(&mut self) -> bool {
        let lookahead = self.lookahead();
        if postfix_follows(lookahead) {
            return false;
        }

        if let Some(StackItem::Binary(op, _)) = self.stack.len().checked_sub(2).map(|depth| &self.stack[depth])
           && binds_tighter(lookahead, *op)
        {
            return false;
        }

        reduce!(self, "binary", 3,
                [StackItem::Expr(left), StackItem::Binary(op, position), StackItem::Expr(right)] => {
                    StackItem::Expr(Expr::BinaryOp { left: Box::new(left),
                                                     op,
                                                     right: Box::new(right),
                                                     position })
                })
    }
}
