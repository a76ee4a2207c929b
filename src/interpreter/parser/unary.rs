use crate::{
    ast::Expr,
    interpreter::parser::{
        core::Parser,
        stack::{StackItem, reduce},
        utils::postfix_follows,
    },
};

impl Parser<'_> {
    /// Reduces a prefix operator as soon as its operand is complete.
    ///
    /// Only a postfix opener holds it back, so `-v[0]` negates the component
    /// and not the vector, while `-a * b` is `(-a) * b`.
    pub(super) fn reduce_unary(&mut self) -> bool {
        if postfix_follows(self.lookahead()) {
            return false;
        }

        reduce!(self, "unary", 2,
                [StackItem::Unary(op, position), StackItem::Expr(expr)] => {
                    StackItem::Expr(Expr::UnaryOp { op,
                                                    expr: Box::new(expr),
                                                    position })
                })
    }
}
