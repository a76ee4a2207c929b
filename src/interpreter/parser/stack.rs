use crate::{
    ast::{Assignment, BinaryOperator, Expr, Position, UnaryOperator},
    interpreter::{lexer::Token, parser::core::Parser},
};

/// One entry of the parse stack.
#[derive(Debug)]
pub(super) enum StackItem {
    /// A token no reduction has consumed yet: brackets, `.`, `,`, `?`, `:`,
    /// `if`, `else`, `=`, `;` and identifiers.
    Token(Token, Position),
    /// A finished expression.
    Expr(Expr),
    /// Two or more comma separated expressions, waiting for their closing
    /// bracket. Positioned at the first element.
    List(Vec<Expr>, Position),
    /// A prefix operator waiting for its operand.
    Unary(UnaryOperator, Position),
    /// An infix operator waiting for its right operand.
    Binary(BinaryOperator, Position),
    /// Complete `name = expression;` entries, in source order.
    Assignments(Vec<Assignment>),
}

impl StackItem {
    pub(super) fn position(&self) -> Option<Position> {
        match self {
            Self::Token(_, position)
            | Self::List(_, position)
            | Self::Unary(_, position)
            | Self::Binary(_, position) => Some(*position),
            Self::Expr(expr) => Some(expr.position()),
            Self::Assignments(batch) => batch.first().map(|assignment| assignment.position),
        }
    }

    pub(super) const fn is_expr(&self) -> bool {
        matches!(self, Self::Expr(_))
    }
}

/// Reduces the top of the stack with the first matching arm.
///
/// Every arm is a pattern over exactly `N` stack items. The arms are first
/// matched against the borrowed top of the stack, so a rule that does not
/// apply leaves the stack untouched; only a match moves the items out.
macro_rules! reduce {
    ($parser:expr, $rule:literal, $n:literal, $($pattern:pat => $body:expr),+ $(,)?) => {{
        #[allow(unused_variables)]
        let fits = match $parser.stack.len().checked_sub($n) {
            Some(start) => match &$parser.stack[start..] {
                $($pattern => true,)+
                _ => false,
            },
            None => false,
        };

        fits
        && $parser.try_reduce::<$n, _>($rule, |items| match items {
                     $($pattern => Ok($body),)+
                     items => Err(items),
                 })
    }};
}

pub(super) use reduce;

impl Parser<'_> {
    /// Replaces the top `N` items with the result of `reduce`.
    ///
    /// Called through [`reduce!`] once the items are known to fit the
    /// rule. Should `reduce` still hand the items back, the stack is
    /// restored.
    pub(super) fn try_reduce<const N: usize, F>(&mut self, rule: &'static str, reduce: F) -> bool
        where F: FnOnce([StackItem; N]) -> Result<StackItem, [StackItem; N]>
    {
        let Some(start) = self.stack.len().checked_sub(N) else {
            return false;
        };

        let items: [StackItem; N] = match self.stack.split_off(start).try_into() {
            Ok(items) => items,
            Err(items) => {
                self.stack.extend(items);
                return false;
            },
        };

        match reduce(items) {
            Ok(item) => {
                tracing::trace!(rule, "reduce");
                self.stack.push(item);
                true
            },
            Err(items) => {
                self.stack.extend(items);
                false
            },
        }
    }

    pub(super) fn top_is_expr(&self) -> bool {
        self.stack.last().is_some_and(StackItem::is_expr)
    }

    /// Whether the item `depth` places below the top is a finished
    /// expression. The top itself is depth 0.
    pub(super) fn is_expr_at(&self, depth: usize) -> bool {
        self.stack
            .len()
            .checked_sub(depth + 1)
            .and_then(|index| self.stack.get(index))
            .is_some_and(StackItem::is_expr)
    }

    pub(super) fn top_is_token(&self, token: &Token) -> bool {
        matches!(self.stack.last(), Some(StackItem::Token(top, _)) if top == token)
    }
}
