use crate::{
    ast::{Expr, LiteralValue, Position, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::token_to_binary_operator,
            core::{ParseMode, ParseResult, Parser},
            stack::StackItem,
        },
    },
};

impl Parser<'_> {
    /// Moves the next token onto the stack.
    ///
    /// Literals become expressions right away, `!` and a `-` with no left
    /// operand become prefix operators, and infix operator tokens become
    /// [`StackItem::Binary`]. Everything else is kept as a raw token for the
    /// reductions to consume.
    ///
    /// # Errors
    /// `UnexpectedToken` if the token cannot follow the current top of the
    /// stack.
    pub(super) fn shift(&mut self) -> ParseResult<()> {
        let tokens = self.tokens;
        let Some((token, position)) = tokens.get(self.cursor) else {
            return Ok(());
        };
        let position = *position;
        self.cursor += 1;

        tracing::trace!(%token, %position, "shift");
        self.check_shift(token, position)?;

        let item = match token {
            Token::Number(n) => literal(LiteralValue::Number(*n), position),
            Token::String(s) => literal(LiteralValue::String(s.clone()), position),
            Token::None => literal(LiteralValue::None, position),
            Token::Bang => StackItem::Unary(UnaryOperator::LogicalNegate, position),
            Token::Minus if !self.top_is_expr() => StackItem::Unary(UnaryOperator::Negate, position),
            _ => match token_to_binary_operator(token) {
                Some(op) => StackItem::Binary(op, position),
                None => StackItem::Token(token.clone(), position),
            },
        };

        self.stack.push(item);
        Ok(())
    }

    /// Rejects a token that no reduction could ever consume at this point.
    fn check_shift(&self, token: &Token, position: Position) -> ParseResult<()> {
        let unexpected = |details: &'static str| {
            Err(ParseError::UnexpectedToken { token: token.to_string(),
                                              details,
                                              position })
        };

        if self.top_is_token(&Token::Dot) && !matches!(token, Token::Identifier(_)) {
            return unexpected("expected a member name after '.'");
        }

        if starts_operand(token) && self.top_is_expr() {
            return unexpected("expected an operator between two operands");
        }

        if needs_left_operand(token) && !self.top_is_expr() {
            return unexpected("expected an expression before it");
        }

        match token {
            Token::Comma if !self.top_is_expr() && !matches!(self.stack.last(), Some(StackItem::List(..))) => {
                unexpected("expected an expression before it")
            },
            Token::RParen | Token::RBracket if !self.can_close() => unexpected("expected an expression before it"),
            Token::Colon if !self.has_pending(&Token::Question, &Token::Colon) => {
                unexpected("there is no '?' for it to complete")
            },
            Token::Else if !self.has_pending(&Token::If, &Token::Else) => {
                unexpected("there is no 'if' for it to complete")
            },
            Token::Assign | Token::Semicolon if self.mode == ParseMode::Expression => {
                unexpected("assignments are only allowed in an assignment batch")
            },
            Token::Assign => self.check_assignment_target(token, position),
            Token::Semicolon if !self.has_pending_assignment() => {
                unexpected("expected 'name = expression' before it")
            },
            _ => Ok(()),
        }
    }

    fn can_close(&self) -> bool {
        match self.stack.last() {
            Some(StackItem::Expr(_) | StackItem::List(..)) => true,
            Some(StackItem::Token(Token::LParen | Token::LBracket, _)) => true,
            _ => false,
        }
    }

    /// Whether `opener` is still waiting for its `closer`, looking down the
    /// stack no further than the innermost open bracket.
    fn has_pending(&self, opener: &Token, closer: &Token) -> bool {
        let mut depth = 0_usize;

        for item in self.stack.iter().rev() {
            let StackItem::Token(token, _) = item else {
                continue;
            };

            if token == closer {
                depth += 1;
            } else if token == opener {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
            } else if matches!(token, Token::LParen | Token::LBracket) {
                return false;
            }
        }

        false
    }
}

fn literal(value: LiteralValue, position: Position) -> StackItem {
    StackItem::Expr(Expr::Literal { value, position })
}

/// Tokens that begin an operand and therefore cannot directly follow one.
const fn starts_operand(token: &Token) -> bool {
    matches!(token,
             Token::Number(_) | Token::String(_) | Token::None | Token::Identifier(_) | Token::Bang)
}

/// Tokens that are meaningless without an expression to their left. `-` is
/// not among them, since with nothing on its left it is a negation.
fn needs_left_operand(token: &Token) -> bool {
    matches!(token,
             Token::Question
             | Token::Colon
             | Token::If
             | Token::Else
             | Token::Dot
             | Token::Assign
             | Token::Semicolon)
    || (token_to_binary_operator(token).is_some() && *token != Token::Minus)
}
