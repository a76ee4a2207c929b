use crate::{
    ast::{Assignment, Expr, Position},
    error::ParseError,
    interpreter::{lexer::Token, parser::stack::StackItem},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// What the token stream has to collapse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParseMode {
    /// Exactly one expression.
    Expression,
    /// One or more `name = expression;` entries.
    Assignments,
}

/// Shift/reduce parser state: a cursor over the tokens and the stack of
/// partially reduced items.
pub(super) struct Parser<'a> {
    pub(super) tokens: &'a [(Token, Position)],
    pub(super) cursor: usize,
    pub(super) stack:  Vec<StackItem>,
    pub(super) mode:   ParseMode,
}

/// Parses a single expression.
///
/// Tokens are shifted onto a stack one at a time. After each shift the
/// parser applies reductions until none matches, looking at the next
/// unconsumed token to decide whether an operator reduction has to wait for
/// a tighter-binding operator to its right.
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// - `UnexpectedToken` as soon as a token appears where it can never be
///   reduced.
/// - `InvalidExpression` if the input ends without collapsing to exactly one
///   expression (empty input, unclosed brackets, dangling operators).
///
/// # Example
/// ```
/// use mapscript::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         lexer::{LexMode, tokenize},
///         parser::core::parse_expression,
///     },
/// };
///
/// let tokens = tokenize("1 + 2 * 3", LexMode::Expression).unwrap();
/// let Expr::BinaryOp { op, right, .. } = parse_expression(&tokens).unwrap() else {
///     panic!("expected a binary operation");
/// };
///
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Multiply, .. }));
/// ```
pub fn parse_expression(tokens: &[(Token, Position)]) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens, ParseMode::Expression);
    parser.run()?;

    if let [StackItem::Expr(_)] = parser.stack.as_slice()
       && let Some(StackItem::Expr(expr)) = parser.stack.pop()
    {
        return Ok(expr);
    }

    Err(ParseError::InvalidExpression { position: parser.leftover_position() })
}

/// Parses a batch of assignments such as `a = 2; b = a * 3;`.
///
/// Every entry must be terminated by `;`. The entries are returned in source
/// order; applying them left to right lets later entries see the names bound
/// by earlier ones.
///
/// # Errors
/// - `UnexpectedToken` for misplaced tokens, including a `=` with no name in
///   front of it.
/// - `InvalidAssignmentTarget` if something other than a plain name is
///   assigned to.
/// - `InvalidAssignments` if the input does not collapse to a sequence of
///   complete assignments. An empty batch is rejected as well.
///
/// # Example
/// ```
/// use mapscript::interpreter::{
///     lexer::{LexMode, tokenize},
///     parser::core::parse_assignments,
/// };
///
/// let tokens = tokenize("a = 2; b = a * 3;", LexMode::Assignments).unwrap();
/// let batch = parse_assignments(&tokens).unwrap();
///
/// let names: Vec<_> = batch.iter().map(|a| a.name.as_str()).collect();
/// assert_eq!(names, ["a", "b"]);
/// ```
pub fn parse_assignments(tokens: &[(Token, Position)]) -> ParseResult<Vec<Assignment>> {
    let mut parser = Parser::new(tokens, ParseMode::Assignments);
    parser.run()?;

    if let [StackItem::Assignments(_)] = parser.stack.as_slice()
       && let Some(StackItem::Assignments(batch)) = parser.stack.pop()
    {
        return Ok(batch);
    }

    Err(ParseError::InvalidAssignments { position: parser.leftover_position() })
}

impl<'a> Parser<'a> {
    pub(super) const fn new(tokens: &'a [(Token, Position)], mode: ParseMode) -> Self {
        Self { tokens,
               cursor: 0,
               stack: Vec::new(),
               mode }
    }

    /// Shifts every token, reducing as far as possible after each one.
    fn run(&mut self) -> ParseResult<()> {
        while self.cursor < self.tokens.len() {
            self.shift()?;
            while self.reduce_once() {}
            self.check_closed()?;
        }

        Ok(())
    }

    /// Applies the first reduction that matches the top of the stack.
    fn reduce_once(&mut self) -> bool {
        self.reduce_identifier()
        || self.reduce_parenthesis()
        || self.reduce_bracket()
        || self.reduce_unary()
        || self.reduce_binary()
        || self.reduce_conditional()
        || self.reduce_list()
        || (self.mode == ParseMode::Assignments && (self.reduce_assignment() || self.merge_assignments()))
    }

    /// The next token that has not been shifted yet.
    pub(super) fn lookahead(&self) -> Option<&'a Token> {
        let tokens = self.tokens;
        tokens.get(self.cursor).map(|(token, _)| token)
    }

    /// A closing bracket that survived reduction closes nothing.
    fn check_closed(&self) -> ParseResult<()> {
        match self.stack.last() {
            Some(StackItem::Token(token @ (Token::RParen | Token::RBracket), position)) => {
                Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                  details:  "it does not close a group, call, index or vector",
                                                  position: *position, })
            },
            _ => Ok(()),
        }
    }

    /// Where to report a stack that failed to collapse: the first item that
    /// is not a finished expression, else the last token, else the start of
    /// the input.
    fn leftover_position(&self) -> Position {
        self.stack
            .iter()
            .filter(|item| !item.is_expr())
            .find_map(StackItem::position)
            .or_else(|| self.tokens.last().map(|(_, position)| *position))
            .unwrap_or_default()
    }
}
