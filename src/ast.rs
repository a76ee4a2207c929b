use std::fmt;

/// A location in the source text.
///
/// `line` starts at 1, `offset` is the 0-based character offset within that
/// line. Tokens, AST nodes and errors all carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line:   usize,
    /// 0-based character offset within the line.
    pub offset: usize,
}

impl Position {
    /// Creates a position from a line and an in-line offset.
    #[must_use]
    pub const fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }

    /// The position of the first character of any source text.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 1, offset: 0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, offset {}", self.line, self.offset)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, quoted strings and the `none` keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double precision number literal such as `42` or `0.5`.
    Number(f64),
    /// A single-quoted string literal, stored without its quotes.
    String(String),
    /// The `none` keyword.
    None,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Only the forms the parser can actually produce exist here. Every variant
/// carries the [`Position`] of the token that introduced it, which is what
/// evaluation errors report.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or `none`).
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Source position of the literal.
        position: Position,
    },
    /// A vector literal such as `[1, 2, 3]`.
    ///
    /// The number of components is only known once the elements are
    /// evaluated.
    VectorLiteral {
        /// Component expressions, in order.
        elements: Vec<Self>,
        /// Position of the opening `[`.
        position: Position,
    },
    /// Reference to a context binding by name.
    Variable {
        /// Name of the binding.
        name:     String,
        /// Source position of the identifier.
        position: Position,
    },
    /// Member access (`object.member`), either a property or a method.
    MemberAccess {
        /// The expression whose member is accessed.
        object:   Box<Self>,
        /// Name of the member.
        member:   String,
        /// Position of the `.`.
        position: Position,
    },
    /// Vector indexing expression (e.g. `origin[2]`).
    Index {
        /// The vector to index into.
        object:   Box<Self>,
        /// The 0-based index.
        index:    Box<Self>,
        /// Position of the `[`.
        position: Position,
    },
    /// Function call expression (e.g. `max(a, b)` or `name.upper()`).
    FunctionCall {
        /// The expression that evaluates to the function being called.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// Position of the `(`.
        position:  Position,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary operation (addition, comparison, logic, ...).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// Conditional expression, written either `c ? a : b` or `a if c else b`.
    Conditional {
        /// The condition; only `none` is false.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Position of the `?` or `if`.
        position:    Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use mapscript::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 2), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::VectorLiteral { position, .. }
            | Self::Variable { position, .. }
            | Self::MemberAccess { position, .. }
            | Self::Index { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Conditional { position, .. } => *position,
        }
    }
}

/// A single `name = expression;` entry of an assignment batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The name that receives the value.
    pub name:     String,
    /// The expression to evaluate.
    pub value:    Expr,
    /// Position of the assigned name.
    pub position: Position,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `!x`
    LogicalNegate,
    /// Bitwise complement of a whole number. No source syntax produces it;
    /// hosts may build it directly.
    BitwiseComplement,
}

/// Binary operators, from arithmetic to short-circuit logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `and` / `&&`
    LogicalAnd,
    /// `or` / `||`
    LogicalOr,
}

impl BinaryOperator {
    /// Binding strength of the operator; higher binds tighter.
    ///
    /// ```
    /// use mapscript::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Multiply.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::LogicalAnd.precedence() > BinaryOperator::LogicalOr.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::LogicalOr => 1,
            Self::LogicalAnd => 2,
            Self::Equals | Self::NotEquals => 3,
            Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual => 4,
            Self::Add | Self::Subtract => 5,
            Self::Multiply | Self::Divide | Self::Remainder => 6,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Negate => "-",
            Self::LogicalNegate => "!",
            Self::BitwiseComplement => "~",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::LogicalAnd => "and",
            Self::LogicalOr => "or",
        };
        write!(f, "{symbol}")
    }
}
