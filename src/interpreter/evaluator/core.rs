use std::{collections::HashMap, fmt};

use crate::{
    ast::{Assignment, Expr},
    error::EvalError,
    interpreter::{
        evaluator::function::core::register_builtins,
        types::core::TypeRegistry,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the bindings visible during evaluation.
///
/// A `Context` maps names to values and points at the [`TypeRegistry`] used
/// to resolve `.member` syntax. The host fills it before evaluating, and may
/// reuse it across a sequence of expressions so that later ones see what
/// earlier ones bound.
///
/// Evaluation only reads the context. It is `Send + Sync`, so separate
/// threads can each evaluate against their own context, or share one that
/// is no longer being mutated.
///
/// ## Usage
///
/// ```
/// use mapscript::{Context, evaluate};
///
/// let mut ctx = Context::new();
/// ctx.bind("index", 3.0);
///
/// assert_eq!(evaluate("index * 64", &ctx).unwrap().to_string(), "192");
/// assert!(evaluate("missing", &ctx).unwrap().is_none());
/// ```
#[derive(Clone)]
pub struct Context {
    variables: HashMap<String, Value>,
    registry:  &'static TypeRegistry,
}

impl Context {
    /// Creates an empty context that resolves members through
    /// [`TypeRegistry::global`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::global())
    }

    /// Creates an empty context that resolves members through `registry`.
    #[must_use]
    pub fn with_registry(registry: &'static TypeRegistry) -> Self {
        Self { variables: HashMap::new(),
               registry }
    }

    /// Creates a context with the host library of native functions
    /// (`min`, `max`, `sqrt`, ...) already bound.
    ///
    /// # Example
    /// ```
    /// use mapscript::{Context, evaluate};
    ///
    /// let ctx = Context::with_builtins();
    /// assert_eq!(evaluate("max(1, 5, 3)", &ctx).unwrap().to_string(), "5");
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut context = Self::new();
        register_builtins(&mut context);
        context
    }

    /// The registry `.member` syntax is resolved against.
    #[must_use]
    pub const fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Looks up a binding. Evaluation treats a missing name as `none`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Removes a binding, returning its value.
    pub fn unbind(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluating an already parsed tree;
    /// the same tree can be evaluated against any number of contexts.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// The first [`EvalError`] raised anywhere in the tree. Evaluation never
    /// substitutes a default for a failed subexpression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::VectorLiteral { elements, .. } => self.eval_vector_literal(elements),
            Expr::Variable { name, .. } => Ok(self.resolve(name).cloned().unwrap_or(Value::None)),
            Expr::MemberAccess { object,
                                 member,
                                 position, } => self.eval_member_access(object, member, *position),
            Expr::Index { object,
                          index,
                          position, } => self.eval_index(object, index, *position),
            Expr::FunctionCall { callee,
                                 arguments,
                                 position, } => self.eval_function_call(callee, arguments, *position),
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                if self.eval(condition)?.is_true() {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
        }
    }

    /// Evaluates each assignment in order and binds its result, so later
    /// entries can use names bound by earlier ones.
    ///
    /// # Errors
    /// Stops at the first failing entry. Bindings made before it stay in
    /// place.
    ///
    /// # Example
    /// ```
    /// use mapscript::{Context, parse_assignments};
    ///
    /// let batch = parse_assignments("a = 2; b = a * 3;").unwrap();
    /// let mut ctx = Context::new();
    /// ctx.apply_assignments(&batch).unwrap();
    ///
    /// assert_eq!(ctx.resolve("b").unwrap().to_string(), "6");
    /// ```
    pub fn apply_assignments(&mut self, assignments: &[Assignment]) -> EvalResult<()> {
        for assignment in assignments {
            let value = self.eval(&assignment.value)?;
            tracing::debug!(name = %assignment.name, %value, "bind");
            self.bind(assignment.name.clone(), value);
        }

        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
         .field("variables", &self.variables)
         .finish_non_exhaustive()
    }
}
