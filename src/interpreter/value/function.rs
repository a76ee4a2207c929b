use std::{fmt, sync::Arc};

use crate::{
    ast::Position,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, types::core::MethodDescriptor, value::core::Value},
};

/// Signature of a native host function.
///
/// A native receives a slice of evaluated argument values and the position of
/// the call, for error reporting.
pub type NativeFn = dyn Fn(&[Value], Position) -> EvalResult<Value> + Send + Sync;

/// Specifies the allowed number of arguments for a function or method.
///
/// - `Exact(n)` means exactly `n` arguments.
/// - `OneOf(slice)` means any count listed in `slice`.
/// - `AtLeast(n)` means `n` or more arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= m,
        }
    }

    /// Fails with `ArgumentCountMismatch` unless `found` arguments are
    /// allowed for the callable called `name`.
    pub fn ensure(self, name: &str, found: usize, position: Position) -> EvalResult<()> {
        if self.check(found) {
            return Ok(());
        }

        Err(EvalError::ArgumentCountMismatch { name: name.to_string(),
                                               expected: self.to_string(),
                                               found,
                                               position })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                for (index, count) in counts.iter().enumerate() {
                    if index > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{count}")?;
                }
                Ok(())
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A function implemented by the host and injected into a context.
#[derive(Clone)]
pub struct NativeFunction {
    name:  Arc<str>,
    arity: Arity,
    func:  Arc<NativeFn>,
}

impl NativeFunction {
    /// Wraps a Rust closure as a callable script value.
    pub fn new<F>(name: &str, arity: Arity, func: F) -> Self
        where F: Fn(&[Value], Position) -> EvalResult<Value> + Send + Sync + 'static
    {
        Self { name: name.into(),
               arity,
               func: Arc::new(func) }
    }

    /// Checks the argument count, then runs the function.
    pub fn call(&self, args: &[Value], position: Position) -> EvalResult<Value> {
        self.arity.ensure(&self.name, args.len(), position)?;
        (self.func)(args, position)
    }
}

/// A method descriptor paired with the receiver it was resolved against.
///
/// Produced by member access on a method name; the method only runs when the
/// bound value is itself called.
#[derive(Clone)]
pub struct BoundMethod {
    method:   Arc<MethodDescriptor>,
    receiver: Box<Value>,
}

impl BoundMethod {
    /// Binds `method` to `receiver`.
    #[must_use]
    pub fn new(method: Arc<MethodDescriptor>, receiver: Value) -> Self {
        Self { method,
               receiver: Box::new(receiver) }
    }

    /// The value the method was resolved against.
    #[must_use]
    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    /// Invokes the method on its receiver.
    pub fn call(&self, args: &[Value], position: Position) -> EvalResult<Value> {
        self.method.invoke(&self.receiver, args, position)
    }
}

/// A callable value.
#[derive(Clone)]
pub enum Function {
    /// A native function injected by the host.
    Native(NativeFunction),
    /// A method bound to its receiver.
    Bound(BoundMethod),
}

impl Function {
    /// Builds a native function value.
    ///
    /// # Example
    /// ```
    /// use mapscript::{
    ///     ast::Position,
    ///     interpreter::value::{
    ///         core::Value,
    ///         function::{Arity, Function},
    ///     },
    /// };
    ///
    /// let double = Function::native("double", Arity::Exact(1), |args, position| {
    ///     Ok(Value::Number(args[0].as_number(position)? * 2.0))
    /// });
    ///
    /// let result = double.call(&[Value::Number(4.0)], Position::start()).unwrap();
    /// assert_eq!(result, Value::Number(8.0));
    /// assert!(double.call(&[], Position::start()).is_err());
    /// ```
    pub fn native<F>(name: &str, arity: Arity, func: F) -> Self
        where F: Fn(&[Value], Position) -> EvalResult<Value> + Send + Sync + 'static
    {
        Self::Native(NativeFunction::new(name, arity, func))
    }

    /// Name of the function or method, as used in error messages.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Native(native) => &native.name,
            Self::Bound(bound) => bound.method.name(),
        }
    }

    /// Calls the function with already evaluated arguments.
    pub fn call(&self, args: &[Value], position: Position) -> EvalResult<Value> {
        match self {
            Self::Native(native) => native.call(args, position),
            Self::Bound(bound) => bound.call(args, position),
        }
    }

    /// Identity comparison used by `==`.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Arc::ptr_eq(&a.func, &b.func),
            (Self::Bound(a), Self::Bound(b)) => {
                Arc::ptr_eq(&a.method, &b.method) && a.receiver == b.receiver
            },
            _ => false,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => f.debug_struct("Native")
                                     .field("name", &native.name)
                                     .field("arity", &native.arity)
                                     .finish_non_exhaustive(),
            Self::Bound(bound) => f.debug_struct("Bound")
                                   .field("method", &bound.method.name())
                                   .field("receiver", &bound.receiver)
                                   .finish(),
        }
    }
}
