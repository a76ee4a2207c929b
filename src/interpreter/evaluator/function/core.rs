use crate::{
    ast::{Expr, Position},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, clamp, min_max},
        },
        value::{
            core::Value,
            function::{Arity, Function},
        },
    },
};

type BuiltinFn = fn(&[Value], Position) -> EvalResult<Value>;

/// Declares the host library: a static table of native functions plus the
/// list of their names.
///
/// Each entry maps a name to its accepted argument counts and the Rust
/// function implementing it. Arity is checked before the function runs, so
/// implementations may index their arguments directly.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every function [`register_builtins`] binds.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => { arity: Arity::Exact(1), func: builtin::abs },
    "floor"   => { arity: Arity::Exact(1), func: builtin::floor },
    "ceil"    => { arity: Arity::Exact(1), func: builtin::ceil },
    "round"   => { arity: Arity::Exact(1), func: builtin::round },
    "trunc"   => { arity: Arity::Exact(1), func: builtin::trunc },
    "sqrt"    => { arity: Arity::Exact(1), func: builtin::sqrt },
    "sin"     => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"     => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"     => { arity: Arity::Exact(1), func: builtin::tan },
    "radians" => { arity: Arity::Exact(1), func: builtin::radians },
    "degrees" => { arity: Arity::Exact(1), func: builtin::degrees },
    "sign"    => { arity: Arity::Exact(1), func: builtin::sign },
    "atan2"   => { arity: Arity::Exact(2), func: builtin::atan2 },
    "lerp"    => { arity: Arity::Exact(3), func: builtin::lerp },
    "min"     => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("min", args, position) },
    "max"     => { arity: Arity::AtLeast(1), func: |args, position| min_max::min_max("max", args, position) },
    "clamp"   => { arity: Arity::Exact(3), func: clamp::clamp },
    "vec"     => { arity: Arity::AtLeast(1), func: builtin::vec },
    "len"     => { arity: Arity::Exact(1), func: builtin::len },
    "str"     => { arity: Arity::Exact(1), func: builtin::str_fn },
    "num"     => { arity: Arity::Exact(1), func: builtin::num_fn },
    "assert"  => { arity: Arity::Exact(1), func: builtin::assert_fn },
}

/// Binds every host library function into `context` under its name.
///
/// Existing bindings with the same names are replaced.
///
/// # Example
/// ```
/// use mapscript::{Context, builtins, evaluate};
///
/// let mut ctx = Context::new();
/// builtins::register(&mut ctx);
///
/// assert_eq!(evaluate("clamp(12, 0, 10)", &ctx).unwrap().to_string(), "10");
/// assert!(builtins::BUILTIN_FUNCTIONS.contains(&"lerp"));
/// ```
pub fn register_builtins(context: &mut Context) {
    for def in BUILTIN_TABLE {
        context.bind(def.name, Function::native(def.name, def.arity, def.func));
    }
}

impl Context {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must be a function: a native host
    /// function or a method bound by member access. The arguments are then
    /// evaluated left to right and the function is invoked, which checks
    /// their count against its arity.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `position`: Position of the call, for error reporting.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - Any error raised by an argument or by the function itself.
    pub fn eval_function_call(&self, callee: &Expr, arguments: &[Expr], position: Position) -> EvalResult<Value> {
        let function = match self.eval(callee)? {
            Value::Function(function) => function,
            other => {
                return Err(EvalError::NotCallable { found: other.type_name(),
                                                    position });
            },
        };

        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        function.call(&args, position)
    }
}
