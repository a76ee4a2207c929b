//! # mapscript
//!
//! mapscript is the small expression language embedded in map-authoring
//! macros for Half-Life/Quake-family level editors. Map authors write it
//! wherever they would otherwise hand-type a literal: removal conditions,
//! per-instance offsets and seeds, counts and entity property strings.
//!
//! The crate contains the whole language: a lexer, a shift/reduce
//! operator-precedence parser, a dynamic value model with a registry that
//! exposes `.member` syntax on host types, and a tree-walking evaluator.
//!
//! ```
//! use mapscript::{Context, evaluate};
//!
//! let mut ctx = Context::with_builtins();
//! ctx.bind("index", 2.0);
//! ctx.bind("origin", [64.0, 0.0, 16.0]);
//!
//! let x = evaluate("origin.x + index * 128", &ctx).unwrap();
//! assert_eq!(x.to_string(), "320");
//!
//! let name = evaluate("'detail' if index > 1 else 'world'", &ctx).unwrap();
//! assert_eq!(name.to_string(), "detail");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree, plus the `Assignment`
/// entries of a batch. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the expression node types the parser can produce.
/// - Attaches source positions to AST nodes for error reporting.
/// - Defines the operator enums and their precedence.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while turning source
/// text into a value. Every error carries the source position it was raised
/// at, and none of them is caught or retried inside the crate.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Wraps all three in [`error::Error`] for the one-shot entry points.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, the type registry, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, registry, evaluator and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines between the language's single
/// `f64` number type and the integer types Rust needs for indexing and bit
/// manipulation, without silent data loss.
pub mod util;

/// The host library of native functions a host may inject into a context.
///
/// Nothing here is visible to scripts unless it is registered, either with
/// [`register`](builtins::register) or through [`Context::with_builtins`].
pub mod builtins {
    pub use crate::interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, register_builtins as register};
}

pub use crate::{
    ast::{Assignment, Expr, Position},
    error::Error,
    interpreter::{
        evaluator::core::Context,
        types::core::{TypeDescriptor, TypeRegistry},
        value::{
            core::Value,
            function::{Arity, Function},
            object::Object,
        },
    },
};
use crate::interpreter::{
    lexer::{LexMode, tokenize},
    parser,
};

/// Parses and evaluates a single expression.
///
/// This is the entry point hosts call for every expression string they take
/// from a map file. An unbound name evaluates to `none` rather than failing.
///
/// # Errors
/// Returns the first lex, parse or evaluation error, with its position.
///
/// # Examples
/// ```
/// use mapscript::{Context, Value, evaluate};
///
/// let ctx = Context::new();
///
/// assert_eq!(evaluate("2 + 3 * 4", &ctx).unwrap(), Value::Number(14.0));
/// assert_eq!(evaluate("[1, 2, 3][1]", &ctx).unwrap(), Value::Number(2.0));
/// assert_eq!(evaluate("undefined_name", &ctx).unwrap(), Value::None);
///
/// // `&` on its own is not an operator.
/// assert!(evaluate("1 & 2", &ctx).is_err());
/// ```
#[tracing::instrument(skip(context), err(level = "debug"))]
pub fn evaluate(source: &str, context: &Context) -> Result<Value, Error> {
    let expr = parse_expression(source)?;
    Ok(context.eval(&expr)?)
}

/// Parses a single expression without evaluating it.
///
/// The tree can be evaluated any number of times with [`Context::eval`].
///
/// # Errors
/// Returns a lex or parse error, with its position.
///
/// # Examples
/// ```
/// use mapscript::{Context, parse_expression};
///
/// let expr = parse_expression("seed % 4").unwrap();
///
/// for seed in 0..8 {
///     let mut ctx = Context::new();
///     ctx.bind("seed", f64::from(seed));
///     assert!(ctx.eval(&expr).unwrap().as_number(expr.position()).unwrap() < 4.0);
/// }
///
/// let err = parse_expression("(1 + 2").unwrap_err();
/// assert_eq!(err.position().line, 1);
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source, LexMode::Expression)?;
    Ok(parser::core::parse_expression(&tokens)?)
}

/// Parses a batch of `name = expression;` assignments.
///
/// # Errors
/// Returns a lex or parse error, with its position. An empty batch is a
/// parse error.
pub fn parse_assignments(source: &str) -> Result<Vec<Assignment>, Error> {
    let tokens = tokenize(source, LexMode::Assignments)?;
    Ok(parser::core::parse_assignments(&tokens)?)
}

/// Parses a batch of assignments and applies it to `context` in order.
///
/// Each entry is evaluated and bound before the next one is evaluated, so a
/// later entry can use what an earlier one bound.
///
/// # Errors
/// Returns the first error. Nothing is bound if parsing fails; if an
/// evaluation fails, entries before it stay bound.
///
/// # Examples
/// ```
/// use mapscript::{Context, Value, evaluate_assignments};
///
/// let mut ctx = Context::new();
/// evaluate_assignments("a = 2; b = a * 3;", &mut ctx).unwrap();
///
/// assert_eq!(ctx.resolve("a"), Some(&Value::Number(2.0)));
/// assert_eq!(ctx.resolve("b"), Some(&Value::Number(6.0)));
/// ```
#[tracing::instrument(skip(context), err(level = "debug"))]
pub fn evaluate_assignments(source: &str, context: &mut Context) -> Result<(), Error> {
    let batch = parse_assignments(source)?;
    Ok(context.apply_assignments(&batch)?)
}
