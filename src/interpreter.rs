/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks an expression tree against a [`evaluator::core::Context`]
/// and produces a single value. It never mutates the tree, so one parsed
/// expression can be evaluated against many contexts.
///
/// # Responsibilities
/// - Evaluates every expression form the parser produces.
/// - Applies the truthiness and short-circuit rules of `and`, `or` and the
///   conditional forms.
/// - Reports evaluation errors such as unknown members or bad indices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their positions.
/// - Recognizes keywords regardless of case.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a shift/reduce stack machine. It shifts tokens one at a
/// time and reduces the top of its stack whenever a rule matches, peeking at
/// the next token to decide whether an operator has to wait for a tighter
/// one.
///
/// # Responsibilities
/// - Converts tokens into a single expression or a batch of assignments.
/// - Applies operator precedence and associativity.
/// - Reports syntax errors with their position.
pub mod parser;
/// The types module makes values scriptable through member syntax.
///
/// Every runtime value resolves to one type descriptor: a named table of
/// properties and methods. Built-in types come with their own tables, and
/// hosts can register tables for the objects they inject.
///
/// # Responsibilities
/// - Defines property and method descriptors and the per-type tables.
/// - Provides the process-wide, read-only type registry.
pub mod types;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value an expression can produce: `none`,
/// numbers, vectors, strings, functions and opaque host objects. It also
/// provides checked accessors, structural equality and the canonical text
/// form hosts splice back into map files.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality and display.
/// - Provides callables and host object wrappers.
pub mod value;
