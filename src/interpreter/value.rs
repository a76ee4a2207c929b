/// Callable values.
///
/// Defines native host functions and bound methods, together with the
/// [`function::Arity`] contract both of them check before running.
pub mod function;
/// Opaque host values.
///
/// Defines `Object`, the wrapper that lets a host inject its own Rust types
/// into a context and expose them to scripts through a registered type
/// descriptor.
pub mod object;

/// The runtime value type.
///
/// Defines `Value`, its conversions, truthiness, equality and display.
pub mod core;
