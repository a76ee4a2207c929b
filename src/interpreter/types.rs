/// Type descriptors and the process-wide registry.
///
/// Defines property and method descriptors, the per-type member tables built
/// from them, and the registry that resolves any runtime value to exactly one
/// descriptor.
pub mod core;
/// Member tables of the built-in types.
///
/// Describes what scripts can reach on `none`, numbers, vectors, strings and
/// functions without any host registration.
pub mod builtin;
