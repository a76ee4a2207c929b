/// Numeric conversion helpers.
///
/// The language has a single number type, `f64`. These helpers convert it to
/// and from the integer types Rust needs for indexing and bit manipulation,
/// failing instead of silently truncating or rounding.
pub mod num;
