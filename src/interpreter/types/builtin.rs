use crate::{
    ast::Position,
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        types::core::TypeDescriptor,
        value::{core::Value, function::Arity},
    },
    util::num::{f64_to_index_checked, usize_to_f64_checked},
};

pub fn none_type() -> TypeDescriptor {
    TypeDescriptor::new("none")
}

pub fn number_type() -> TypeDescriptor {
    TypeDescriptor::new("number")
}

pub fn function_type() -> TypeDescriptor {
    TypeDescriptor::new("function")
}

/// Fallback for host objects whose type was never registered.
pub fn object_type() -> TypeDescriptor {
    TypeDescriptor::new("object")
}

/// Vectors expose their components the way map files name them, plus a few
/// geometry helpers.
///
/// # Example
/// ```
/// use mapscript::{Context, evaluate};
///
/// let ctx = Context::new();
/// assert_eq!(evaluate("[3, 4].length", &ctx).unwrap().to_string(), "5");
/// assert_eq!(evaluate("[1, 2, 3].z", &ctx).unwrap().to_string(), "3");
/// assert_eq!(evaluate("[1, 2].dot([3, 4])", &ctx).unwrap().to_string(), "11");
/// ```
pub fn vector_type() -> TypeDescriptor {
    TypeDescriptor::new("vector").property("x", |v, p| component(v, 0, p))
                                 .property("y", |v, p| component(v, 1, p))
                                 .property("z", |v, p| component(v, 2, p))
                                 .property("w", |v, p| component(v, 3, p))
                                 .property("count", |v, p| {
                                     Ok(Value::Number(usize_to_f64_checked(v.as_vector(p)?.len(), p)?))
                                 })
                                 .property("length", |v, p| Ok(Value::Number(magnitude(v.as_vector(p)?))))
                                 .method("normalized", Arity::Exact(0), |v, _, p| {
                                     let components = v.as_vector(p)?;
                                     let length = magnitude(components);
                                     if length == 0.0 {
                                         return Ok(v.clone());
                                     }
                                     Ok(Value::from(components.iter()
                                                              .map(|c| c / length)
                                                              .collect::<Vec<_>>()))
                                 })
                                 .method("dot", Arity::Exact(1), |v, args, p| {
                                     let a = v.as_vector(p)?;
                                     let b = args[0].as_vector(p)?;
                                     if a.len() != b.len() {
                                         return Err(EvalError::InvalidArgument { details:  format!("Cannot take the dot product of vectors of length {} and {}",
                                                                                                   a.len(),
                                                                                                   b.len()),
                                                                                 position: p, });
                                     }
                                     Ok(Value::Number(a.iter().zip(b).map(|(x, y)| x * y).sum()))
                                 })
}

/// Strings expose their length and the usual text helpers. Character
/// positions count Unicode scalar values, not bytes.
///
/// # Example
/// ```
/// use mapscript::{Context, evaluate};
///
/// let ctx = Context::new();
/// assert_eq!(evaluate("'func_detail'.upper()", &ctx).unwrap().to_string(), "FUNC_DETAIL");
/// assert_eq!(evaluate("'func_detail'.substr(5)", &ctx).unwrap().to_string(), "detail");
/// assert!(evaluate("'abc'.contains('b')", &ctx).unwrap().is_true());
/// ```
pub fn string_type() -> TypeDescriptor {
    TypeDescriptor::new("string").property("length", |v, p| {
                                     Ok(Value::Number(usize_to_f64_checked(v.as_str(p)?.chars().count(), p)?))
                                 })
                                 .method("upper", Arity::Exact(0), |v, _, p| Ok(Value::from(v.as_str(p)?.to_uppercase())))
                                 .method("lower", Arity::Exact(0), |v, _, p| Ok(Value::from(v.as_str(p)?.to_lowercase())))
                                 .method("trim", Arity::Exact(0), |v, _, p| Ok(Value::from(v.as_str(p)?.trim())))
                                 .method("contains", Arity::Exact(1), |v, args, p| {
                                     Ok(Value::boolean(v.as_str(p)?.contains(args[0].as_str(p)?)))
                                 })
                                 .method("startswith", Arity::Exact(1), |v, args, p| {
                                     Ok(Value::boolean(v.as_str(p)?.starts_with(args[0].as_str(p)?)))
                                 })
                                 .method("endswith", Arity::Exact(1), |v, args, p| {
                                     Ok(Value::boolean(v.as_str(p)?.ends_with(args[0].as_str(p)?)))
                                 })
                                 .method("replace", Arity::Exact(2), |v, args, p| {
                                     Ok(Value::from(v.as_str(p)?.replace(args[0].as_str(p)?, args[1].as_str(p)?)))
                                 })
                                 .method("substr", Arity::OneOf(&[1, 2]), substr)
}

/// `substr(start[, count])`: characters from `start`, at most `count` of
/// them. Ranges past the end are cut short rather than rejected.
fn substr(receiver: &Value, args: &[Value], position: Position) -> EvalResult<Value> {
    let text = receiver.as_str(position)?;
    let start = f64_to_index_checked(args[0].as_number(position)?, position)?;
    let count = match args.get(1) {
        Some(count) => f64_to_index_checked(count.as_number(position)?, position)?,
        None => usize::MAX,
    };

    Ok(Value::from(text.chars().skip(start).take(count).collect::<String>()))
}

fn component(receiver: &Value, index: usize, position: Position) -> EvalResult<Value> {
    let components = receiver.as_vector(position)?;
    components.get(index)
              .map(|c| Value::Number(*c))
              .ok_or(EvalError::IndexOutOfBounds { index,
                                                   length: components.len(),
                                                   position })
}

fn magnitude(components: &[f64]) -> f64 {
    components.iter().map(|c| c * c).sum::<f64>().sqrt()
}
