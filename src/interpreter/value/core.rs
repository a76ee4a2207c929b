use std::{any::Any, fmt, sync::Arc};

use crate::{
    ast::{LiteralValue, Position},
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{function::Function, object::Object},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Only [`Value::None`]
/// is false in a boolean context; `0` and the empty string are true.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Also the result of an unresolved name and the
    /// "false" of comparisons and logical negation.
    None,
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A fixed-length sequence of numbers, typically 2 to 4 components such
    /// as an origin or an angle triple.
    Vector(Arc<[f64]>),
    /// Text, with no escape processing.
    String(String),
    /// A native host function or a method bound to its receiver.
    Function(Function),
    /// An opaque host value, scriptable through its registered type
    /// descriptor.
    Object(Object),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// Booleans map onto the language's convention: `true` is the number `1`,
/// `false` is `none`.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v.into())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Self::Vector(Arc::new(v))
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::None => Self::None,
        }
    }
}

impl Value {
    /// Encodes a Rust boolean: `1` for true, `none` for false.
    ///
    /// # Example
    /// ```
    /// use mapscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::boolean(true), Value::Number(1.0));
    /// assert_eq!(Value::boolean(false), Value::None);
    /// ```
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        if value { Self::Number(1.0) } else { Self::None }
    }

    /// Returns the truthiness of the value. Everything except `none` is
    /// true, including `0` and `''`.
    ///
    /// # Example
    /// ```
    /// use mapscript::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.0).is_true());
    /// assert!(Value::from("").is_true());
    /// assert!(!Value::None.is_true());
    /// ```
    #[must_use]
    pub const fn is_true(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if the value is [`Value::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Name of the built-in type the value belongs to, as used in error
    /// messages. Host objects all report `object`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Number(_) => "number",
            Self::Vector(_) => "vector",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Object(_) => "object",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not a number.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    pub const fn as_number(&self, position: Position) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(EvalError::ExpectedNumber { found: self.type_name(),
                                                 position }),
        }
    }

    /// Borrows the components of a vector, or returns an error if the value
    /// is not a vector.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    pub fn as_vector(&self, position: Position) -> EvalResult<&[f64]> {
        match self {
            Self::Vector(v) => Ok(v),
            _ => Err(EvalError::ExpectedVector { found: self.type_name(),
                                                 position }),
        }
    }

    /// Borrows the text of a string value, or returns an error if the value
    /// is not a string.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    pub fn as_str(&self, position: Position) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(EvalError::TypeError { details: format!("Expected a string, found {}",
                                                             self.type_name()),
                                            position }),
        }
    }

    /// Borrows the host data inside an [`Value::Object`] as `T`.
    ///
    /// Used by host property getters and methods to reach their own type.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    pub fn as_object<T: Any>(&self, position: Position) -> EvalResult<&T> {
        match self {
            Self::Object(object) => object.downcast_ref::<T>().ok_or_else(|| {
                                                                   EvalError::TypeError { details: format!("Expected a host value of type '{}'",
                                                                                                           std::any::type_name::<T>()),
                                                                                          position }
                                                               }),
            _ => Err(EvalError::TypeError { details: format!("Expected a host value, found {}",
                                                             self.type_name()),
                                            position }),
        }
    }
}

/// Structural equality. Vectors compare component-wise, functions and host
/// objects by identity, and values of different types are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.same_as(b),
            (Self::Object(a), Self::Object(b)) => a.same_as(b),
            _ => false,
        }
    }
}

/// Canonical formatting, used by hosts to splice a result back into map
/// text: `none` prints as nothing and vector components are separated by
/// spaces, the way map files write origins and angles.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Vector(v) => {
                for (index, component) in v.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{component}")?;
                }

                Ok(())
            },
            Self::String(s) => write!(f, "{s}"),
            Self::Function(_) => write!(f, "function"),
            Self::Object(object) => write!(f, "{object}"),
        }
    }
}
