//! Dynamically-typed arguments
//!
//! Callers that receive loosely typed input (a config value, a scripting
//! bridge, a parsed document) can hand it to [`Vector::from_value`] or to any
//! named arithmetic method without pre-validating it. Type violations surface
//! as [`VectorError::InvalidArgumentType`](crate::VectorError::InvalidArgumentType)
//! or [`VectorError::UnsupportedOperand`](crate::VectorError::UnsupportedOperand),
//! naming the offending type.

use crate::Vector;

/// A loosely typed value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value
    None,
    /// Boolean
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Text
    Str(String),
    /// Growable ordered sequence
    List(Vec<Value>),
    /// Fixed ordered sequence
    Tuple(Vec<Value>),
    /// Key/value pairs
    Map(Vec<(Value, Value)>),
    /// An existing vector
    Vector(Vector),
}

impl Value {
    /// Name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Vector(_) => "Vector",
        }
    }

    /// The numeric value, if this is an `Int` or a `Float`
    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Value::Int(i) => Some(i as f64),
            Value::Float(x) => Some(x),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}
