//! Right-hand operands of the named arithmetic methods

use crate::{Real, Value, Vector};

/// What a named method such as [`Vector::add`] was given on its right side
///
/// Built implicitly through `Into`: any [`Real`] becomes `Scalar`, a `&Vector`
/// becomes `Vector`, and a [`Value`] maps onto whichever fits, falling back to
/// `Foreign` with the value's type name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// A real number
    Scalar(f64),
    /// Another vector
    Vector(&'a Vector),
    /// Anything else, identified by its type name
    Foreign(&'static str),
}

impl Operand<'_> {
    /// Type name reported in errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Vector(_) => "Vector",
            Operand::Foreign(name) => name,
        }
    }
}

impl<T: Real> From<T> for Operand<'_> {
    fn from(x: T) -> Self {
        Operand::Scalar(x.to_f64())
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(v: &'a Vector) -> Self {
        Operand::Vector(v)
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Vector(v) => Operand::Vector(v),
            other => match other.as_real() {
                Some(x) => Operand::Scalar(x),
                None => Operand::Foreign(other.type_name()),
            },
        }
    }
}
