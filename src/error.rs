//! Error types for vector operations

use std::fmt;

use thiserror::Error;

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Binary operation a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `v + x`
    Add,
    /// `v - x` or `x - v`
    Subtract,
    /// `v * x`
    Multiply,
    /// `v / x`
    Divide,
    /// Inner product
    Dot,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Dot => "Inner product",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during vector operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Constructor given something other than a sequence of reals
    #[error("Unable to create Vector from object of type {type_name}")]
    InvalidArgumentType {
        /// Name of the rejected type
        type_name: &'static str,
    },

    /// Size-sensitive operation on vectors of different dimension
    #[error("{operation} is not defined between vectors of different sizes: sizes found are {left} and {right}")]
    DimensionMismatch {
        /// Operation that was attempted
        operation: Operation,
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// Equality comparison against something that is not a vector
    #[error("Operation \"==\" between Vector and {type_name} is not supported")]
    TypeMismatch {
        /// Name of the right-hand type
        type_name: &'static str,
    },

    /// Operand type the operation is not defined for
    #[error("{operation} with type {type_name} is not implemented")]
    UnsupportedOperand {
        /// Operation that was attempted
        operation: Operation,
        /// Name of the rejected operand type
        type_name: &'static str,
    },

    /// Argument of the right type but an unrecognized value
    #[error("Arg 'unit' must be one of 'deg', 'rad'. Got {0}")]
    InvalidArgumentValue(String),

    /// Division by a zero scalar (e.g., normalizing a zero vector)
    #[error("Division by zero")]
    DivisionByZero,

    /// Magnitude too large to represent as a finite `f64`
    #[error("Vector magnitude overflowed")]
    MagnitudeOverflow,
}
