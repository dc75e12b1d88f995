//! Immutable fixed-dimension vector over the reals

use std::fmt;
use std::ops::Index;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::backends::scalar::ScalarBackend;
use crate::backends::VectorBackend;
use crate::{Operand, Operation, Real, Result, Value, VectorError};

/// Iterator over the entries of a [`Vector`], in positional order
pub type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, f64>>;

/// Immutable vector of real entries
///
/// The dimension is fixed at construction and no method mutates the entries;
/// every operation returns a fresh `Vector` (or a scalar).
///
/// # Examples
///
/// ```
/// use realvec::Vector;
///
/// let a = Vector::from_slice(&[1, 2, 3]);
/// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
/// let result = a.add(&b).unwrap();
///
/// assert_eq!(result.entries(), &[5.0, 7.0, 9.0]);
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    entries: Vec<f64>,
}

impl Vector {
    /// Create a vector by copying an ordered sequence of reals
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::Vector;
    ///
    /// let v = Vector::new([2, 5]);
    /// assert_eq!(v.dim(), 2);
    /// assert_eq!(v[1], 5.0);
    /// ```
    pub fn new<T: Real>(entries: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: entries.into_iter().map(Real::to_f64).collect(),
        }
    }

    /// Create a vector from a slice of reals
    pub fn from_slice<T: Real>(entries: &[T]) -> Self {
        Self::new(entries.iter().copied())
    }

    /// Create a vector from a loosely typed value
    ///
    /// Lists and tuples of numbers are copied, and a wrapped vector has its
    /// entries copied. Anything else is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::{Value, Vector, VectorError};
    ///
    /// let v = Vector::from_value(&Value::List(vec![Value::Int(1), Value::Float(2.5)])).unwrap();
    /// assert_eq!(v.entries(), &[1.0, 2.5]);
    ///
    /// let err = Vector::from_value(&Value::Int(3)).unwrap_err();
    /// assert_eq!(err, VectorError::InvalidArgumentType { type_name: "int" });
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgumentType`] if `value` is not a list,
    /// tuple or vector, or if one of its elements is not a number.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::List(items) | Value::Tuple(items) => items
                .iter()
                .map(|item| {
                    item.as_real().ok_or(VectorError::InvalidArgumentType {
                        type_name: item.type_name(),
                    })
                })
                .collect::<Result<Vec<f64>>>()
                .map(|entries| Self { entries }),
            Value::Vector(v) => Ok(v.clone()),
            other => Err(VectorError::InvalidArgumentType {
                type_name: other.type_name(),
            }),
        }
    }

    /// Entries in positional order
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Alias of [`entries`](Self::entries)
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// Number of entries
    pub fn dim(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries, same as [`dim`](Self::dim)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<f64> {
        self.entries.get(index).copied()
    }

    /// Iterate over the entries
    ///
    /// Each call starts a fresh iterator borrowing the vector, so nested or
    /// repeated iteration over the same instance is independent.
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::Vector;
    ///
    /// let v = Vector::from_slice(&[0, 1, 5]);
    /// let pairs: Vec<(f64, f64)> = v.iter().flat_map(|a| v.iter().map(move |b| (a, b))).collect();
    /// assert_eq!(pairs.len(), 9);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter().copied()
    }

    /// Compare against an arbitrary operand
    ///
    /// Vectors of different dimension are simply unequal. Anything that is not
    /// a vector cannot be compared at all.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] if `other` is not a vector.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        match other.into() {
            Operand::Vector(v) => Ok(self == v),
            operand => Err(VectorError::TypeMismatch {
                type_name: operand.type_name(),
            }),
        }
    }

    /// Add a scalar to every entry, or add a vector positionally
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 6]);
    /// assert_eq!(v.add(2).unwrap().entries(), &[3.0, 8.0]);
    /// assert_eq!(v.add(&Vector::from_slice(&[2, 7])).unwrap().entries(), &[3.0, 13.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if a vector operand has a
    /// different dimension, or [`VectorError::UnsupportedOperand`] for any
    /// operand that is neither a scalar nor a vector.
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(s) => Ok(self.offset(s)),
            Operand::Vector(v) => self.add_vector(v),
            Operand::Foreign(type_name) => Err(VectorError::UnsupportedOperand {
                operation: Operation::Add,
                type_name,
            }),
        }
    }

    /// Compute `self - other`
    ///
    /// # Errors
    ///
    /// Same conditions as [`add`](Self::add).
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(s) => Ok(self.offset(-s)),
            Operand::Vector(v) => self.sub_vector(v),
            Operand::Foreign(type_name) => Err(VectorError::UnsupportedOperand {
                operation: Operation::Subtract,
                type_name,
            }),
        }
    }

    /// Compute `other - self`, the mirror of [`subtract`](Self::subtract)
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::Vector;
    ///
    /// let v = Vector::from_slice(&[4, 5]);
    /// assert_eq!(v.subtract_from(1).unwrap().entries(), &[-3.0, -4.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Same conditions as [`add`](Self::add).
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn subtract_from<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(s) => Ok(self.sub_from_scalar(s)),
            Operand::Vector(v) => v.sub_vector(self),
            Operand::Foreign(type_name) => Err(VectorError::UnsupportedOperand {
                operation: Operation::Subtract,
                type_name,
            }),
        }
    }

    /// Scale by a scalar, or multiply positionally by a vector (Hadamard product)
    ///
    /// # Errors
    ///
    /// Same conditions as [`add`](Self::add).
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(s) => Ok(self.scale(s)),
            Operand::Vector(v) => self.mul_vector(v),
            Operand::Foreign(type_name) => Err(VectorError::UnsupportedOperand {
                operation: Operation::Multiply,
                type_name,
            }),
        }
    }

    /// Divide every entry by a scalar
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if the divisor is zero, or
    /// [`VectorError::UnsupportedOperand`] if it is not a scalar (vectors
    /// included).
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn divide<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(s) => self.div_scalar(s),
            operand => Err(VectorError::UnsupportedOperand {
                operation: Operation::Divide,
                type_name: operand.type_name(),
            }),
        }
    }

    /// Inner product with another vector
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] on differing dimensions, or
    /// [`VectorError::UnsupportedOperand`] if `other` is not a vector.
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn dot<'a>(&self, other: impl Into<Operand<'a>>) -> Result<f64> {
        match other.into() {
            Operand::Vector(v) => self.dot_vector(v),
            operand => Err(VectorError::UnsupportedOperand {
                operation: Operation::Dot,
                type_name: operand.type_name(),
            }),
        }
    }

    /// Vector with every entry negated
    pub fn negate(&self) -> Self {
        let mut result = vec![0.0; self.len()];
        ScalarBackend::neg(&self.entries, &mut result);
        Self { entries: result }
    }

    fn check_dimension(&self, other: &Self, operation: Operation) -> Result<()> {
        if self.len() != other.len() {
            return Err(VectorError::DimensionMismatch {
                operation,
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn add_vector(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other, Operation::Add)?;

        let mut result = vec![0.0; self.len()];
        ScalarBackend::add(&self.entries, &other.entries, &mut result);
        Ok(Self { entries: result })
    }

    pub(crate) fn sub_vector(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other, Operation::Subtract)?;

        let mut result = vec![0.0; self.len()];
        ScalarBackend::sub(&self.entries, &other.entries, &mut result);
        Ok(Self { entries: result })
    }

    pub(crate) fn mul_vector(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other, Operation::Multiply)?;

        let mut result = vec![0.0; self.len()];
        ScalarBackend::mul(&self.entries, &other.entries, &mut result);
        Ok(Self { entries: result })
    }

    pub(crate) fn dot_vector(&self, other: &Self) -> Result<f64> {
        self.check_dimension(other, Operation::Dot)?;

        Ok(ScalarBackend::dot(&self.entries, &other.entries))
    }

    pub(crate) fn offset(&self, s: f64) -> Self {
        let mut result = vec![0.0; self.len()];
        ScalarBackend::offset(&self.entries, s, &mut result);
        Self { entries: result }
    }

    pub(crate) fn sub_from_scalar(&self, s: f64) -> Self {
        let mut result = vec![0.0; self.len()];
        ScalarBackend::sub_from(&self.entries, s, &mut result);
        Self { entries: result }
    }

    pub(crate) fn scale(&self, s: f64) -> Self {
        let mut result = vec![0.0; self.len()];
        ScalarBackend::scale(&self.entries, s, &mut result);
        Self { entries: result }
    }

    /// Division is multiplication by the reciprocal.
    pub(crate) fn div_scalar(&self, s: f64) -> Result<Self> {
        if s == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.scale(1.0 / s))
    }

    pub(crate) fn sum_of_squares(&self) -> f64 {
        ScalarBackend::sum_of_squares(&self.entries)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Real> FromIterator<T> for Vector {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Real> From<Vec<T>> for Vector {
    fn from(entries: Vec<T>) -> Self {
        Self::new(entries)
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector {
    fn from(entries: [T; N]) -> Self {
        Self::new(entries)
    }
}

impl TryFrom<&Value> for Vector {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl TryFrom<Value> for Vector {
    type Error = VectorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Vector(v) => Ok(v),
            other => Self::from_value(&other),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector(")?;
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str(")")
    }
}
