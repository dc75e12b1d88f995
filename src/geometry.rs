//! Geometric queries derived from the dot product and the Euclidean norm

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Result, Vector, VectorError, DEFAULT_TOLERANCE};

/// Unit an angle is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians (`"rad"`)
    #[default]
    Radians,
    /// Degrees (`"deg"`)
    Degrees,
}

impl FromStr for AngleUnit {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rad" => Ok(AngleUnit::Radians),
            "deg" => Ok(AngleUnit::Degrees),
            other => Err(VectorError::InvalidArgumentValue(other.to_string())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Radians => f.write_str("rad"),
            AngleUnit::Degrees => f.write_str("deg"),
        }
    }
}

impl Vector {
    /// Euclidean norm
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::Vector;
    ///
    /// assert_eq!(Vector::from_slice(&[3, 4]).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    /// Alias of [`magnitude`](Self::magnitude)
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /// The vector divided by its own magnitude
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] for a zero (or empty) vector,
    /// or [`VectorError::MagnitudeOverflow`] when the magnitude is not finite.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(dim = self.dim())))]
    pub fn unit_vector(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if !magnitude.is_finite() {
            return Err(VectorError::MagnitudeOverflow);
        }
        self.div_scalar(magnitude)
    }

    /// Signed length of the projection of `self` onto `other`
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `other` is a zero vector, or
    /// [`VectorError::DimensionMismatch`] on differing dimensions.
    pub fn scalar_projection(&self, other: &Vector) -> Result<f64> {
        self.dot_vector(&other.unit_vector()?)
    }

    /// Projection of `self` onto `other`
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::Vector;
    ///
    /// let v = Vector::from_slice(&[3, 4]);
    /// let x_axis = Vector::from_slice(&[2, 0]);
    /// assert_eq!(v.vector_projection(&x_axis).unwrap().entries(), &[3.0, 0.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Same conditions as [`scalar_projection`](Self::scalar_projection).
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn vector_projection(&self, other: &Vector) -> Result<Self> {
        let unit = other.unit_vector()?;
        let length = self.dot_vector(&unit)?;
        Ok(unit.scale(length))
    }

    /// Angle between `self` and `other`
    ///
    /// # Examples
    ///
    /// ```
    /// use realvec::{AngleUnit, Vector};
    ///
    /// let v = Vector::from_slice(&[0, 1]);
    /// let u = Vector::from_slice(&[1, 0]);
    /// let angle = v.angle(&u, AngleUnit::Degrees).unwrap();
    /// assert!((angle - 90.0).abs() < 1e-10);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if either vector is zero, or
    /// [`VectorError::DimensionMismatch`] on differing dimensions.
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dim = self.dim())))]
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        // Rounding can push the cosine of (anti)parallel vectors just past ±1.
        let cosine = self.unit_cosine(other)?.clamp(-1.0, 1.0);
        let radians = cosine.acos();

        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Angle between `self` and `other`, with the unit given by name
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgumentValue`] unless `unit` is `"rad"`
    /// or `"deg"`, plus the conditions of [`angle`](Self::angle).
    pub fn angle_with_unit(&self, other: &Vector, unit: &str) -> Result<f64> {
        let unit = unit.parse::<AngleUnit>()?;
        self.angle(other, unit)
    }

    /// Orthogonality check with [`DEFAULT_TOLERANCE`]
    ///
    /// # Errors
    ///
    /// Same conditions as [`angle`](Self::angle).
    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_within(other, DEFAULT_TOLERANCE)
    }

    /// True when the dot product of the two unit vectors is below `tol`
    ///
    /// The comparison is one-sided: a strongly negative cosine (an obtuse
    /// angle) also passes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`angle`](Self::angle).
    pub fn is_orthogonal_within(&self, other: &Vector, tol: f64) -> Result<bool> {
        Ok(self.unit_cosine(other)? < tol)
    }

    /// Parallelism check with [`DEFAULT_TOLERANCE`]
    ///
    /// # Errors
    ///
    /// Same conditions as [`angle`](Self::angle).
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_within(other, DEFAULT_TOLERANCE)
    }

    /// True when the angle is within `tol` of `0` or of `π`
    ///
    /// # Errors
    ///
    /// Same conditions as [`angle`](Self::angle).
    pub fn is_parallel_within(&self, other: &Vector, tol: f64) -> Result<bool> {
        let angle = self.angle(other, AngleUnit::Radians)?;
        Ok(angle.abs() < tol || (angle - PI).abs() < tol)
    }

    /// Zero check with [`DEFAULT_TOLERANCE`]
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    /// True when every entry is below `tol`
    ///
    /// The comparison is one-sided, so large negative entries also pass.
    pub fn is_zero_within(&self, tol: f64) -> bool {
        self.iter().all(|e| e < tol)
    }

    fn unit_cosine(&self, other: &Vector) -> Result<f64> {
        self.unit_vector()?.dot_vector(&other.unit_vector()?)
    }
}
