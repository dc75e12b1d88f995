//! realvec: immutable real vectors with algebra and geometry
//!
//! **realvec** provides a single value type, [`Vector`]: a fixed-dimension,
//! immutable sequence of real entries with:
//!
//! 1. **Algebra** - addition, subtraction, scalar and element-wise (Hadamard)
//!    multiplication, scalar division, dot product, negation
//! 2. **Geometry** - magnitude, unit vector, angle, projections, orthogonality,
//!    parallelism and zero checks
//! 3. **Sequence semantics** - iteration, indexing, exact positional equality
//!
//! # Design Principles
//!
//! - **Immutable values**: no operation mutates its operands; every result is a
//!   freshly allocated `Vector`
//! - **One kernel per operation**: named methods and `std::ops` operators share
//!   the same implementation in [`backends`]
//! - **Errors are values**: dimension mismatches, unsupported operands and
//!   division by zero surface as [`VectorError`], never as silent coercion
//!
//! # Quick Start
//!
//! ```rust
//! use realvec::{AngleUnit, Vector};
//!
//! let v = Vector::from_slice(&[3.0, 4.0]);
//! let u = Vector::from_slice(&[1.0, 0.0]);
//!
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!((&v + &u).unwrap().entries(), &[4.0, 4.0]);
//! assert_eq!((2.0 * &v).entries(), &[6.0, 8.0]);
//!
//! let angle = Vector::from_slice(&[0, 1]).angle(&u, AngleUnit::Degrees).unwrap();
//! assert!((angle - 90.0).abs() < 1e-10);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit spans for the public operations via the `tracing` crate

pub mod backends;
pub mod error;
pub mod geometry;
pub mod operand;
pub mod ops;
pub mod real;
pub mod value;
pub mod vector;

pub use error::{Operation, Result, VectorError};
pub use geometry::AngleUnit;
pub use operand::Operand;
pub use real::Real;
pub use value::Value;
pub use vector::Vector;

/// Tolerance used by the geometric predicates when none is given
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
