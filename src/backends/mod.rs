//! Compute kernels behind the vector operations
//!
//! Every public operation on [`Vector`](crate::Vector) reduces to one of the
//! element-wise maps, pairwise combinations or reductions declared here. The
//! public layer validates dimensions and operand types; the kernels assume
//! their inputs are already consistent.
//!
//! # Backends
//!
//! - `scalar`: Portable iterator-based implementation

pub mod scalar;

/// Backend trait defining the primitive kernels
///
/// Callers must ensure:
/// - Slices `a` and `b` have the same length
/// - `result` has the same length as `a`
pub trait VectorBackend {
    /// Element-wise addition: a[i] + b[i]
    fn add(a: &[f64], b: &[f64], result: &mut [f64]);

    /// Element-wise subtraction: a[i] - b[i]
    fn sub(a: &[f64], b: &[f64], result: &mut [f64]);

    /// Element-wise multiplication: a[i] * b[i]
    fn mul(a: &[f64], b: &[f64], result: &mut [f64]);

    /// Scalar offset: a[i] + s
    fn offset(a: &[f64], s: f64, result: &mut [f64]);

    /// Reverse scalar subtraction: s - a[i]
    fn sub_from(a: &[f64], s: f64, result: &mut [f64]);

    /// Scaling: a[i] * s
    fn scale(a: &[f64], s: f64, result: &mut [f64]);

    /// Negation: -a[i]
    fn neg(a: &[f64], result: &mut [f64]);

    /// Dot product: sum(a[i] * b[i])
    fn dot(a: &[f64], b: &[f64]) -> f64;

    /// Sum of squares: sum(a[i] * a[i])
    fn sum_of_squares(a: &[f64]) -> f64;
}
