//! Scalar backend implementation
//!
//! Portable baseline built from iterator adaptors: `zip` for pairwise
//! combination, `map` for element-wise transforms and `sum` for reduction.

use super::VectorBackend;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl ScalarBackend {
    fn zip_into(a: &[f64], b: &[f64], result: &mut [f64], op: impl Fn(f64, f64) -> f64) {
        for ((r, &x), &y) in result.iter_mut().zip(a).zip(b) {
            *r = op(x, y);
        }
    }

    fn map_into(a: &[f64], result: &mut [f64], op: impl Fn(f64) -> f64) {
        for (r, &x) in result.iter_mut().zip(a) {
            *r = op(x);
        }
    }
}

impl VectorBackend for ScalarBackend {
    fn add(a: &[f64], b: &[f64], result: &mut [f64]) {
        Self::zip_into(a, b, result, |x, y| x + y);
    }

    fn sub(a: &[f64], b: &[f64], result: &mut [f64]) {
        Self::zip_into(a, b, result, |x, y| x - y);
    }

    fn mul(a: &[f64], b: &[f64], result: &mut [f64]) {
        Self::zip_into(a, b, result, |x, y| x * y);
    }

    fn offset(a: &[f64], s: f64, result: &mut [f64]) {
        Self::map_into(a, result, |x| x + s);
    }

    fn sub_from(a: &[f64], s: f64, result: &mut [f64]) {
        Self::map_into(a, result, |x| s - x);
    }

    fn scale(a: &[f64], s: f64, result: &mut [f64]) {
        Self::map_into(a, result, |x| x * s);
    }

    fn neg(a: &[f64], result: &mut [f64]) {
        Self::map_into(a, result, |x| -x);
    }

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    fn sum_of_squares(a: &[f64]) -> f64 {
        a.iter().map(|x| x * x).sum()
    }
}
