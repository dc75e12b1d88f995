//! Integration tests for the public `Vector` API
//!
//! Covers:
//! - Construction from typed and loosely typed input
//! - Algebraic identities (commutativity, identity elements, anti-symmetry)
//! - Error taxonomy for every fallible operation
//! - Geometric scenarios (magnitude, angles, orthogonality, parallelism)

use proptest::prelude::*;
use realvec::{AngleUnit, Operation, Value, Vector, VectorError};

const PROPTEST_CASES: u32 = 50;
const EPS: f64 = 1e-10;

// ============================================================================
// CONSTRUCTION AND SEQUENCE SEMANTICS
// ============================================================================

#[test]
fn integration_copy_is_equal_but_distinct() {
    let v = Vector::from_slice(&[2, 5]);
    let copy = v.clone();

    assert_eq!(copy, v);
    assert!(!std::ptr::eq(copy.entries(), v.entries()));
}

#[test]
fn integration_dimension_and_entries() {
    let v = Vector::new([2, 5]);

    assert_eq!(v.dim(), 2);
    assert_eq!(v.entries()[0], 2.0);
    assert_eq!(v.entries()[1], 5.0);
}

#[test]
fn integration_construct_from_loose_values() {
    let tuple = Value::Tuple(vec![Value::Int(1), Value::Float(2.0)]);
    assert_eq!(Vector::try_from(&tuple).unwrap(), Vector::from_slice(&[1, 2]));

    assert_eq!(
        Vector::try_from(Value::from("abc")).unwrap_err(),
        VectorError::InvalidArgumentType { type_name: "str" }
    );
    assert_eq!(
        Vector::try_from(Value::Float(1.5)).unwrap_err(),
        VectorError::InvalidArgumentType { type_name: "float" }
    );
}

#[test]
fn integration_iteration_is_restartable() {
    let v = Vector::from_slice(&[0, 1, 5]);
    let first: Vec<f64> = v.iter().collect();
    let second: Vec<f64> = v.iter().collect();

    assert_eq!(first, vec![0.0, 1.0, 5.0]);
    assert_eq!(first, second);
}

#[test]
fn integration_equality_across_dimensions_is_false() {
    let u = Vector::from_slice(&[4, 5]);
    let v = Vector::from_slice(&[1, 5, 4]);

    assert_ne!(u, v);
    assert_eq!(u.equals(&v), Ok(false));
}

#[test]
fn integration_equality_against_foreign_type_fails() {
    let v = Vector::from_slice(&[1, 2]);
    let list = Value::List(vec![Value::Int(1), Value::Int(2)]);

    assert_eq!(
        v.equals(&list).unwrap_err(),
        VectorError::TypeMismatch { type_name: "list" }
    );
}

// ============================================================================
// ARITHMETIC SCENARIOS
// ============================================================================

#[test]
fn integration_dimension_mismatch() {
    let result = &Vector::from_slice(&[1, 2, 3]) + &Vector::from_slice(&[1, 2]);

    assert_eq!(
        result.unwrap_err(),
        VectorError::DimensionMismatch {
            operation: Operation::Add,
            left: 3,
            right: 2
        }
    );
}

#[test]
fn integration_foreign_operand_is_rejected() {
    let v = Vector::from_slice(&[1, 2]);
    let tuple = Value::Tuple(vec![Value::Int(1), Value::Int(2)]);

    for result in [
        v.add(&tuple),
        v.subtract(&tuple),
        v.subtract_from(&tuple),
        v.multiply(&tuple),
        v.divide(&tuple),
    ] {
        assert!(matches!(
            result,
            Err(VectorError::UnsupportedOperand { type_name: "tuple", .. })
        ));
    }
    assert!(matches!(
        v.dot(&tuple),
        Err(VectorError::UnsupportedOperand {
            operation: Operation::Dot,
            type_name: "tuple"
        })
    ));
}

#[test]
fn integration_scalar_and_hadamard_products() {
    let v = Vector::from_slice(&[4, 5]);

    assert_eq!(4.0 * &v, Vector::from_slice(&[16, 20]));
    assert_eq!(
        (&v * &Vector::from_slice(&[3, 2])).unwrap(),
        Vector::from_slice(&[12, 10])
    );
}

#[test]
fn integration_dot_product_returns_scalar() {
    let v = Vector::from_slice(&[4, 5]);
    let u = Vector::from_slice(&[3, 2]);

    assert_eq!(v.dot(&u).unwrap(), 22.0);
    assert_eq!(u.dot(&v).unwrap(), 22.0);
}

#[test]
fn integration_divide_by_vector_is_unsupported() {
    let v = Vector::from_slice(&[4, 10]);

    assert_eq!(
        v.divide(&v).unwrap_err(),
        VectorError::UnsupportedOperand {
            operation: Operation::Divide,
            type_name: "Vector"
        }
    );
}

// ============================================================================
// GEOMETRY SCENARIOS
// ============================================================================

#[test]
fn integration_magnitude() {
    assert_eq!(Vector::from_slice(&[3, 4]).magnitude(), 5.0);
}

#[test]
fn integration_angles() {
    let x_axis = Vector::from_slice(&[1, 0]);

    let zero = Vector::from_slice(&[2, 0]).angle_with_unit(&x_axis, "deg").unwrap();
    let straight = Vector::from_slice(&[-2, 0]).angle_with_unit(&x_axis, "deg").unwrap();
    let right = Vector::from_slice(&[0, 1]).angle_with_unit(&x_axis, "deg").unwrap();

    assert!(zero.abs() < EPS);
    assert!((straight - 180.0).abs() < EPS);
    assert!((right - 90.0).abs() < EPS);
}

#[test]
fn integration_angle_rejects_unknown_unit() {
    let v = Vector::from_slice(&[0, 1]);
    let u = Vector::from_slice(&[1, 0]);

    assert_eq!(
        v.angle_with_unit(&u, "grad").unwrap_err(),
        VectorError::InvalidArgumentValue("grad".to_string())
    );
}

#[test]
fn integration_orthogonality() {
    let x_axis = Vector::from_slice(&[1, 0]);

    assert!(Vector::from_slice(&[0, 1]).is_orthogonal(&x_axis).unwrap());
    assert!(!Vector::from_slice(&[1, 0]).is_orthogonal(&x_axis).unwrap());
}

#[test]
fn integration_parallelism() {
    let x_axis = Vector::from_slice(&[1, 0]);

    assert!(Vector::from_slice(&[2, 0]).is_parallel(&x_axis).unwrap());
    assert!(Vector::from_slice(&[-2, 0]).is_parallel(&x_axis).unwrap());
    assert!(!Vector::from_slice(&[-2, 2]).is_parallel(&x_axis).unwrap());
}

#[test]
fn integration_unit_vector_of_zero_vector_fails() {
    let zero = Vector::from_slice(&[0, 0]);

    assert!(zero.is_zero());
    assert_eq!(zero.unit_vector().unwrap_err(), VectorError::DivisionByZero);
}

#[test]
fn integration_default_angle_unit() {
    let v = Vector::from_slice(&[0, 1]);
    let u = Vector::from_slice(&[1, 0]);

    assert_eq!(
        v.angle(&u, AngleUnit::default()).unwrap(),
        v.angle_with_unit(&u, "rad").unwrap()
    );
}

// ============================================================================
// ALGEBRAIC PROPERTIES
// ============================================================================

fn same_length_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..64).prop_flat_map(|len| {
        (
            prop::collection::vec(-100.0f64..100.0, len),
            prop::collection::vec(-100.0f64..100.0, len),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    /// v + u == u + v, v * u == u * v, v . u == u . v
    #[test]
    fn integration_commutativity((a, b) in same_length_pair(), s in -100.0f64..100.0) {
        let v = Vector::from_slice(&a);
        let u = Vector::from_slice(&b);

        prop_assert_eq!((&v + &u)?, (&u + &v)?);
        prop_assert_eq!((&v * &u)?, (&u * &v)?);
        prop_assert_eq!(v.dot(&u)?, u.dot(&v)?);
        prop_assert_eq!(&v + s, s + &v);
        prop_assert_eq!(&v * s, s * &v);
    }

    /// v + 0 == v, 1 * v == v, v * [1..] == v
    #[test]
    fn integration_identities(a in prop::collection::vec(-100.0f64..100.0, 0..64)) {
        let v = Vector::from_slice(&a);
        let zeros = Vector::from_slice(&vec![0.0; a.len()]);
        let ones = Vector::from_slice(&vec![1.0; a.len()]);

        prop_assert_eq!((&v + &zeros)?, v.clone());
        prop_assert_eq!(1.0 * &v, v.clone());
        prop_assert_eq!((&v * &ones)?, v.clone());
    }

    /// v - u == -(u - v)
    #[test]
    fn integration_anti_symmetry((a, b) in same_length_pair()) {
        let v = Vector::from_slice(&a);
        let u = Vector::from_slice(&b);

        prop_assert_eq!((&v - &u)?, -(&u - &v)?);
    }

    /// Scalar subtraction mirrors: s - v == -(v - s)
    #[test]
    fn integration_scalar_subtraction_mirrors(
        a in prop::collection::vec(-100.0f64..100.0, 0..64),
        s in -100.0f64..100.0
    ) {
        let v = Vector::from_slice(&a);

        prop_assert_eq!(s - &v, -(&v - s));
    }

    /// Scalar projection onto a vector equals its length times cos(angle)
    #[test]
    fn integration_projection_matches_angle((a, b) in same_length_pair()) {
        prop_assume!(a.iter().any(|x| x.abs() > 1e-2));
        prop_assume!(b.iter().any(|x| x.abs() > 1e-2));
        let v = Vector::from_slice(&a);
        let u = Vector::from_slice(&b);

        let projection = v.scalar_projection(&u)?;
        let expected = v.magnitude() * v.angle(&u, AngleUnit::Radians)?.cos();
        prop_assert!((projection - expected).abs() < 1e-6 * v.magnitude().max(1.0));
    }
}
