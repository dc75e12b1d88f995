//! Operator bindings for [`Vector`]
//!
//! Each operator forwards to the same kernel as its named method, so `&v + &u`
//! and `v.add(&u)` share one implementation. Vector-by-vector operators and
//! division return [`Result`]; scalar operators cannot fail and return a
//! `Vector` directly. Scalars may appear on either side.
//!
//! A vector on the left is always taken by reference. An owned `Vector`
//! receiver would make `Add::add` shadow the named [`Vector::add`] whenever
//! `std::ops::Add` is in scope.
//!
//! ```
//! use realvec::Vector;
//!
//! let v = Vector::from_slice(&[4.0, 5.0]);
//! let u = Vector::from_slice(&[3.0, 2.0]);
//!
//! assert_eq!((&v * &u).unwrap().entries(), &[12.0, 10.0]);
//! assert_eq!((4.0 * &v).entries(), &[16.0, 20.0]);
//! assert_eq!((1.0 - &v).entries(), &[-3.0, -4.0]);
//! assert_eq!((-&v).entries(), &[-4.0, -5.0]);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{Real, Result, Vector};

/// Vector (op) vector, dimension-checked.
macro_rules! impl_vector_op {
    ($trait:ident :: $method:ident => $kernel:ident) => {
        impl $trait<&Vector> for &Vector {
            type Output = Result<Vector>;

            fn $method(self, rhs: &Vector) -> Result<Vector> {
                self.$kernel(rhs)
            }
        }
    };
}

impl_vector_op!(Add::add => add_vector);
impl_vector_op!(Sub::sub => sub_vector);
impl_vector_op!(Mul::mul => mul_vector);

/// Vector (op) scalar and scalar (op) vector for one scalar type.
macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<$t> for &Vector {
                type Output = Vector;

                fn add(self, rhs: $t) -> Vector {
                    self.offset(rhs.to_f64())
                }
            }

            impl Add<&Vector> for $t {
                type Output = Vector;

                fn add(self, rhs: &Vector) -> Vector {
                    rhs.offset(self.to_f64())
                }
            }

            impl Add<Vector> for $t {
                type Output = Vector;

                fn add(self, rhs: Vector) -> Vector {
                    rhs.offset(self.to_f64())
                }
            }

            impl Sub<$t> for &Vector {
                type Output = Vector;

                fn sub(self, rhs: $t) -> Vector {
                    self.offset(-rhs.to_f64())
                }
            }

            impl Sub<&Vector> for $t {
                type Output = Vector;

                fn sub(self, rhs: &Vector) -> Vector {
                    rhs.sub_from_scalar(self.to_f64())
                }
            }

            impl Sub<Vector> for $t {
                type Output = Vector;

                fn sub(self, rhs: Vector) -> Vector {
                    rhs.sub_from_scalar(self.to_f64())
                }
            }

            impl Mul<$t> for &Vector {
                type Output = Vector;

                fn mul(self, rhs: $t) -> Vector {
                    self.scale(rhs.to_f64())
                }
            }

            impl Mul<&Vector> for $t {
                type Output = Vector;

                fn mul(self, rhs: &Vector) -> Vector {
                    rhs.scale(self.to_f64())
                }
            }

            impl Mul<Vector> for $t {
                type Output = Vector;

                fn mul(self, rhs: Vector) -> Vector {
                    rhs.scale(self.to_f64())
                }
            }

            impl Div<$t> for &Vector {
                type Output = Result<Vector>;

                fn div(self, rhs: $t) -> Result<Vector> {
                    self.div_scalar(rhs.to_f64())
                }
            }

        )*
    };
}

// The two scalar kinds a literal can infer to; other `Real` types go through
// the named methods.
impl_scalar_ops!(f64, i32);

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}
