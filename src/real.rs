//! Numeric capability accepted wherever a real scalar is expected

/// A value usable as a real number.
///
/// Implemented for the primitive integer and floating-point types. Entries are
/// stored as `f64` regardless of the input type, so integers wider than 53 bits
/// lose precision.
pub trait Real: Copy {
    /// Widen to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_real {
    ($($t:ty),* $(,)?) => {
        $(
            impl Real for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_real!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
