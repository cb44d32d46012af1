//! By-value wrapping arithmetic.
//!
//! Torus arithmetic is arithmetic modulo `2^W`, so every operation here
//! wraps silently at the boundary of the type.

macro_rules! impl_wrapping {
    ($($t:ty)*) => ($(
        impl WrappingOps for $t {
            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline(always)]
            fn wrapping_add_assign(&mut self, rhs: Self) {
                *self = <$t>::wrapping_add(*self, rhs);
            }

            #[inline(always)]
            fn wrapping_sub_assign(&mut self, rhs: Self) {
                *self = <$t>::wrapping_sub(*self, rhs);
            }
        }
    )*)
}

/// Addition, subtraction, multiplication and negation modulo `2^BITS`.
pub trait WrappingOps: Sized + Copy {
    /// Computes `self + rhs`, wrapping around at the boundary of the type.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Computes `self - rhs`, wrapping around at the boundary of the type.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Computes `self * rhs`, wrapping around at the boundary of the type.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Computes `-self`, wrapping around at the boundary of the type.
    fn wrapping_neg(self) -> Self;

    /// Performs `self += rhs` with wrapping.
    fn wrapping_add_assign(&mut self, rhs: Self);

    /// Performs `self -= rhs` with wrapping.
    fn wrapping_sub_assign(&mut self, rhs: Self);
}

impl_wrapping!(u32 u64);
