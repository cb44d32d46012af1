use crate::reduce::*;
use crate::AlgebraError;

/// The Goldilocks prime `2^64 - 2^32 + 1`.
pub const GOLDILOCKS_P: u64 = 0xFFFF_FFFF_0000_0001;

/// `2^64 mod P`, which is `2^32 - 1`.
const EPSILON: u64 = 0xFFFF_FFFF;

/// A generator of the multiplicative group of the Goldilocks field.
const GENERATOR: u64 = 7;

/// `P - 1 = 2^32 * (2^32 - 1)`.
const TWO_ADICITY: u32 = 32;

/// The prime modulus `2^64 - 2^32 + 1`.
///
/// Every power-of-two cyclotomic of degree up to `2^31` splits over it,
/// and its special form gives a cheap 128-bit reduction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GoldilocksModulus;

impl GoldilocksModulus {
    /// Returns the value of the modulus.
    #[inline]
    pub const fn value(self) -> u64 {
        GOLDILOCKS_P
    }

    /// Maps a signed integer to its residue.
    ///
    /// # Correctness
    ///
    /// - `|value| < P`, which always holds for `i64`.
    #[inline]
    pub fn lift_signed(self, value: i64) -> u64 {
        if value >= 0 {
            value as u64
        } else {
            GOLDILOCKS_P - value.unsigned_abs()
        }
    }

    /// Maps a residue to its centered representative in `[-(P-1)/2, (P-1)/2]`.
    #[inline]
    pub fn center(self, value: u64) -> i64 {
        if value > GOLDILOCKS_P >> 1 {
            -((GOLDILOCKS_P - value) as i64)
        } else {
            value as i64
        }
    }

    /// Try to get a primitive `2^log_degree`-th root of unity.
    pub fn try_primitive_root(self, log_degree: u32) -> Result<u64, AlgebraError> {
        if log_degree > TWO_ADICITY {
            return Err(AlgebraError::NoPrimitiveRoot { log_degree });
        }

        let exp = (GOLDILOCKS_P - 1) >> log_degree;
        let root = self.reduce_pow(GENERATOR, exp);

        if log_degree > 0 && self.reduce_pow(root, 1u64 << (log_degree - 1)) != GOLDILOCKS_P - 1 {
            return Err(AlgebraError::NoPrimitiveRoot { log_degree });
        }

        Ok(root)
    }
}

/// Reduces a 128-bit value, using `2^64 ≡ 2^32 - 1` and `2^96 ≡ -1`.
#[inline(always)]
fn reduce128(value: u128) -> u64 {
    let lo = value as u64;
    let hi = (value >> 64) as u64;
    let hi_hi = hi >> 32;
    let hi_lo = hi & EPSILON;

    let (mut t0, borrow) = lo.overflowing_sub(hi_hi);
    if borrow {
        t0 = t0.wrapping_sub(EPSILON);
    }
    let t1 = hi_lo * EPSILON;

    let (r, carry) = t0.overflowing_add(t1);
    let r = r.wrapping_add(EPSILON * carry as u64);

    if r >= GOLDILOCKS_P {
        r - GOLDILOCKS_P
    } else {
        r
    }
}

impl Reduce<u64> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u64) -> Self::Output {
        if value >= GOLDILOCKS_P {
            value - GOLDILOCKS_P
        } else {
            value
        }
    }
}

impl Reduce<u128> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u128) -> Self::Output {
        reduce128(value)
    }
}

impl ReduceAdd<u64> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce_add(self, a: u64, b: u64) -> Self::Output {
        let (sum, overflow) = a.overflowing_add(b);
        if overflow || sum >= GOLDILOCKS_P {
            sum.wrapping_sub(GOLDILOCKS_P)
        } else {
            sum
        }
    }
}

impl ReduceAddAssign<u64> for GoldilocksModulus {
    #[inline]
    fn reduce_add_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_add(*a, b);
    }
}

impl ReduceSub<u64> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce_sub(self, a: u64, b: u64) -> Self::Output {
        if a >= b {
            a - b
        } else {
            a.wrapping_sub(b).wrapping_add(GOLDILOCKS_P)
        }
    }
}

impl ReduceSubAssign<u64> for GoldilocksModulus {
    #[inline]
    fn reduce_sub_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_sub(*a, b);
    }
}

impl ReduceNeg<u64> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce_neg(self, value: u64) -> Self::Output {
        if value == 0 {
            0
        } else {
            GOLDILOCKS_P - value
        }
    }
}

impl ReduceMul<u64> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce_mul(self, a: u64, b: u64) -> Self::Output {
        reduce128(a as u128 * b as u128)
    }
}

impl ReduceMulAssign<u64> for GoldilocksModulus {
    #[inline]
    fn reduce_mul_assign(self, a: &mut u64, b: u64) {
        *a = reduce128(*a as u128 * b as u128);
    }
}

impl ReducePow<u64> for GoldilocksModulus {
    type Output = u64;

    fn reduce_pow(self, base: u64, mut exp: u64) -> Self::Output {
        let mut power = self.reduce(base);
        let mut result = 1u64;
        while exp > 0 {
            if exp & 1 == 1 {
                self.reduce_mul_assign(&mut result, power);
            }
            power = self.reduce_mul(power, power);
            exp >>= 1;
        }
        result
    }
}

impl ReduceInv<u64> for GoldilocksModulus {
    type Output = u64;

    #[inline]
    fn reduce_inv(self, value: u64) -> Self::Output {
        debug_assert_ne!(self.reduce(value), 0);
        self.reduce_pow(value, GOLDILOCKS_P - 2)
    }
}
