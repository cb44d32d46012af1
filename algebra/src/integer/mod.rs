//! Defines the torus element type.
//!
//! A torus element is an unsigned integer of width `W` read as the
//! fraction `value / 2^W` in `[0, 1)`.

mod wrapping;

use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{BitAnd, BitOr, Not, Shl, Shr},
};

use num_traits::{ConstOne, ConstZero, Unsigned};
use rand::distributions::uniform::SampleUniform;
use serde::{de::DeserializeOwned, Serialize};

pub use wrapping::WrappingOps;

/// An unsigned integer of fixed width used as a torus element.
pub trait Torus:
    'static
    + Sized
    + Send
    + Sync
    + Copy
    + Default
    + Debug
    + Display
    + Eq
    + Ord
    + Hash
    + Unsigned
    + ConstZero
    + ConstOne
    + WrappingOps
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + SampleUniform
    + Serialize
    + DeserializeOwned
{
    /// Bit width `W` of the torus.
    const BITS: u32;

    /// The largest value, `2^W - 1`.
    const MAX: Self;

    /// Reinterprets `self` as a signed `W`-bit integer, sign-extended to `i64`.
    fn as_signed(self) -> i64;

    /// Wraps a signed integer into `W` bits.
    fn from_signed(value: i64) -> Self;

    /// Converts the low bits of `self` into a `usize`.
    fn as_usize(self) -> usize;

    /// Wraps a `usize` into `W` bits.
    fn from_usize(value: usize) -> Self;

    /// Returns the fraction `self / 2^W`.
    fn to_fraction(self) -> f64;

    /// Rounds the fractional part of `value` to the nearest torus element.
    fn from_fraction(value: f64) -> Self;

    /// Minimal wraparound distance between `self` and `other`.
    #[inline]
    fn distance(self, other: Self) -> Self {
        let d0 = self.wrapping_sub(other);
        let d1 = other.wrapping_sub(self);
        if d0 < d1 {
            d0
        } else {
            d1
        }
    }
}

macro_rules! impl_torus {
    ($t:ty, $s:ty) => {
        impl Torus for $t {
            const BITS: u32 = <$t>::BITS;

            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn as_signed(self) -> i64 {
                self as $s as i64
            }

            #[inline(always)]
            fn from_signed(value: i64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn as_usize(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn from_usize(value: usize) -> Self {
                value as $t
            }

            #[inline]
            fn to_fraction(self) -> f64 {
                self as f64 / 2f64.powi(<$t>::BITS as i32)
            }

            #[inline]
            fn from_fraction(value: f64) -> Self {
                let fraction = value - value.floor();
                (fraction * 2f64.powi(<$t>::BITS as i32)).round() as u128 as $t
            }
        }
    };
}

impl_torus!(u32, i32);
impl_torus!(u64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_reinterpretation() {
        assert_eq!(u32::MAX.as_signed(), -1);
        assert_eq!(<u32 as Torus>::from_signed(-1), u32::MAX);
        assert_eq!(0x8000_0000u32.as_signed(), i32::MIN as i64);
        assert_eq!((1u64 << 63).as_signed(), i64::MIN);
        assert_eq!(<u64 as Torus>::from_signed(-256), u64::MAX - 255);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(<u32 as Torus>::from_fraction(0.25), 1 << 30);
        assert_eq!(<u32 as Torus>::from_fraction(-0.25), 3 << 30);
        assert_eq!(<u64 as Torus>::from_fraction(1.0), 0);
        assert_eq!((1u64 << 63).to_fraction(), 0.5);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Torus::distance(1u32, u32::MAX), 2);
        assert_eq!(Torus::distance(10u64, 4u64), 6);
    }
}
