use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::integer::Torus;
use crate::ntt::NegacyclicTransform;
use crate::polynomial::Polynomial;
use crate::AlgebraError;

use super::{DecomposedPolynomial, NttDecomposedPolynomial};

/// Coefficients per parallel task in [`GadgetBasis::par_decompose`].
const PAR_CHUNK: usize = 256;

/// The gadget basis `Bg = 2^log_basis` with `length` digits over a `W`-bit torus.
///
/// ## The structure members meet the following conditions:
///
/// 1. `basis = 1 << log_basis`, `mask = basis - 1`, `half_basis = basis / 2`
/// 1. `length * log_basis < W`
/// 1. `offset = Σ_{i=1..length} half_basis << (W - i * log_basis)`
/// 1. `round_offset = 1 << (W - length * log_basis - 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GadgetBasis<T: Torus> {
    log_basis: u32,
    length: usize,
    basis: T,
    mask: T,
    half_basis: T,
    offset: T,
    round_offset: T,
}

impl<T: Torus> GadgetBasis<T> {
    /// Creates a new [`GadgetBasis<T>`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidGadget`] if `log_basis` or `length` is `0`,
    /// or if `length * log_basis >= W`, which leaves no bit for rounding.
    #[instrument(level = "debug")]
    pub fn new(log_basis: u32, length: usize) -> Result<Self, AlgebraError> {
        let err = AlgebraError::InvalidGadget {
            log_basis,
            length,
            bits: T::BITS,
        };

        if log_basis == 0 || length == 0 {
            return Err(err);
        }
        let used_bits = u32::try_from(length)
            .ok()
            .and_then(|l| l.checked_mul(log_basis))
            .ok_or_else(|| err.clone())?;
        if used_bits >= T::BITS {
            return Err(err);
        }

        let basis = T::ONE << log_basis;
        let half_basis = T::ONE << (log_basis - 1);
        let mask = basis.wrapping_sub(T::ONE);

        let offset = (1..=length as u32).fold(T::ZERO, |acc, i| {
            acc.wrapping_add(half_basis << (T::BITS - i * log_basis))
        });
        let round_offset = T::ONE << (T::BITS - used_bits - 1);

        debug!(%offset, %round_offset, "gadget basis ready");

        Ok(Self {
            log_basis,
            length,
            basis,
            mask,
            half_basis,
            offset,
            round_offset,
        })
    }

    /// Returns the log basis `Bgbit` of this [`GadgetBasis<T>`].
    #[inline]
    pub fn log_basis(&self) -> u32 {
        self.log_basis
    }

    /// Returns the digit count `l` of this [`GadgetBasis<T>`].
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the basis value `Bg` of this [`GadgetBasis<T>`].
    #[inline]
    pub fn basis(&self) -> T {
        self.basis
    }

    /// Returns `Bg / 2`.
    #[inline]
    pub fn half_basis(&self) -> T {
        self.half_basis
    }

    /// Returns the offset which recenters every digit window.
    #[inline]
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Returns the round offset, half the weight of the first dropped bit.
    #[inline]
    pub fn round_offset(&self) -> T {
        self.round_offset
    }

    /// The largest distance between a value and the recomposition of its digits.
    #[inline]
    pub fn max_error(&self) -> T {
        self.round_offset
    }

    /// Returns the weight `2^(W - (i+1)·Bgbit)` of the `i`-th digit.
    #[inline]
    pub fn gadget_value(&self, i: usize) -> T {
        debug_assert!(i < self.length);
        T::ONE << self.shift(i)
    }

    /// Reads a digit as a signed integer.
    #[inline]
    pub fn signed_digit(&self, digit: T) -> i64 {
        digit.as_signed()
    }

    /// Maps a digit `d ∈ [-Bg/2, Bg/2 - 1]` to `d + Bg/2 ∈ [0, Bg)`.
    #[inline]
    pub fn digit_index(&self, digit: T) -> usize {
        digit.wrapping_add(self.half_basis).as_usize()
    }

    #[inline(always)]
    fn shift(&self, i: usize) -> u32 {
        T::BITS - (i as u32 + 1) * self.log_basis
    }

    /// Shifts `value` into the unsigned digit domain.
    #[inline(always)]
    fn prepare(&self, value: T) -> T {
        value
            .wrapping_add(self.offset)
            .wrapping_add(self.round_offset)
    }

    #[inline(always)]
    fn digit(&self, prepared: T, i: usize) -> T {
        ((prepared >> self.shift(i)) & self.mask).wrapping_sub(self.half_basis)
    }

    /// Decomposes `value` into `self.length()` signed digits,
    /// the most significant digit first.
    #[inline]
    pub fn decompose_scalar(&self, value: T, digits: &mut [T]) {
        debug_assert_eq!(digits.len(), self.length);
        let prepared = self.prepare(value);
        for (i, d) in digits.iter_mut().enumerate() {
            *d = self.digit(prepared, i);
        }
    }

    /// Returns an iterator over the signed digits of `value`,
    /// the most significant digit first.
    #[inline]
    pub fn decompose_scalar_iter(&self, value: T) -> impl Iterator<Item = T> {
        let basis = *self;
        let prepared = basis.prepare(value);
        (0..basis.length).map(move |i| basis.digit(prepared, i))
    }

    /// Recomposes digits into a torus value, `Σ d_i · gadget_value(i)`.
    #[inline]
    pub fn recompose(&self, digits: &[T]) -> T {
        debug_assert_eq!(digits.len(), self.length);
        digits
            .iter()
            .enumerate()
            .fold(T::ZERO, |acc, (i, &d)| {
                acc.wrapping_add(d.wrapping_mul(self.gadget_value(i)))
            })
    }

    /// Decomposes every coefficient of `poly` into `self.length()` digit planes.
    pub fn decompose(&self, poly: &Polynomial<T>) -> DecomposedPolynomial<T> {
        let n = poly.coeff_count();
        let mut planes = vec![Polynomial::zero(n); self.length];

        for (k, &c) in poly.iter().enumerate() {
            let prepared = self.prepare(c);
            for (i, plane) in planes.iter_mut().enumerate() {
                plane[k] = self.digit(prepared, i);
            }
        }

        DecomposedPolynomial::new(*self, planes)
    }

    /// Same as [`GadgetBasis::decompose`], computing digit planes
    /// and coefficient chunks in parallel.
    pub fn par_decompose(&self, poly: &Polynomial<T>) -> DecomposedPolynomial<T> {
        let n = poly.coeff_count();
        let planes: Vec<Polynomial<T>> = (0..self.length)
            .into_par_iter()
            .map(|i| {
                let mut plane = vec![T::ZERO; n];
                plane
                    .par_chunks_mut(PAR_CHUNK)
                    .zip(poly.as_slice().par_chunks(PAR_CHUNK))
                    .for_each(|(out, input)| {
                        for (d, &c) in out.iter_mut().zip(input) {
                            *d = self.digit(self.prepare(c), i);
                        }
                    });
                Polynomial::new(plane)
            })
            .collect();

        DecomposedPolynomial::new(*self, planes)
    }

    /// Decomposes `poly` and transforms every digit plane with `table`.
    pub fn decompose_ntt<N: NegacyclicTransform>(
        &self,
        poly: &Polynomial<T>,
        table: &N,
    ) -> NttDecomposedPolynomial<N::ValueT> {
        self.decompose(poly).transform(table)
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::*};

    use super::*;

    #[test]
    fn test_offset_constants() {
        let lvl1 = GadgetBasis::<u32>::new(6, 3).unwrap();
        assert_eq!(lvl1.offset(), 0x8208_0000);
        assert_eq!(lvl1.round_offset(), 1 << 13);
        assert_eq!(lvl1.basis(), 64);

        let lvl2 = GadgetBasis::<u64>::new(9, 4).unwrap();
        assert_eq!(lvl2.offset(), 0x8040_2010_0000_0000);
        assert_eq!(lvl2.round_offset(), 1 << 27);
        assert_eq!(lvl2.gadget_value(0), 1 << 55);
        assert_eq!(lvl2.gadget_value(3), 1 << 28);
    }

    #[test]
    fn test_invalid_gadget() {
        assert!(GadgetBasis::<u32>::new(0, 3).is_err());
        assert!(GadgetBasis::<u32>::new(6, 0).is_err());
        assert_eq!(
            GadgetBasis::<u32>::new(8, 4).unwrap_err(),
            AlgebraError::InvalidGadget {
                log_basis: 8,
                length: 4,
                bits: 32
            }
        );
        assert!(GadgetBasis::<u64>::new(16, 4).is_err());
        assert!(GadgetBasis::<u64>::new(21, 3).is_ok());
    }

    #[test]
    fn test_quarter_torus() {
        let basis = GadgetBasis::<u64>::new(9, 4).unwrap();
        let value = 0x4000_0000_0000_0000u64;

        let digits: Vec<u64> = basis.decompose_scalar_iter(value).collect();
        assert_eq!(digits, [128, 0, 0, 0]);
        assert_eq!(basis.recompose(&digits), value);
    }

    #[test]
    fn test_negative_digits() {
        let basis = GadgetBasis::<u32>::new(6, 3).unwrap();
        let mut digits = [0u32; 3];

        // -1/64 is a single digit of -1 in the first window.
        basis.decompose_scalar((1u32 << 26).wrapping_neg(), &mut digits);
        assert_eq!(digits.map(|d| basis.signed_digit(d)), [-1, 0, 0]);
        assert_eq!(basis.digit_index(digits[0]), 31);

        // 1/2 is the boundary value and maps to -Bg/2.
        basis.decompose_scalar(1 << 31, &mut digits);
        assert_eq!(digits.map(|d| basis.signed_digit(d)), [-32, 0, 0]);
        assert_eq!(basis.digit_index(digits[0]), 0);
    }

    #[test]
    fn test_digit_range_and_error() {
        let mut rng = thread_rng();

        let basis = GadgetBasis::<u32>::new(6, 3).unwrap();
        let half = 32i64;
        let mut digits = [0u32; 3];
        for _ in 0..1000 {
            let value: u32 = rng.gen();
            basis.decompose_scalar(value, &mut digits);
            for &d in &digits {
                let s = basis.signed_digit(d);
                assert!((-half..half).contains(&s));
                assert!(basis.digit_index(d) < 64);
            }
            let back = basis.recompose(&digits);
            assert!(Torus::distance(back, value) <= basis.max_error());
        }

        let basis = GadgetBasis::<u64>::new(9, 4).unwrap();
        let dis = Uniform::new_inclusive(0, u64::MAX);
        for _ in 0..1000 {
            let value = rng.sample(dis);
            let digits: Vec<u64> = basis.decompose_scalar_iter(value).collect();
            assert!(digits
                .iter()
                .all(|&d| (-256..256).contains(&basis.signed_digit(d))));
            let back = basis.recompose(&digits);
            assert!(Torus::distance(back, value) <= basis.max_error());
        }
    }

    #[test]
    fn test_par_decompose() {
        let mut rng = thread_rng();
        let basis = GadgetBasis::<u64>::new(9, 4).unwrap();
        let poly = Polynomial::new((0..1024).map(|_| rng.gen::<u64>()).collect());

        let seq = basis.decompose(&poly);
        let par = basis.par_decompose(&poly);
        assert_eq!(seq, par);
        assert_eq!(seq.length(), 4);

        for (k, &c) in poly.iter().enumerate() {
            let column: Vec<u64> = seq.planes().iter().map(|p| p[k]).collect();
            assert_eq!(column, basis.decompose_scalar_iter(c).collect::<Vec<_>>());
        }
    }
}
