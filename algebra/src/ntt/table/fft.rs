use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use itertools::izip;
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use tracing::{debug, instrument};

use crate::ntt::{NegacyclicTransform, NttTable};
use crate::AlgebraError;

/// A negacyclic transform backed by a complex FFT of `n` points.
///
/// The input is twisted by `exp(iπj/n)`, so the `n`-point cyclic FFT evaluates
/// the polynomial at the odd powers of a primitive `2n`-th root of unity.
/// The inverse untwists, scales by `1/n` and rounds to the nearest integer,
/// wrapping modulo `2^64`.
///
/// Results are exact only while every intermediate coefficient stays well
/// inside the `f64` mantissa, roughly `|x| < 2^50` for products.
#[derive(Clone)]
pub struct ComplexFftTable {
    log_n: u32,
    n: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    twist: Vec<Complex64>,
    inv_twist: Vec<Complex64>,
}

impl fmt::Debug for ComplexFftTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplexFftTable")
            .field("log_n", &self.log_n)
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl NttTable for ComplexFftTable {
    type ValueT = Complex64;

    #[instrument(level = "debug")]
    fn new(log_n: u32) -> Result<Self, AlgebraError> {
        if log_n == 0 || log_n > 31 {
            return Err(AlgebraError::InvalidDimension { log_n });
        }

        let n = 1usize << log_n;
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(n);
        let inverse = planner.plan_fft_inverse(n);

        let scale = (n as f64).recip();
        let twist: Vec<Complex64> = (0..n)
            .map(|j| Complex64::cis(PI * j as f64 / n as f64))
            .collect();
        let inv_twist: Vec<Complex64> = twist.iter().map(|w| w.conj() * scale).collect();

        debug!(n, "complex fft table ready");

        Ok(Self {
            log_n,
            n,
            forward,
            inverse,
            twist,
            inv_twist,
        })
    }

    #[inline(always)]
    fn dimension(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn log_dimension(&self) -> u32 {
        self.log_n
    }
}

impl NegacyclicTransform for ComplexFftTable {
    const MAX_MAGNITUDE: u64 = 1 << 50;

    fn transform_slice(&self, coeffs: &[i64], values: &mut [Complex64]) {
        debug_assert_eq!(coeffs.len(), self.n);
        debug_assert_eq!(values.len(), self.n);
        debug_assert!(coeffs.iter().all(|c| c.unsigned_abs() <= Self::MAX_MAGNITUDE));

        values
            .iter_mut()
            .zip(coeffs)
            .zip(&self.twist)
            .for_each(|((v, &c), &w)| *v = w * c as f64);

        self.forward.process(values);
    }

    fn inverse_transform_slice(&self, values: &[Complex64], coeffs: &mut [i64]) {
        debug_assert_eq!(coeffs.len(), self.n);
        debug_assert_eq!(values.len(), self.n);

        let mut buf = values.to_vec();
        self.inverse.process(&mut buf);

        coeffs
            .iter_mut()
            .zip(buf)
            .zip(&self.inv_twist)
            .for_each(|((c, v), &w)| *c = (v * w).re.round() as i128 as i64);
    }

    #[inline]
    fn mul_assign_values(&self, a: &mut [Complex64], b: &[Complex64]) {
        debug_assert_eq!(a.len(), b.len());
        a.iter_mut().zip(b).for_each(|(x, &y)| *x *= y);
    }

    #[inline]
    fn add_mul_assign_values(&self, acc: &mut [Complex64], a: &[Complex64], b: &[Complex64]) {
        debug_assert_eq!(acc.len(), a.len());
        debug_assert_eq!(acc.len(), b.len());
        for (r, &x, &y) in izip!(acc, a, b) {
            *r += x * y;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::*};

    use super::*;

    #[test]
    fn test_transform_inverse() {
        let mut rng = thread_rng();
        let table = ComplexFftTable::new(10).unwrap();
        let dis = Uniform::new_inclusive(-(1i64 << 31), 1i64 << 31);

        let coeffs: Vec<i64> = (&mut rng).sample_iter(dis).take(1024).collect();
        let values = table.transform(&coeffs);
        assert_eq!(table.inverse_transform(&values), coeffs);
    }

    #[test]
    fn test_negacyclic_monomial() {
        let table = ComplexFftTable::new(4).unwrap();
        let mut a = [0i64; 16];
        let mut b = [0i64; 16];
        a[15] = 3;
        b[2] = -5;

        // 3X^15 * -5X^2 = -15X^17 = 15X
        let mut expected = [0i64; 16];
        expected[1] = 15;
        assert_eq!(table.negacyclic_mul(&a, &b), expected);
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(ComplexFftTable::new(0).is_err());
    }
}
