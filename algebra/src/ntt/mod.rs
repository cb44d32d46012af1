//! This module mainly defines and implements
//! the negacyclic transforms used by gadget decomposition.
//!
//! A transform maps `Z[X]/(X^N + 1)` onto `N` evaluation points so that
//! negacyclic convolution becomes pointwise multiplication. Each backend
//! twists its input by powers of a primitive `2N`-th root of unity and
//! then runs a cyclic transform of length `N`.
//!
//! Tables are built once and only read afterwards, so a single table
//! can be shared by reference across threads.

use std::fmt::Debug;

use rayon::prelude::*;

use crate::integer::Torus;
use crate::polynomial::{NttPolynomial, Polynomial};
use crate::AlgebraError;

mod table;

pub use table::*;

/// Pre-computed data of a transform of fixed dimension.
pub trait NttTable: Sized + Send + Sync {
    /// The value type of the transform domain.
    type ValueT: Copy + Default + Debug + PartialEq + Send + Sync;

    /// Creates a new table for polynomials with `2^log_n` coefficients.
    fn new(log_n: u32) -> Result<Self, AlgebraError>;

    /// Get the polynomial modulus degree.
    fn dimension(&self) -> usize;

    /// Get the log of the polynomial modulus degree.
    fn log_dimension(&self) -> u32;
}

/// A deterministic, invertible negacyclic transform.
///
/// `inverse_transform(transform(x)) == x` whenever every coefficient of `x`
/// satisfies `|x_j| <= MAX_MAGNITUDE`. Pointwise multiplication of two images
/// corresponds to multiplication in `Z[X]/(X^N + 1)`, and the product is
/// recovered as long as its coefficients stay within the same bound.
/// Outside of it results wrap modulo the backend's modulus or lose precision.
pub trait NegacyclicTransform: NttTable {
    /// The largest coefficient magnitude an input or result may have.
    const MAX_MAGNITUDE: u64;

    /// Transforms a signed coefficient sequence into `values`.
    ///
    /// Every coefficient must satisfy `|c| <= MAX_MAGNITUDE`.
    ///
    /// # Arguments
    ///
    /// * `coeffs` - inputs in normal order
    /// * `values` - outputs in normal order of evaluation points
    fn transform_slice(&self, coeffs: &[i64], values: &mut [Self::ValueT]);

    /// Transforms `values` back into a signed coefficient sequence.
    fn inverse_transform_slice(&self, values: &[Self::ValueT], coeffs: &mut [i64]);

    /// Performs `a[i] *= b[i]` in the transform domain.
    fn mul_assign_values(&self, a: &mut [Self::ValueT], b: &[Self::ValueT]);

    /// Performs `acc[i] += a[i] * b[i]` in the transform domain.
    fn add_mul_assign_values(
        &self,
        acc: &mut [Self::ValueT],
        a: &[Self::ValueT],
        b: &[Self::ValueT],
    );

    /// Perform a forward transform of a signed coefficient sequence.
    #[inline]
    fn transform(&self, coeffs: &[i64]) -> NttPolynomial<Self::ValueT> {
        let mut values = vec![<Self::ValueT as Default>::default(); self.dimension()];
        self.transform_slice(coeffs, &mut values);
        NttPolynomial::new(values)
    }

    /// Perform an inverse transform into a signed coefficient sequence.
    #[inline]
    fn inverse_transform(&self, values: &NttPolynomial<Self::ValueT>) -> Vec<i64> {
        let mut coeffs = vec![0i64; self.dimension()];
        self.inverse_transform_slice(values.as_slice(), &mut coeffs);
        coeffs
    }

    /// Perform a forward transform of a torus polynomial,
    /// reading each coefficient as a signed `W`-bit integer.
    ///
    /// This is the representation of decomposed digits. The round trip
    /// through [`NegacyclicTransform::inverse_transform_torus`] is exact
    /// only if every signed coefficient satisfies `|c| <= MAX_MAGNITUDE`,
    /// which holds for every `u32` torus and for gadget digits of at most 50 bits.
    #[inline]
    fn transform_torus<T: Torus>(&self, poly: &Polynomial<T>) -> NttPolynomial<Self::ValueT> {
        let coeffs: Vec<i64> = poly.iter().map(|&c| c.as_signed()).collect();
        self.transform(&coeffs)
    }

    /// Perform an inverse transform, wrapping each coefficient into `W` bits.
    #[inline]
    fn inverse_transform_torus<T: Torus>(
        &self,
        values: &NttPolynomial<Self::ValueT>,
    ) -> Polynomial<T> {
        self.inverse_transform(values)
            .into_iter()
            .map(T::from_signed)
            .collect::<Vec<T>>()
            .into()
    }

    /// Multiplies two integer polynomials in `Z[X]/(X^N + 1)` through the transform domain.
    fn negacyclic_mul(&self, a: &[i64], b: &[i64]) -> Vec<i64> {
        let mut a = self.transform(a);
        let b = self.transform(b);
        self.mul_assign_values(a.as_mut_slice(), b.as_slice());
        self.inverse_transform(&a)
    }

    /// Transforms a batch of torus polynomials.
    ///
    /// The batch may be processed in parallel, the results keep the input order.
    fn transform_batch<T: Torus>(&self, polys: &[Polynomial<T>]) -> Vec<NttPolynomial<Self::ValueT>> {
        polys.par_iter().map(|p| self.transform_torus(p)).collect()
    }

    /// Inverse transforms a batch, keeping the input order.
    fn inverse_transform_batch<T: Torus>(
        &self,
        values: &[NttPolynomial<Self::ValueT>],
    ) -> Vec<Polynomial<T>> {
        values
            .par_iter()
            .map(|v| self.inverse_transform_torus(v))
            .collect()
    }
}
