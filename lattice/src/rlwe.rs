use algebra::polynomial::Polynomial;
use algebra::Torus;
use serde::{Deserialize, Serialize};

use crate::Lwe;

/// A cryptographic structure for Ring Learning with Errors (RLWE) over
/// the torus polynomial ring `Z_{2^W}[X]/(X^N + 1)`.
///
/// The body satisfies `b = a * s + m + e`. The secret key `s` is an
/// integer polynomial, usually with binary coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rlwe<T: Torus> {
    a: Polynomial<T>,
    b: Polynomial<T>,
}

impl<T: Torus> From<(Polynomial<T>, Polynomial<T>)> for Rlwe<T> {
    #[inline]
    fn from((a, b): (Polynomial<T>, Polynomial<T>)) -> Self {
        Self::new(a, b)
    }
}

impl<T: Torus> Rlwe<T> {
    /// Creates a new [`Rlwe<T>`].
    #[inline]
    pub fn new(a: Polynomial<T>, b: Polynomial<T>) -> Self {
        debug_assert_eq!(a.coeff_count(), b.coeff_count());
        Self { a, b }
    }

    /// Creates a new [`Rlwe<T>`] that is initialized to zero.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            a: Polynomial::zero(coeff_count),
            b: Polynomial::zero(coeff_count),
        }
    }

    /// Returns a reference to the `a` of this [`Rlwe<T>`].
    #[inline]
    pub fn a(&self) -> &Polynomial<T> {
        &self.a
    }

    /// Returns a reference to the `b` of this [`Rlwe<T>`].
    #[inline]
    pub fn b(&self) -> &Polynomial<T> {
        &self.b
    }

    /// Returns the polynomial degree `N` of this [`Rlwe<T>`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.a.coeff_count()
    }

    /// Computes the phase `b - a * s` with the schoolbook product.
    pub fn phase(&self, secret_key: &[i64]) -> Polynomial<T> {
        self.b.clone() - &self.a.mul_integer_naive(secret_key)
    }

    /// Extracts the [`Lwe<T>`] sample of the coefficient `index`.
    ///
    /// The result has dimension `N`, and its phase under the coefficient
    /// vector of `s` equals the `index`-th coefficient of the phase of `self`.
    pub fn sample_extract_index(&self, index: usize) -> Lwe<T> {
        debug_assert!(index < self.dimension());
        let split = index + 1;

        let mut a = self.a.as_slice().to_vec();

        a[..split].reverse();
        a[split..].reverse();
        a[split..].iter_mut().for_each(|x| *x = x.wrapping_neg());

        Lwe::new(a, self.b[index])
    }
}
