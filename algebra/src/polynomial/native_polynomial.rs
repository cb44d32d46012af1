use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};
use std::slice::{Iter, IterMut, SliceIndex};

use serde::{Deserialize, Serialize};

use crate::integer::Torus;

/// Represents a polynomial in the negacyclic ring `Z_{2^W}[X]/(X^N + 1)`,
/// where every coefficient is a torus element.
///
/// The coefficients are stored in a vector `data`, with the `i`-th element
/// representing the coefficient of the `X^i` term. All arithmetic wraps
/// modulo `2^W`.
///
/// # Examples
/// ```ignore
/// let poly = Polynomial::<u32>::new(vec![1, 2, 3, 4]);
/// // `poly` now represents the polynomial 1 + 2X + 3X^2 + 4X^3.
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Polynomial<T: Torus> {
    data: Vec<T>,
}

impl<T: Torus> From<Vec<T>> for Polynomial<T> {
    #[inline]
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Torus> Polynomial<T> {
    /// Creates a new [`Polynomial<T>`].
    #[inline]
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a [`Polynomial<T>`] with all coefficients equal to zero.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            data: vec![T::ZERO; coeff_count],
        }
    }

    /// Creates the monomial `coeff * X^degree` with `coeff_count` coefficients.
    #[inline]
    pub fn monomial(coeff: T, degree: usize, coeff_count: usize) -> Self {
        debug_assert!(degree < coeff_count);
        let mut poly = Self::zero(coeff_count);
        poly.data[degree] = coeff;
        poly
    }

    /// Drop self, and return the data.
    #[inline]
    pub fn inner_data(self) -> Vec<T> {
        self.data
    }

    /// Get the coefficient counts of polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Extracts a slice containing the entire polynomial.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Extracts a mutable slice of the entire polynomial.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator that allows reading each coefficient of the polynomial.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each coefficient of the polynomial.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns `true` if every coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == T::ZERO)
    }

    /// Negates every coefficient in place.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.data.iter_mut().for_each(|v| *v = v.wrapping_neg());
    }

    /// Multiplies `self` with an integer polynomial `rhs` in `Z_{2^W}[X]/(X^N + 1)`
    /// by the schoolbook method.
    ///
    /// This is `O(N^2)`. It serves as the reference result for the
    /// transform backends and for phase computation on small rings.
    pub fn mul_integer_naive(&self, rhs: &[i64]) -> Self {
        let n = self.coeff_count();
        debug_assert_eq!(n, rhs.len());

        let mut result = vec![T::ZERO; n];
        for (i, &a) in self.data.iter().enumerate() {
            if a == T::ZERO {
                continue;
            }
            for (j, &b) in rhs.iter().enumerate() {
                let prod = a.wrapping_mul(T::from_signed(b));
                let k = i + j;
                if k < n {
                    result[k].wrapping_add_assign(prod);
                } else {
                    result[k - n].wrapping_sub_assign(prod);
                }
            }
        }

        Self::new(result)
    }
}

impl<T: Torus, I: SliceIndex<[T]>> Index<I> for Polynomial<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&*self.data, index)
    }
}

impl<T: Torus, I: SliceIndex<[T]>> IndexMut<I> for Polynomial<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut *self.data, index)
    }
}

impl<T: Torus> AsRef<[T]> for Polynomial<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Torus> AsMut<[T]> for Polynomial<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Torus> IntoIterator for Polynomial<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Torus> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Torus> AddAssign<&Self> for Polynomial<T> {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        debug_assert_eq!(self.coeff_count(), rhs.coeff_count());
        self.data
            .iter_mut()
            .zip(rhs)
            .for_each(|(a, &b)| a.wrapping_add_assign(b));
    }
}

impl<T: Torus> SubAssign<&Self> for Polynomial<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        debug_assert_eq!(self.coeff_count(), rhs.coeff_count());
        self.data
            .iter_mut()
            .zip(rhs)
            .for_each(|(a, &b)| a.wrapping_sub_assign(b));
    }
}

impl<T: Torus> Add<&Self> for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Torus> Sub<&Self> for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Torus> Neg for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}
