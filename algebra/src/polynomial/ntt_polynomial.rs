use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut, SliceIndex};

use serde::{Deserialize, Serialize};

/// The image of a polynomial under a negacyclic transform.
///
/// `V` is the value type of the transform domain: residues modulo a
/// prime for a number theory transform, complex numbers for an FFT.
/// Arithmetic on the values belongs to the transform table that
/// produced them, see [`crate::ntt::NegacyclicTransform`].
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct NttPolynomial<V> {
    data: Vec<V>,
}

impl<V> From<Vec<V>> for NttPolynomial<V> {
    #[inline]
    fn from(data: Vec<V>) -> Self {
        Self { data }
    }
}

impl<V> NttPolynomial<V> {
    /// Creates a new [`NttPolynomial<V>`].
    #[inline]
    pub fn new(data: Vec<V>) -> Self {
        Self { data }
    }

    /// Drop self, and return the data.
    #[inline]
    pub fn inner_data(self) -> Vec<V> {
        self.data
    }

    /// Get the value counts of this transformed polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Extracts a slice containing all values.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    /// Extracts a mutable slice of all values.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.data
    }

    /// Returns an iterator over the values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each value.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.data.iter_mut()
    }
}

impl<V: Clone + Default> NttPolynomial<V> {
    /// Creates a [`NttPolynomial<V>`] with all values equal to the default value.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            data: vec![V::default(); coeff_count],
        }
    }
}

impl<V, I: SliceIndex<[V]>> Index<I> for NttPolynomial<V> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&*self.data, index)
    }
}

impl<V, I: SliceIndex<[V]>> IndexMut<I> for NttPolynomial<V> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut *self.data, index)
    }
}

impl<V> AsRef<[V]> for NttPolynomial<V> {
    #[inline]
    fn as_ref(&self) -> &[V] {
        &self.data
    }
}

impl<V> AsMut<[V]> for NttPolynomial<V> {
    #[inline]
    fn as_mut(&mut self) -> &mut [V] {
        &mut self.data
    }
}

impl<V> IntoIterator for NttPolynomial<V> {
    type Item = V;

    type IntoIter = std::vec::IntoIter<V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
