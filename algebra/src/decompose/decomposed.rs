use serde::{Deserialize, Serialize};

use crate::integer::Torus;
use crate::ntt::NegacyclicTransform;
use crate::polynomial::{NttPolynomial, Polynomial};

use super::GadgetBasis;

/// The `l` signed digit planes of a decomposed polynomial,
/// the most significant plane first.
///
/// Every coefficient of every plane lies in `[-Bg/2, Bg/2 - 1]`,
/// stored in two's complement at the torus width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DecomposedPolynomial<T: Torus> {
    basis: GadgetBasis<T>,
    planes: Vec<Polynomial<T>>,
}

impl<T: Torus> DecomposedPolynomial<T> {
    #[inline]
    pub(crate) fn new(basis: GadgetBasis<T>, planes: Vec<Polynomial<T>>) -> Self {
        debug_assert_eq!(planes.len(), basis.length());
        Self { basis, planes }
    }

    /// Returns the gadget basis the planes were produced with.
    #[inline]
    pub fn basis(&self) -> &GadgetBasis<T> {
        &self.basis
    }

    /// Returns the digit planes.
    #[inline]
    pub fn planes(&self) -> &[Polynomial<T>] {
        &self.planes
    }

    /// Returns the `i`-th digit plane.
    #[inline]
    pub fn plane(&self, i: usize) -> &Polynomial<T> {
        &self.planes[i]
    }

    /// Returns the number of digit planes.
    #[inline]
    pub fn length(&self) -> usize {
        self.planes.len()
    }

    /// Drop self, and return the digit planes.
    #[inline]
    pub fn into_planes(self) -> Vec<Polynomial<T>> {
        self.planes
    }

    /// Recomposes the planes into `Σ plane_i · gadget_value(i)`.
    pub fn recompose(&self) -> Polynomial<T> {
        let n = self.planes.first().map_or(0, Polynomial::coeff_count);
        let mut result = Polynomial::<T>::zero(n);
        for (i, plane) in self.planes.iter().enumerate() {
            let g = self.basis.gadget_value(i);
            result
                .iter_mut()
                .zip(plane)
                .for_each(|(r, &d)| r.wrapping_add_assign(d.wrapping_mul(g)));
        }
        result
    }

    /// Transforms every digit plane with `table`, keeping the plane order.
    pub fn transform<N: NegacyclicTransform>(
        &self,
        table: &N,
    ) -> NttDecomposedPolynomial<N::ValueT> {
        NttDecomposedPolynomial {
            planes: table.transform_batch(&self.planes),
        }
    }
}

/// The digit planes of a decomposed polynomial in the transform domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NttDecomposedPolynomial<V> {
    planes: Vec<NttPolynomial<V>>,
}

impl<V> NttDecomposedPolynomial<V> {
    /// Returns the transformed digit planes.
    #[inline]
    pub fn planes(&self) -> &[NttPolynomial<V>] {
        &self.planes
    }

    /// Returns the `i`-th transformed digit plane.
    #[inline]
    pub fn plane(&self, i: usize) -> &NttPolynomial<V> {
        &self.planes[i]
    }

    /// Returns the number of digit planes.
    #[inline]
    pub fn length(&self) -> usize {
        self.planes.len()
    }

    /// Drop self, and return the transformed digit planes.
    #[inline]
    pub fn into_planes(self) -> Vec<NttPolynomial<V>> {
        self.planes
    }
}
