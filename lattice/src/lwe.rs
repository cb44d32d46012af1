use algebra::Torus;
use serde::{Deserialize, Serialize};

/// Represents a cryptographic structure based on the Learning with Errors (LWE) problem
/// over the torus `Z_{2^W}`.
///
/// The body satisfies `b = <a, s> + m + e`, so the phase is `b - <a, s>`.
/// All arithmetic wraps modulo `2^W`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Lwe<T: Torus> {
    /// A vector of elements of `T`, representing the public vector part of the LWE instance.
    a: Vec<T>,
    /// An element of `T`, representing the value which is computed as
    /// the dot product of `a` with a secret vector, plus message and some noise.
    b: T,
}

impl<T: Torus> Lwe<T> {
    /// Creates a new [`Lwe<T>`].
    #[inline]
    pub fn new(a: Vec<T>, b: T) -> Self {
        Self { a, b }
    }

    /// Generates a [`Lwe<T>`] with all values are `0`.
    #[inline]
    pub fn zero(dimension: usize) -> Self {
        Self {
            a: vec![T::ZERO; dimension],
            b: T::ZERO,
        }
    }

    /// Returns a reference to the `a` of this [`Lwe<T>`].
    #[inline]
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Returns a mutable reference to the `a` of this [`Lwe<T>`].
    #[inline]
    pub fn a_mut(&mut self) -> &mut [T] {
        &mut self.a
    }

    /// Returns the `b` of this [`Lwe<T>`].
    #[inline]
    pub fn b(&self) -> T {
        self.b
    }

    /// Returns a mutable reference to the `b` of this [`Lwe<T>`].
    #[inline]
    pub fn b_mut(&mut self) -> &mut T {
        &mut self.b
    }

    /// Returns the dimension of this [`Lwe<T>`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.a.len()
    }

    /// Perform component-wise addition of two [`Lwe<T>`].
    ///
    /// # Attention
    ///
    /// In this function, `self` is a reference.
    /// If your `self` is not a reference, you can use function `add_component_wise`.
    #[inline]
    pub fn add_component_wise_ref(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.dimension(), rhs.dimension());
        Self::new(
            self.a
                .iter()
                .zip(rhs.a())
                .map(|(&a, &b)| a.wrapping_add(b))
                .collect(),
            self.b.wrapping_add(rhs.b),
        )
    }

    /// Perform component-wise addition of two [`Lwe<T>`].
    #[inline]
    pub fn add_component_wise(mut self, rhs: &Self) -> Self {
        self.add_assign_component_wise(rhs);
        self
    }

    /// Performs an in-place component-wise addition
    /// on the `self` [`Lwe<T>`] with another `rhs` [`Lwe<T>`].
    #[inline]
    pub fn add_assign_component_wise(&mut self, rhs: &Self) {
        debug_assert_eq!(self.dimension(), rhs.dimension());
        self.a
            .iter_mut()
            .zip(rhs.a())
            .for_each(|(a, &b)| a.wrapping_add_assign(b));
        self.b.wrapping_add_assign(rhs.b);
    }

    /// Perform component-wise subtraction of two [`Lwe<T>`].
    ///
    /// # Attention
    ///
    /// In this function, `self` is a reference.
    /// If your `self` is not a reference, you can use function `sub_component_wise`.
    #[inline]
    pub fn sub_component_wise_ref(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.dimension(), rhs.dimension());
        Self::new(
            self.a
                .iter()
                .zip(rhs.a())
                .map(|(&a, &b)| a.wrapping_sub(b))
                .collect(),
            self.b.wrapping_sub(rhs.b),
        )
    }

    /// Perform component-wise subtraction of two [`Lwe<T>`].
    #[inline]
    pub fn sub_component_wise(mut self, rhs: &Self) -> Self {
        self.sub_assign_component_wise(rhs);
        self
    }

    /// Performs an in-place component-wise subtraction
    /// on the `self` [`Lwe<T>`] with another `rhs` [`Lwe<T>`].
    #[inline]
    pub fn sub_assign_component_wise(&mut self, rhs: &Self) {
        debug_assert_eq!(self.dimension(), rhs.dimension());
        self.a
            .iter_mut()
            .zip(rhs.a())
            .for_each(|(a, &b)| a.wrapping_sub_assign(b));
        self.b.wrapping_sub_assign(rhs.b);
    }

    /// Performs an in-place scalar multiplication
    /// on the `self` [`Lwe<T>`] with scalar `T`.
    #[inline]
    pub fn mul_scalar_assign(&mut self, scalar: T) {
        self.a
            .iter_mut()
            .for_each(|v| *v = v.wrapping_mul(scalar));
        self.b = self.b.wrapping_mul(scalar);
    }

    /// Performs an in-place negation on the `self` [`Lwe<T>`].
    #[inline]
    pub fn neg_assign(&mut self) {
        self.a.iter_mut().for_each(|v| *v = v.wrapping_neg());
        self.b = self.b.wrapping_neg();
    }

    /// Computes the phase `b - <a, s>` under the secret key `s`.
    pub fn phase(&self, secret_key: &[T]) -> T {
        debug_assert_eq!(self.dimension(), secret_key.len());
        let dot = self
            .a
            .iter()
            .zip(secret_key)
            .fold(T::ZERO, |acc, (&a, &s)| acc.wrapping_add(a.wrapping_mul(s)));
        self.b.wrapping_sub(dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase() {
        let s = [1u32, 0, 1, 1];
        let a = vec![5u32, 7, u32::MAX, 3];
        // <a, s> = 5 - 1 + 3 = 7
        let lwe = Lwe::new(a, 7u32.wrapping_add(100));
        assert_eq!(lwe.phase(&s), 100);

        let mut neg = lwe.clone();
        neg.neg_assign();
        assert_eq!(neg.phase(&s), 100u32.wrapping_neg());
        assert_eq!(neg.add_component_wise(&lwe), Lwe::zero(4));
    }
}
