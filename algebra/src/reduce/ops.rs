/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    fn reduce(self, value: T) -> Self::Output;
}

/// The modular addition.
pub trait ReduceAdd<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a + b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_add(self, a: T, b: B) -> Self::Output;
}

/// The modular addition assignment.
pub trait ReduceAddAssign<T, B = T> {
    /// Calculates `a += b (mod modulus)` where `self` is modulus.
    fn reduce_add_assign(self, a: &mut T, b: B);
}

/// The modular subtraction.
pub trait ReduceSub<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a - b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_sub(self, a: T, b: B) -> Self::Output;
}

/// The modular subtraction assignment.
pub trait ReduceSubAssign<T, B = T> {
    /// Calculates `a -= b (mod modulus)` where `self` is modulus.
    fn reduce_sub_assign(self, a: &mut T, b: B);
}

/// The modular negation.
pub trait ReduceNeg<T> {
    /// Output type.
    type Output;

    /// Calculates `-value (mod modulus)` where `self` is modulus.
    fn reduce_neg(self, value: T) -> Self::Output;
}

/// The modular multiplication.
pub trait ReduceMul<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a * b (mod modulus)` where `self` is modulus.
    fn reduce_mul(self, a: T, b: B) -> Self::Output;
}

/// The modular multiplication assignment.
pub trait ReduceMulAssign<T, B = T> {
    /// Calculates `a *= b (mod modulus)` where `self` is modulus.
    fn reduce_mul_assign(self, a: &mut T, b: B);
}

/// The modular exponentiation.
pub trait ReducePow<T, E = u64> {
    /// Output type.
    type Output;

    /// Calculates `base^exp (mod modulus)` where `self` is modulus.
    fn reduce_pow(self, base: T, exp: E) -> Self::Output;
}

/// The modular inversion.
pub trait ReduceInv<T> {
    /// Output type.
    type Output;

    /// Calculates `value^(-1) (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `value != 0`
    fn reduce_inv(self, value: T) -> Self::Output;
}
