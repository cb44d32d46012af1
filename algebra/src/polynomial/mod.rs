//! Definition and implementation of polynomials in `Z_{2^W}[X]/(X^N + 1)`
//! and of their transform-domain images.

mod native_polynomial;
mod ntt_polynomial;

pub use native_polynomial::Polynomial;
pub use ntt_polynomial::NttPolynomial;
