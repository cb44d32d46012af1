use algebra::{decompose::GadgetBasis, AlgebraError, Torus};
use rand_distr::Normal;

use crate::FHECoreError;

/// Parameters for key switching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySwitchingParameters {
    /// The dimension of the ciphertexts to switch from.
    pub input_dimension: usize,
    /// The dimension of the ciphertexts to switch to.
    pub output_dimension: usize,
    /// Bits per digit, refers to **basebit** in the paper.
    pub log_basis: u32,
    /// Digit count, refers to **t** in the paper.
    pub length: usize,
    /// The noise error's standard deviation of key switching key.
    pub noise_standard_deviation: f64,
}

impl KeySwitchingParameters {
    /// Builds the decompose basis over a torus of type `T`.
    #[inline]
    pub fn basis<T: Torus>(&self) -> Result<GadgetBasis<T>, AlgebraError> {
        GadgetBasis::new(self.log_basis, self.length)
    }

    /// Gets the gaussian noise distribution over the real torus.
    #[inline]
    pub fn noise_distribution(&self) -> Result<Normal<f64>, FHECoreError> {
        super::gaussian(self.noise_standard_deviation)
    }
}
