use rand_distr::Normal;

use crate::FHECoreError;

/// Lwe Parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LweParameters {
    /// **LWE** vector dimension, refers to **n** in the paper.
    pub dimension: usize,
    /// **LWE** noise error's standard deviation, as a fraction of the torus.
    pub noise_standard_deviation: f64,
}

impl LweParameters {
    /// Gets the gaussian noise distribution over the real torus.
    #[inline]
    pub fn noise_distribution(&self) -> Result<Normal<f64>, FHECoreError> {
        super::gaussian(self.noise_standard_deviation)
    }
}
