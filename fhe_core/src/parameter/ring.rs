use algebra::{decompose::GadgetBasis, AlgebraError, Torus};
use rand_distr::Normal;

use crate::FHECoreError;

/// Gadget decomposition parameters: `length` digits of `log_basis` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GadgetParameters {
    /// Bits per digit, refers to **Bgbit** in the paper.
    pub log_basis: u32,
    /// Digit count, refers to **l** in the paper.
    pub length: usize,
}

impl GadgetParameters {
    /// Builds the gadget basis over a torus of type `T`.
    #[inline]
    pub fn basis<T: Torus>(&self) -> Result<GadgetBasis<T>, AlgebraError> {
        GadgetBasis::new(self.log_basis, self.length)
    }
}

/// Ring Parameters for the **TRLWE** level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParameters {
    /// The dimension, refers to **N** in the paper.
    pub dimension: usize,
    /// The noise error's standard deviation, as a fraction of the torus.
    pub noise_standard_deviation: f64,
    /// Decompose parameters used for gadget products on this level.
    pub gadget: GadgetParameters,
}

impl RingParameters {
    /// Returns the log of the dimension, if the dimension is a power of two.
    #[inline]
    pub fn log_dimension(&self) -> Option<u32> {
        self.dimension
            .is_power_of_two()
            .then(|| self.dimension.trailing_zeros())
    }

    /// Gets the gaussian noise distribution over the real torus.
    #[inline]
    pub fn noise_distribution(&self) -> Result<Normal<f64>, FHECoreError> {
        super::gaussian(self.noise_standard_deviation)
    }
}
