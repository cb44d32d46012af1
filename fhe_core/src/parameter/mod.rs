use algebra::{decompose::GadgetBasis, ntt::NttTable, Torus};
use rand_distr::{Normal, NormalError};
use tracing::{debug, instrument};

use crate::FHECoreError;

mod key_switching;
mod lwe;
mod ring;

pub use key_switching::KeySwitchingParameters;
pub use lwe::LweParameters;
pub use ring::{GadgetParameters, RingParameters};

/// Builds the centered gaussian of standard deviation `sd`.
///
/// `sd` must be finite and non-negative.
fn gaussian(sd: f64) -> Result<Normal<f64>, FHECoreError> {
    if !(sd >= 0.0 && sd.is_finite()) {
        return Err(NormalError::BadVariance.into());
    }
    Ok(Normal::new(0.0, sd)?)
}

/// Level 0: the small **TLWE** key, `n = 636`, 32-bit torus.
pub const LVL0: LweParameters = LweParameters {
    dimension: 636,
    noise_standard_deviation: 0.000_092_511_997_467_675_6,
};

/// Level 1: **TRLWE** with `N = 1024`, `l = 3`, `Bgbit = 6`, 32-bit torus.
pub const LVL1: RingParameters = RingParameters {
    dimension: 1024,
    // 2^-25
    noise_standard_deviation: 2.980_232_238_769_531_25e-8,
    gadget: GadgetParameters {
        log_basis: 6,
        length: 3,
    },
};

/// Level 2: **TRLWE** with `N = 2048`, `l = 4`, `Bgbit = 9`, 64-bit torus.
pub const LVL2: RingParameters = RingParameters {
    dimension: 2048,
    // 2^-44
    noise_standard_deviation: 5.684_341_886_080_801_5e-14,
    gadget: GadgetParameters {
        log_basis: 9,
        length: 4,
    },
};

/// Key switching from level 1 to level 0, `t = 7`, `basebit = 2`.
pub const LVL10: KeySwitchingParameters = KeySwitchingParameters {
    input_dimension: 1024,
    output_dimension: 636,
    log_basis: 2,
    length: 7,
    noise_standard_deviation: LVL0.noise_standard_deviation,
};

/// The parameters of the fully homomorphic encryption scheme.
///
/// This type is used for setting some default Parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstParameters {
    /// Parameters of the small **TLWE** level.
    pub lwe: LweParameters,
    /// Parameters of the **TRLWE** level.
    pub ring: RingParameters,
    /// Parameters of key switching from the ring level to the small level.
    pub key_switching: KeySwitchingParameters,
}

/// The 32-bit parameter set of levels 0 and 1.
pub const DEFAULT_PARAMETERS: ConstParameters = ConstParameters {
    lwe: LVL0,
    ring: LVL1,
    key_switching: LVL10,
};

/// Parameters for FHE over a torus of type `T`, validated once on creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters<T: Torus> {
    lwe_params: LweParameters,
    ring_params: RingParameters,
    key_switching_params: KeySwitchingParameters,
    log_ring_dimension: u32,
    ring_basis: GadgetBasis<T>,
    key_switching_basis: GadgetBasis<T>,
}

impl<T: Torus> Parameters<T> {
    /// Create a new Parameter instance.
    ///
    /// # Errors
    ///
    /// - the ring dimension is not a power of two;
    /// - a gadget leaves no rounding bit on a `T` torus;
    /// - the key switching dimensions differ from the ring and LWE dimensions;
    /// - a noise standard deviation is negative or not finite.
    #[instrument(level = "debug")]
    pub fn new(params: ConstParameters) -> Result<Self, FHECoreError> {
        let ring_dimension = params.ring.dimension;

        // N = 2^i
        let log_ring_dimension = params
            .ring
            .log_dimension()
            .ok_or(FHECoreError::RingDimensionUnValid(ring_dimension))?;

        let ring_basis = params.ring.gadget.basis::<T>()?;
        let key_switching_basis = params.key_switching.basis::<T>()?;

        if params.key_switching.input_dimension != ring_dimension {
            return Err(FHECoreError::KeySwitchingDimensionMismatch {
                side: "input",
                expected: ring_dimension,
                found: params.key_switching.input_dimension,
            });
        }

        if params.key_switching.output_dimension != params.lwe.dimension {
            return Err(FHECoreError::KeySwitchingDimensionMismatch {
                side: "output",
                expected: params.lwe.dimension,
                found: params.key_switching.output_dimension,
            });
        }

        params.lwe.noise_distribution()?;
        params.ring.noise_distribution()?;
        params.key_switching.noise_distribution()?;

        debug!(
            ring_dimension,
            lwe_dimension = params.lwe.dimension,
            "parameters ready"
        );

        Ok(Self {
            lwe_params: params.lwe,
            ring_params: params.ring,
            key_switching_params: params.key_switching,
            log_ring_dimension,
            ring_basis,
            key_switching_basis,
        })
    }

    /// Returns the lwe dimension of this [`Parameters<T>`], refers to **`n`** in the paper.
    #[inline]
    pub fn lwe_dimension(&self) -> usize {
        self.lwe_params.dimension
    }

    /// Returns the ring dimension of this [`Parameters<T>`], refers to **`N`** in the paper.
    #[inline]
    pub fn ring_dimension(&self) -> usize {
        self.ring_params.dimension
    }

    /// Returns the log of the ring dimension.
    #[inline]
    pub fn log_ring_dimension(&self) -> u32 {
        self.log_ring_dimension
    }

    /// Returns the lwe parameters of this [`Parameters<T>`].
    #[inline]
    pub fn lwe_params(&self) -> &LweParameters {
        &self.lwe_params
    }

    /// Returns the ring parameters of this [`Parameters<T>`].
    #[inline]
    pub fn ring_params(&self) -> &RingParameters {
        &self.ring_params
    }

    /// Returns the key switching parameters of this [`Parameters<T>`].
    #[inline]
    pub fn key_switching_params(&self) -> &KeySwitchingParameters {
        &self.key_switching_params
    }

    /// Returns the gadget basis of the ring level.
    #[inline]
    pub fn ring_basis(&self) -> &GadgetBasis<T> {
        &self.ring_basis
    }

    /// Returns the decompose basis for key switching.
    #[inline]
    pub fn key_switching_basis(&self) -> &GadgetBasis<T> {
        &self.key_switching_basis
    }

    /// Generates the transform table of the ring level.
    #[inline]
    pub fn generate_ntt_table<N: NttTable>(&self) -> Result<N, FHECoreError> {
        Ok(N::new(self.log_ring_dimension)?)
    }
}
