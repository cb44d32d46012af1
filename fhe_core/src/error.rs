use algebra::AlgebraError;
use rand_distr::NormalError;

/// Errors that may occur.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FHECoreError {
    /// Error that occurs when the given ring dimension is not valid.
    #[error("Ring dimension {0} is not valid!")]
    RingDimensionUnValid(
        /// The ring dimension.
        usize,
    ),
    /// Error that occurs when the given noise standard deviation is not valid.
    #[error("Noise standard deviation is not valid: {0}")]
    NoiseUnValid(#[from] NormalError),
    /// Error from the algebra layer, such as an invalid gadget.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
    /// Error that occurs when the key switching dimensions
    /// do not match the dimensions of the keys they connect.
    #[error("Key switching {side} dimension {found} does not match the expected dimension {expected}!")]
    KeySwitchingDimensionMismatch {
        /// `"input"` or `"output"`.
        side: &'static str,
        /// The dimension of the key.
        expected: usize,
        /// The dimension of the key switching parameters.
        found: usize,
    },
    /// Error that occurs when the number of key switching entries is not
    /// `input_dimension * length * basis`.
    #[error("Key switching key has {found} entries, expected {expected}!")]
    KeySwitchingKeyShape {
        /// The expected entry count.
        expected: usize,
        /// The actual entry count.
        found: usize,
    },
    /// Error that occurs when a key switching entry has a wrong dimension.
    #[error("Key switching entry {index} has dimension {found}, expected {expected}!")]
    KeySwitchingEntryDimension {
        /// The flat index of the entry.
        index: usize,
        /// The output dimension.
        expected: usize,
        /// The dimension of the entry.
        found: usize,
    },
}
