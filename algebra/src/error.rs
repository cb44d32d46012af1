//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when the gadget parameters leave no room
    /// for the rounding bit of a `bits`-bit torus.
    #[error("Gadget with {length} digits of {log_basis} bits is not valid for a {bits}-bit torus!")]
    InvalidGadget {
        /// Bits per digit.
        log_basis: u32,
        /// Digit count.
        length: usize,
        /// Bit width of the torus.
        bits: u32,
    },
    /// Error that occurs when the given transform dimension is not valid.
    #[error("Transform dimension 2^{log_n} is not valid!")]
    InvalidDimension {
        /// The log of the dimension.
        log_n: u32,
    },
    /// Error that occurs when the modulus has no primitive root with the given degree.
    #[error("There is no primitive root with the degree 2^{log_degree}!")]
    NoPrimitiveRoot {
        /// The log of the degree for the primitive root.
        log_degree: u32,
    },
    /// Error that occurs when two sequences which must agree in length do not.
    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
}
