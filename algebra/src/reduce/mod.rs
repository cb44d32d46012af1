//! This module defines some traits for modular arithmetic.
//!
//! The receiver of every method is the modulus, so a call reads
//! `modulus.reduce_mul(a, b)`.

mod ops;

pub use ops::*;
