//! Defines some moduli.

mod goldilocks;

pub use goldilocks::{GoldilocksModulus, GOLDILOCKS_P};
