//! Define the gadget basis and the approximate signed decomposition
//! of torus values and torus polynomials.
//!
//! A value `c` is written as `l` signed digits `d_i ∈ [-Bg/2, Bg/2 - 1]` so that
//! `Σ d_i · 2^(W - (i+1)·Bgbit)` is `c` rounded to the nearest multiple of
//! `2^(W - l·Bgbit)`.

mod basis;
mod decomposed;

pub use basis::GadgetBasis;
pub use decomposed::{DecomposedPolynomial, NttDecomposedPolynomial};
