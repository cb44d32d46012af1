#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Defines the torus ciphertexts consumed by decomposition and key switching.

mod lwe;
mod rlwe;

pub use lwe::Lwe;
pub use rlwe::Rlwe;
