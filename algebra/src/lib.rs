#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Arithmetic primitives for torus based fully homomorphic encryption:
//! torus integers, negacyclic polynomials, gadget decomposition
//! and the number theory transforms they are evaluated in.

mod error;

pub mod decompose;
pub mod integer;
pub mod modulus;
pub mod ntt;
pub mod polynomial;
pub mod reduce;
pub mod utils;

pub use error::AlgebraError;
pub use integer::Torus;
