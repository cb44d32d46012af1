#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Implementations of FHE core operations: parameter sets
//! and key switching between LWE secret keys.

mod error;
mod key_switch;
mod parameter;

pub use error::FHECoreError;
pub use key_switch::KeySwitchingKey;
pub use parameter::*;
