#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Key Derivation
//!
//! Counter-mode key derivation following NIST SP 800-108, built as a
//! streaming generator over an opaque keyed PRF.

pub mod counter;

pub use counter::*;
