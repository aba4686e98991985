#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # counter-kdf
//!
//! Counter-mode key derivation per NIST SP 800-108, exposed as a streaming
//! byte source rather than a one-shot function.
//!
//! A [`CounterKdf`] holds a keyed pseudorandom function (PRF), a fixed input
//! built from a label and a context, a 32-bit big-endian block counter, and a
//! leftover-byte buffer. Output may be pulled in chunks of any size; the byte
//! stream is identical no matter how reads are sliced, because leftover block
//! bytes are carried across calls and the counter only advances when a fresh
//! PRF block is actually needed.
//!
//! The PRF input for block `i` is:
//!
//! ```text
//! PRF(KI, [i]_2 || Label || 0x00 || Context)
//! ```
//!
//! Where:
//! - KI: Keying material input (the master secret, held by the PRF)
//! - i: Counter (32-bit big-endian), starting at 1 for the first block
//! - Label: byte string identifying the purpose
//! - Context: application-specific information
//!
//! No output-length field is appended to the PRF input (the counter-before-
//! fixed, no-`[L]_2` variant of SP 800-108), so streams of different lengths
//! share a common prefix.
//!
//! Any RustCrypto keyed MAC works as the PRF through the [`Prf`] capability
//! trait; [`hmac_sha256_kdf`] builds the canonical HMAC-SHA256 instance.
//!
//! ```
//! use counter_kdf::hmac_sha256_kdf;
//!
//! let mut kdf = hmac_sha256_kdf(b"master secret", b"label", b"context")?;
//! let mut okm = [0u8; 32];
//! kdf.fill(&mut okm);
//! # Ok::<(), counter_kdf::Error>(())
//! ```

pub mod error;
pub mod kdf;
pub mod prf;

pub use error::{Error, Result};
pub use kdf::*;
pub use prf::*;
