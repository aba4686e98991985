#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SP 800-108: Counter-based Key Derivation Function, streaming form
//!
//! NIST SP 800-108 specifies key derivation using pseudorandom functions.
//! This module implements the counter mode KDF as a pull-based byte stream:
//! the logical output is the concatenation, for i = 1, 2, 3, ..., of
//!
//! ```text
//! K(i) = PRF(KI, [i]_2 || Label || 0x00 || Context)
//! ```
//!
//! Where:
//! - KI: Keying material input (held inside the keyed PRF)
//! - i: Counter (32-bit big-endian)
//! - Label: byte string identifying the purpose
//! - Context: application-specific information
//!
//! Callers read the stream in chunks of any size. Leftover bytes of the most
//! recent block are buffered, so block boundaries depend only on the total
//! number of bytes consumed, never on how reads were sliced. Reading 16 bytes
//! twice yields the same 32 bytes as a single 32-byte read.
//!
//! Unlike the one-shot form with an `[L]_2` length suffix, the stream has no
//! a-priori output length, so no length field enters the PRF input.

use std::io;

use tracing::instrument;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::prf::{HmacSha256, Prf};

/// Streaming SP 800-108 counter-mode KDF.
///
/// Owns the keyed PRF capability, the fixed input
/// `Label || 0x00 || Context`, the block counter, and up to one block of
/// undelivered output. Construction never fails and performs no PRF work;
/// blocks are computed lazily as output is consumed.
///
/// The stream is logically infinite and deterministic for a given
/// (key, label, context, PRF). It is restartable only by constructing a new
/// instance. Reads mutate the counter and buffer, so an instance must be
/// owned by one caller at a time (or wrapped in a lock).
///
/// Buffered keystream bytes are zeroized when they are delivered and on
/// drop; superseded buffer allocations are wiped across their whole
/// capacity before being freed.
pub struct CounterKdf<P: Prf> {
    prf: P,
    fixed_input: Vec<u8>,
    counter: u32,
    buf: Vec<u8>,
}

impl<P: Prf> CounterKdf<P> {
    /// Create a stream from a keyed PRF, a label, and a context.
    ///
    /// Builds `fixed_input = label || 0x00 || context` once. Label and
    /// context are arbitrary bytes; either or both may be empty, and no
    /// format is enforced.
    ///
    /// # Example
    /// ```ignore
    /// let prf = HmacSha256::new_from_slice(b"master secret")?;
    /// let mut kdf = CounterKdf::new(prf, b"session keys", b"client v2");
    /// ```
    pub fn new(prf: P, label: &[u8], context: &[u8]) -> Self {
        let mut fixed_input = Vec::with_capacity(label.len() + 1 + context.len());
        fixed_input.extend_from_slice(label);
        fixed_input.push(0x00);
        fixed_input.extend_from_slice(context);
        Self { prf, fixed_input, counter: 0, buf: Vec::new() }
    }

    /// Create a stream over a raw fixed input, bypassing the
    /// `label || 0x00 || context` framing.
    ///
    /// The PRF input for block `i` becomes `[i]_2 || fixed_input` verbatim.
    /// This is the interoperability entry point for fixed inputs produced
    /// elsewhere, such as NIST CAVP test vectors, whose fixed input data
    /// need not contain a separator byte.
    pub fn with_fixed_input(prf: P, fixed_input: &[u8]) -> Self {
        Self { prf, fixed_input: fixed_input.to_vec(), counter: 0, buf: Vec::new() }
    }

    /// Size in bytes of one PRF output block.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.prf.block_size()
    }

    /// Fill `dest` completely with the next `dest.len()` bytes of the stream.
    ///
    /// Leftover bytes from the previous block are delivered first; fresh
    /// blocks are then computed as needed, incrementing the counter by
    /// exactly one per block. The unconsumed suffix of the final block is
    /// retained for the next call, so the buffer never holds a full block.
    ///
    /// The stream is infinite: every call fills all of `dest`, and a
    /// zero-length `dest` performs no PRF work. The counter wraps after
    /// 2^32 blocks, matching native-overflow reference behavior.
    pub fn fill(&mut self, dest: &mut [u8]) {
        // Leftovers from the last block go out first. The undelivered tail
        // moves to a fresh allocation; the superseded one is wiped whole,
        // delivered prefix and spare capacity included.
        let n = self.buf.len().min(dest.len());
        dest[..n].copy_from_slice(&self.buf[..n]);
        if n > 0 {
            let mut retired = self.buf.split_off(n);
            std::mem::swap(&mut self.buf, &mut retired);
            retired.zeroize();
        }
        let mut written = n;

        // One PRF invocation per fresh block, counter pre-incremented.
        while written < dest.len() {
            self.counter = self.counter.wrapping_add(1);
            self.prf.reset();
            self.prf.update(&self.counter.to_be_bytes());
            self.prf.update(&self.fixed_input);
            let mut block = self.prf.finalize_block();

            let n = block.len().min(dest.len() - written);
            dest[written..written + n].copy_from_slice(&block[..n]);
            written += n;

            if written == dest.len() {
                let mut drained = std::mem::replace(&mut self.buf, block.split_off(n));
                drained.zeroize();
            }
            block.zeroize();
        }
    }
}

/// The stream as a standard reader.
///
/// Reads never fail and never come up short: `read` always fills the whole
/// buffer and returns its length.
impl<P: Prf> io::Read for CounterKdf<P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill(buf);
        Ok(buf.len())
    }
}

impl<P: Prf> Drop for CounterKdf<P> {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// Create an HMAC-SHA256 counter-mode stream, the canonical instantiation.
///
/// # Arguments
/// * `secret` - Keying material input (master secret); any length
/// * `label` - Byte string identifying the purpose of the derived keys
/// * `context` - Application-specific context information
///
/// # Example
/// ```ignore
/// let mut kdf = hmac_sha256_kdf(b"master secret", b"label", b"context")?;
/// let mut session_key = [0u8; 32];
/// kdf.fill(&mut session_key);
/// ```
///
/// # Errors
/// Returns an error if the keying material is rejected by HMAC
/// initialization.
pub fn hmac_sha256_kdf(secret: &[u8], label: &[u8], context: &[u8]) -> Result<CounterKdf<HmacSha256>> {
    use digest::Mac;

    let prf = HmacSha256::new_from_slice(secret)
        .map_err(|_e| Error::InvalidInput("Invalid HMAC keying material".to_string()))?;
    Ok(CounterKdf::new(prf, label, context))
}

/// Key material produced by [`derive_key`].
#[derive(Clone)]
pub struct DerivedKey {
    /// Derived key material
    pub key: Vec<u8>,
    /// Length of the derived key
    pub key_length: usize,
}

impl Zeroize for DerivedKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl DerivedKey {
    /// Get the derived key
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

/// Derive `key_length` bytes in one shot.
///
/// Convenience wrapper over [`CounterKdf`] for callers that know the output
/// length up front. Equivalent to constructing a stream and filling a single
/// buffer; the result zeroizes its key material on drop.
///
/// # Arguments
/// * `prf` - Keyed PRF capability (e.g. `HmacSha256::new_from_slice(secret)`)
/// * `label` - Byte string identifying the purpose of the derived key
/// * `context` - Application-specific context information
/// * `key_length` - Desired output length in bytes
#[must_use]
#[instrument(
    level = "debug",
    skip_all,
    fields(label_len = label.len(), context_len = context.len(), key_length)
)]
pub fn derive_key<P: Prf>(prf: P, label: &[u8], context: &[u8], key_length: usize) -> DerivedKey {
    let mut kdf = CounterKdf::new(prf, label, context);
    let mut key = vec![0u8; key_length];
    kdf.fill(&mut key);
    DerivedKey { key, key_length }
}
