#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! The keyed PRF capability consumed by the counter-mode generator.
//!
//! SP 800-108 is defined over an abstract pseudorandom function
//! `PRF(KI, message) -> fixed-size block`. The generator does not care which
//! construction backs it; it only needs to reset the keyed state, absorb the
//! per-block input, and collect one output block per invocation. [`Prf`]
//! captures exactly that contract.
//!
//! Every RustCrypto keyed MAC (`Hmac<Sha256>`, `Hmac<Sha512>`, CMAC, ...)
//! satisfies the contract already, so a blanket implementation is provided
//! for any `Mac + FixedOutputReset` type. The key never leaves the MAC:
//! resetting returns to the freshly keyed state without re-keying.

use digest::{FixedOutputReset, Mac, OutputSizeUser, Reset};
use hmac::Hmac;
use sha2::Sha256;

/// HMAC-SHA256, the canonical SP 800-108 PRF instantiation.
pub type HmacSha256 = Hmac<Sha256>;

/// A keyed, resettable pseudorandom function.
///
/// One PRF invocation is: [`reset`](Prf::reset), one or more
/// [`update`](Prf::update) calls, then [`finalize_block`](Prf::finalize_block).
/// The implementation must keep its key across resets so the capability can
/// be invoked once per output block without re-keying.
///
/// A degenerate PRF with a zero-length output block is unsupported.
pub trait Prf {
    /// Size in bytes of one output block.
    fn block_size(&self) -> usize;

    /// Return to the freshly keyed state, discarding any absorbed input.
    fn reset(&mut self);

    /// Absorb message bytes into the current invocation.
    fn update(&mut self, data: &[u8]);

    /// Produce the output block for everything absorbed since the last
    /// reset. The state is unspecified afterwards until the next reset.
    fn finalize_block(&mut self) -> Vec<u8>;
}

impl<M> Prf for M
where
    M: Mac + FixedOutputReset,
{
    fn block_size(&self) -> usize {
        <M as OutputSizeUser>::output_size()
    }

    fn reset(&mut self) {
        <M as Reset>::reset(self);
    }

    fn update(&mut self, data: &[u8]) {
        Mac::update(self, data);
    }

    fn finalize_block(&mut self) -> Vec<u8> {
        self.finalize_reset().into_bytes().to_vec()
    }
}
