//! Error types for counter-kdf.

/// Errors that can occur when setting up a key derivation stream.
///
/// The stream itself is infallible: once a [`crate::CounterKdf`] exists,
/// reading from it always succeeds and always delivers the full requested
/// length. Errors only arise from PRF construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input provided to an operation was invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for counter-kdf operations.
pub type Result<T> = std::result::Result<T, Error>;
