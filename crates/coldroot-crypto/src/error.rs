//! Error types for coldroot key operations

use thiserror::Error;

/// Errors produced by root and epoch key operations.
///
/// Every variant is a precondition violation surfaced to the immediate
/// caller. Nothing here is retried or logged internally.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Seed or key buffer is not exactly 32 bytes
    #[error("invalid key length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    /// Hex string failed to decode
    #[error("malformed hex input: {0}")]
    Decode(#[from] hex::FromHexError),

    /// Bech32 encoding failed
    #[error("bech32 encoding failed: {0}")]
    Bech32(#[from] bech32::Error),

    /// HKDF expansion failed; unreachable for 32-byte requests
    #[error("key derivation failed")]
    KeyDerivation,
}

/// Result alias for crypto operations
pub type Result<T> = std::result::Result<T, CryptoError>;
