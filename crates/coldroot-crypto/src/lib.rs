//! Root seed handling and deterministic epoch key derivation for Coldroot

/// Bech32 text encodings for keys (npub / nsec)
pub mod encoding;
/// Crypto error types
pub mod error;
/// Deterministic epoch key derivation (HKDF-SHA256)
pub mod epoch;
/// Root seed validation and public key extraction
pub mod root;

pub use encoding::*;
pub use epoch::*;
pub use error::*;
pub use root::*;
