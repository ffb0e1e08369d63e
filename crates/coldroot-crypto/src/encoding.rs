//! Bech32 text encodings for keys (npub / nsec)
//!
//! Nostr's human-readable key format: public keys carry the `npub` prefix,
//! secret seeds the `nsec` prefix. The nsec payload is the 32-byte seed,
//! not the expanded 64-byte signing key.

use bech32::ToBase32 as _;

use crate::Result;

/// Human-readable part for public keys
pub const NPUB_HRP: &str = "npub";

/// Human-readable part for secret seeds
pub const NSEC_HRP: &str = "nsec";

/// Encode a 32-byte public key as an `npub1...` string.
pub fn encode_npub(public_key: &[u8; 32]) -> Result<String> {
    Ok(bech32::encode(NPUB_HRP, public_key.to_base32())?)
}

/// Encode a 32-byte secret seed as an `nsec1...` string.
pub fn encode_nsec(seed: &[u8; 32]) -> Result<String> {
    Ok(bech32::encode(NSEC_HRP, seed.to_base32())?)
}
