//! Root seed validation and public key extraction
//!
//! The 32-byte root seed is used directly as the Ed25519 signing-key seed.
//! There is no additional hashing between the seed and the secret key; the
//! seed is the secret key material.

use ed25519_dalek::SigningKey;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Result};

/// Root identity: the externally supplied seed plus its derived public key.
///
/// The seed never leaves this struct except through [`RootIdentity::seed`];
/// memory is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RootIdentity {
    seed: [u8; 32],
    public: [u8; 32],
}

impl RootIdentity {
    /// Build a root identity from a raw seed.
    ///
    /// Fails with [`CryptoError::InvalidLength`] unless the seed is exactly
    /// 32 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let secret = seed_to_root_key(seed)?;
        let public = root_public_key(&secret)?;
        Ok(Self {
            seed: secret,
            public,
        })
    }

    /// Parse a root identity from a hex-encoded seed.
    pub fn from_seed_hex(seed_hex: &str) -> Result<Self> {
        let bytes = hex::decode(seed_hex)?;
        Self::from_seed(&bytes)
    }

    /// Raw 32-byte seed (secret key material)
    pub fn seed(&self) -> &[u8; 32] {
        &self.seed
    }

    /// Raw 32-byte Ed25519 public key
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public
    }

    /// Lowercase hex encoding of the public key
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public)
    }
}

/// Validate a root seed and return it as secret key material.
///
/// The scheme treats the raw seed as the secret key directly, so this is a
/// length check plus a copy. Fails with [`CryptoError::InvalidLength`] for
/// anything other than 32 bytes.
pub fn seed_to_root_key(seed: &[u8]) -> Result<[u8; 32]> {
    let bytes: [u8; 32] = seed
        .try_into()
        .map_err(|_| CryptoError::InvalidLength(seed.len()))?;
    Ok(bytes)
}

/// Derive the Ed25519 public key for a 32-byte root secret.
///
/// Uses the standard RFC 8032 seed-to-keypair expansion. Pure and
/// deterministic.
pub fn root_public_key(root_secret: &[u8]) -> Result<[u8; 32]> {
    let secret: [u8; 32] = root_secret
        .try_into()
        .map_err(|_| CryptoError::InvalidLength(root_secret.len()))?;
    let signing_key = SigningKey::from_bytes(&secret);
    Ok(signing_key.verifying_key().to_bytes())
}

/// Generate a fresh 32-byte root seed from the OS CSPRNG.
///
/// Intended for offline use; derivation paths never call this.
pub fn generate_root_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    OsRng.fill_bytes(&mut seed);
    seed
}
