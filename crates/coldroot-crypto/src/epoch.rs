//! Deterministic epoch key derivation (HKDF-SHA256)
//!
//! Epoch signing keys are derived from the root seed with
//! HKDF-Extract-then-Expand over SHA-256. Salt and info prefix are wire
//! protocol constants shared by every conforming implementation; changing
//! either means a new `spec_version` for the vector file, not a
//! configuration knob.

use ed25519_dalek::SigningKey;
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Result};

/// HKDF salt for epoch derivation. Fixed, scheme-wide, not secret.
pub const EPOCH_SALT: &[u8] = b"nostr-cold-root";

/// Prefix of the HKDF info string; the epoch label is appended verbatim.
pub const EPOCH_INFO_PREFIX: &[u8] = b"epoch:";

/// A derived epoch signing keypair.
///
/// Value object: re-deriving with the same root seed and label always
/// yields byte-identical contents. Secret material is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EpochKeypair {
    secret: [u8; 32],
    public: [u8; 32],
}

impl EpochKeypair {
    /// Raw 32-byte secret seed for the epoch signing key
    pub fn secret_bytes(&self) -> &[u8; 32] {
        &self.secret
    }

    /// Raw 32-byte Ed25519 public key
    pub fn public_bytes(&self) -> &[u8; 32] {
        &self.public
    }

    /// Lowercase hex encoding of the secret seed
    pub fn secret_hex(&self) -> String {
        hex::encode(self.secret)
    }

    /// Lowercase hex encoding of the public key
    pub fn public_hex(&self) -> String {
        hex::encode(self.public)
    }
}

/// Derive the epoch signing keypair for `label` from a hex-encoded root seed.
///
/// The derivation is fixed by the wire contract:
///
/// 1. decode `root_seed_hex` to exactly 32 bytes,
/// 2. HKDF-SHA256 with salt [`EPOCH_SALT`] and info
///    [`EPOCH_INFO_PREFIX`]` || label`, requesting 32 output bytes,
/// 3. expand the output seed to an Ed25519 keypair.
///
/// Identical `(root_seed_hex, label)` inputs always produce identical
/// keypairs. Fails only on malformed hex or a wrong decoded length.
pub fn derive_epoch_key(root_seed_hex: &str, label: &str) -> Result<EpochKeypair> {
    let seed_bytes = hex::decode(root_seed_hex)?;
    let root_seed: [u8; 32] = seed_bytes
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::InvalidLength(seed_bytes.len()))?;

    let mut info = Vec::with_capacity(EPOCH_INFO_PREFIX.len() + label.len());
    info.extend_from_slice(EPOCH_INFO_PREFIX);
    info.extend_from_slice(label.as_bytes());

    let hkdf = Hkdf::<Sha256>::new(Some(EPOCH_SALT), &root_seed);
    let mut child_seed = [0u8; 32];
    // expand only fails past the 255*32 byte output limit
    hkdf.expand(&info, &mut child_seed)
        .map_err(|_| CryptoError::KeyDerivation)?;

    let signing_key = SigningKey::from_bytes(&child_seed);
    let public = signing_key.verifying_key().to_bytes();

    Ok(EpochKeypair {
        secret: child_seed,
        public,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT_SEED_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_derives_known_vector() {
        let keypair = derive_epoch_key(ROOT_SEED_HEX, "2025-Q1").unwrap();
        assert_eq!(
            keypair.secret_hex(),
            "15cbc89d355b71af2211bc4c7baf8b70851df325ef8c1d5f5edae3a0da3eaf65"
        );
        assert_eq!(
            keypair.public_hex(),
            "3a25f00cf9f83af19a827798a93b72ad641a10cc63452aae589e24da2cf16c58"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_epoch_key(ROOT_SEED_HEX, "2025-Q3").unwrap();
        let b = derive_epoch_key(ROOT_SEED_HEX, "2025-Q3").unwrap();
        assert_eq!(a.secret_bytes(), b.secret_bytes());
        assert_eq!(a.public_bytes(), b.public_bytes());
    }

    #[test]
    fn test_labels_are_used_verbatim() {
        let q1 = derive_epoch_key(ROOT_SEED_HEX, "2025-Q1").unwrap();
        let q2 = derive_epoch_key(ROOT_SEED_HEX, "2025-Q2").unwrap();
        let padded = derive_epoch_key(ROOT_SEED_HEX, "2025-Q1 ").unwrap();
        assert_ne!(q1.secret_bytes(), q2.secret_bytes());
        assert_ne!(q1.secret_bytes(), padded.secret_bytes());
    }

    #[test]
    fn test_accepts_uppercase_hex() {
        let upper = ROOT_SEED_HEX.to_uppercase();
        let a = derive_epoch_key(&upper, "2025-Q1").unwrap();
        let b = derive_epoch_key(ROOT_SEED_HEX, "2025-Q1").unwrap();
        assert_eq!(a.public_bytes(), b.public_bytes());
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(matches!(
            derive_epoch_key("zz", "2025-Q1"),
            Err(CryptoError::Decode(_))
        ));
        // odd-length hex
        assert!(matches!(
            derive_epoch_key(&ROOT_SEED_HEX[..63], "2025-Q1"),
            Err(CryptoError::Decode(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_decoded_length() {
        // 31 bytes of valid hex
        assert!(matches!(
            derive_epoch_key(&ROOT_SEED_HEX[..62], "2025-Q1"),
            Err(CryptoError::InvalidLength(31))
        ));
    }
}
