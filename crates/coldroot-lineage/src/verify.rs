//! Lineage event verification
//!
//! Checks that an event's `sig` tag is a valid signature by the `root`
//! tag's key over the raw epoch public key bytes. Malformed events fail
//! verification instead of erroring; callers get a plain yes/no.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::{LineageEvent, LINEAGE_KIND};

/// Verify a lineage event against an expected root public key.
///
/// Requires the lineage `kind`, a `root` tag matching `root_pubkey_hex`
/// (hex case-insensitive), and a signature by that root key over the raw
/// epoch public key bytes.
pub fn verify_lineage(root_pubkey_hex: &str, event: &LineageEvent) -> bool {
    check_lineage(root_pubkey_hex, event).is_some()
}

fn check_lineage(root_pubkey_hex: &str, event: &LineageEvent) -> Option<()> {
    if event.kind != LINEAGE_KIND {
        return None;
    }

    let root_hex = event.tag_value("root")?;
    let sig_hex = event.tag_value("sig")?;
    if !root_hex.eq_ignore_ascii_case(root_pubkey_hex) {
        return None;
    }

    let root_public: [u8; 32] = hex::decode(root_hex).ok()?.try_into().ok()?;
    let epoch_public = hex::decode(&event.pubkey).ok()?;
    let signature: [u8; 64] = hex::decode(sig_hex).ok()?.try_into().ok()?;

    let verifying_key = VerifyingKey::from_bytes(&root_public).ok()?;
    verifying_key
        .verify(&epoch_public, &Signature::from_bytes(&signature))
        .ok()
}
