//! Lineage event construction
//!
//! The event attests that an epoch public key descends from a root key: the
//! root secret signs the raw 32-byte epoch public key, and the signature is
//! published alongside both keys as nostr-style tags. The signed message is
//! the raw key bytes, not a hash and not the hex encoding.

use ed25519_dalek::{Signer, SigningKey};
use serde::{Deserialize, Serialize};

/// Event kind used for lineage attestations (nostr parameterized
/// replaceable range).
pub const LINEAGE_KIND: u32 = 30001;

/// A signed, publishable lineage record.
///
/// Tag order is a wire-format invariant: `root`, then `sig`, then `epoch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageEvent {
    /// Event kind, passed through from the caller
    pub kind: u32,
    /// Hex-encoded epoch public key
    pub pubkey: String,
    /// Canonical timestamp for the epoch label
    pub created_at: i64,
    /// `[["root", hex], ["sig", hex], ["epoch", label]]`
    pub tags: Vec<Vec<String>>,
    /// Always empty in this scheme
    pub content: String,
}

impl LineageEvent {
    /// First value of the named tag, if present.
    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.first().map(String::as_str) == Some(name))
            .and_then(|tag| tag.get(1))
            .map(String::as_str)
    }
}

/// Build a lineage event binding `epoch_public_key` to the root key.
///
/// Signs the raw epoch public key bytes with the root secret, then
/// assembles the event with the fixed tag order. `kind` and `created_at`
/// pass through unchanged; `content` is always empty. The root secret is
/// used for the one signature and nothing else.
pub fn make_lineage_event(
    root_secret: &[u8; 32],
    epoch_public_key: &[u8; 32],
    label: &str,
    kind: u32,
    created_at: i64,
) -> LineageEvent {
    let signing_key = SigningKey::from_bytes(root_secret);
    let root_public = signing_key.verifying_key().to_bytes();
    let signature = signing_key.sign(epoch_public_key);

    LineageEvent {
        kind,
        pubkey: hex::encode(epoch_public_key),
        created_at,
        tags: vec![
            vec!["root".to_owned(), hex::encode(root_public)],
            vec!["sig".to_owned(), hex::encode(signature.to_bytes())],
            vec!["epoch".to_owned(), label.to_owned()],
        ],
        content: String::new(),
    }
}
