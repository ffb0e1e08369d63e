//! Versioned conformance vector model and checks
//!
//! Independent implementations interoperate by agreeing byte for byte on a
//! shared vector file. This module models that file and can both check an
//! implementation against it and regenerate the derived fields from the
//! frozen seed and labels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use coldroot_crypto::{derive_epoch_key, root_public_key, seed_to_root_key, CryptoError};

use crate::{deterministic_created_at, make_lineage_event, LineageError, LineageEvent};

/// Top-level conformance vector file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorFile {
    /// Version of the derivation contract the vectors were frozen against
    pub spec_version: String,
    /// Root key material and its derived fields
    pub root: RootVector,
    /// One entry per epoch label
    pub epochs: Vec<EpochVector>,
}

/// Root section of the vector file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootVector {
    /// 32-byte seed, lowercase hex
    pub seed_hex: String,
    /// Secret key hex; identical to the seed in this scheme
    pub sk_hex: String,
    /// Derived Ed25519 public key hex
    pub pk_hex: String,
}

/// Per-epoch section of the vector file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochVector {
    /// Stable identifier, e.g. `epoch-2025-Q1`
    pub id: String,
    /// Epoch label in `YYYY-Qn` form
    pub label: String,
    /// Derived epoch secret seed hex
    pub sk_hex: String,
    /// Derived epoch public key hex
    pub pk_hex: String,
    /// Expected lineage event for this epoch
    pub lineage_event: LineageEvent,
}

/// Errors raised while checking or regenerating vectors.
#[derive(Debug, Error)]
pub enum VectorError {
    /// A derived field does not match the frozen vector
    #[error("vector mismatch at {context}: expected {expected}, got {actual}")]
    Mismatch {
        /// Which field diverged
        context: String,
        /// Frozen value
        expected: String,
        /// Re-derived value
        actual: String,
    },

    /// Key material error from the crypto layer
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Label or event error from the lineage layer
    #[error(transparent)]
    Lineage(#[from] LineageError),
}

fn expect_eq(context: &str, expected: &str, actual: &str) -> Result<(), VectorError> {
    if expected == actual {
        return Ok(());
    }
    Err(VectorError::Mismatch {
        context: context.to_owned(),
        expected: expected.to_owned(),
        actual: actual.to_owned(),
    })
}

/// Re-derive every field of the vector file and compare byte for byte.
///
/// Checks the root key expansion, each epoch's derived keypair, the
/// canonical timestamp, and the full lineage event (tags in order,
/// content, pubkey, pass-through kind).
pub fn check(file: &VectorFile) -> Result<(), VectorError> {
    let seed = hex::decode(&file.root.seed_hex).map_err(CryptoError::from)?;
    let root_secret = seed_to_root_key(&seed)?;
    let root_public = root_public_key(&root_secret)?;

    expect_eq("root.sk_hex", &file.root.sk_hex, &hex::encode(root_secret))?;
    expect_eq("root.pk_hex", &file.root.pk_hex, &hex::encode(root_public))?;

    for epoch in &file.epochs {
        let keypair = derive_epoch_key(&file.root.seed_hex, &epoch.label)?;
        expect_eq(
            &format!("{}.sk_hex", epoch.id),
            &epoch.sk_hex,
            &keypair.secret_hex(),
        )?;
        expect_eq(
            &format!("{}.pk_hex", epoch.id),
            &epoch.pk_hex,
            &keypair.public_hex(),
        )?;

        let created_at = deterministic_created_at(&epoch.label)?;
        expect_eq(
            &format!("{}.created_at", epoch.id),
            &epoch.lineage_event.created_at.to_string(),
            &created_at.to_string(),
        )?;

        let event = make_lineage_event(
            &root_secret,
            keypair.public_bytes(),
            &epoch.label,
            epoch.lineage_event.kind,
            created_at,
        );
        if event != epoch.lineage_event {
            return Err(VectorError::Mismatch {
                context: format!("{}.lineage_event", epoch.id),
                expected: format!("{:?}", epoch.lineage_event),
                actual: format!("{event:?}"),
            });
        }
    }

    Ok(())
}

/// Recompute every derived field from the frozen seed and labels.
///
/// Keeps `spec_version`, the seed, each epoch's id/label, and the
/// pass-through event kind; everything else is overwritten with freshly
/// derived values.
pub fn regenerate(file: &mut VectorFile) -> Result<(), VectorError> {
    let seed = hex::decode(&file.root.seed_hex).map_err(CryptoError::from)?;
    let root_secret = seed_to_root_key(&seed)?;
    let root_public = root_public_key(&root_secret)?;

    file.root.sk_hex = hex::encode(root_secret);
    file.root.pk_hex = hex::encode(root_public);

    for epoch in &mut file.epochs {
        let keypair = derive_epoch_key(&file.root.seed_hex, &epoch.label)?;
        let created_at = deterministic_created_at(&epoch.label)?;

        epoch.sk_hex = keypair.secret_hex();
        epoch.pk_hex = keypair.public_hex();
        epoch.lineage_event = make_lineage_event(
            &root_secret,
            keypair.public_bytes(),
            &epoch.label,
            epoch.lineage_event.kind,
            created_at,
        );
    }

    Ok(())
}
