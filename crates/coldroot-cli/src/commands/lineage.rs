// Build a signed lineage event for an epoch

use coldroot_crypto::{derive_epoch_key, RootIdentity};
use coldroot_lineage::{deterministic_created_at, make_lineage_event};
use tracing::debug;

pub fn run(root_seed_hex: &str, epoch_label: &str, kind: u32) -> anyhow::Result<()> {
    let root = RootIdentity::from_seed_hex(root_seed_hex)?;
    let keypair = derive_epoch_key(root_seed_hex, epoch_label)?;
    let created_at = deterministic_created_at(epoch_label)?;
    debug!("lineage event for {} at {}", epoch_label, created_at);

    let event = make_lineage_event(
        root.seed(),
        keypair.public_bytes(),
        epoch_label,
        kind,
        created_at,
    );
    println!("{}", serde_json::to_string_pretty(&event)?);

    Ok(())
}
