// Derive an epoch keypair from a root seed and label

use coldroot_crypto::{derive_epoch_key, encode_npub};
use serde_json::json;
use tracing::debug;

pub fn run(root_seed_hex: &str, epoch_label: &str) -> anyhow::Result<()> {
    debug!("deriving epoch key for {}", epoch_label);

    let keypair = derive_epoch_key(root_seed_hex, epoch_label)?;

    let out = json!({
        "epoch": epoch_label,
        "sk_hex": keypair.secret_hex(),
        "pk_hex": keypair.public_hex(),
        "npub": encode_npub(keypair.public_bytes())?,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
