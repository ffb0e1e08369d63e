// Generate a fresh root seed with its derived encodings

use coldroot_crypto::{encode_npub, encode_nsec, generate_root_seed, RootIdentity};
use serde_json::json;
use tracing::warn;

pub fn run() -> anyhow::Result<()> {
    warn!("root seeds are cold key material; generate and store them offline");

    let seed = generate_root_seed();
    let root = RootIdentity::from_seed(&seed)?;

    let out = json!({
        "seed_hex": hex::encode(root.seed()),
        "pk_hex": root.public_key_hex(),
        "npub": encode_npub(root.public_key())?,
        "nsec": encode_nsec(root.seed())?,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
