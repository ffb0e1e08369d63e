// Verify a lineage event file against its own root tag

use anyhow::Context;
use coldroot_lineage::{verify_lineage, LineageEvent};
use tracing::debug;

pub fn run(path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let event: LineageEvent =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let root_hex = event
        .tag_value("root")
        .context("lineage event missing root tag")?
        .to_owned();
    debug!("verifying against root {}", root_hex);

    if verify_lineage(&root_hex, &event) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}
