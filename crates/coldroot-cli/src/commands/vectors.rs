// Conformance vector tooling: check and regenerate the frozen file

use anyhow::Context;
use clap::Subcommand;
use coldroot_lineage::{vectors, VectorFile};
use tracing::info;

#[derive(Subcommand)]
pub enum VectorsSubcommand {
    /// Re-derive every field and compare against the frozen file
    Check {
        /// Path to the vector JSON file
        file: String,
    },

    /// Recompute derived fields in place from the frozen seed and labels
    Regenerate {
        /// Path to the vector JSON file
        file: String,
    },
}

pub fn run(command: &VectorsSubcommand) -> anyhow::Result<()> {
    match command {
        VectorsSubcommand::Check { file } => {
            let vector_file = load(file)?;
            vectors::check(&vector_file)?;
            info!("vectors ok: {}", file);
            println!("ok");
        }
        VectorsSubcommand::Regenerate { file } => {
            let mut vector_file = load(file)?;
            vectors::regenerate(&mut vector_file)?;
            let mut out = serde_json::to_string_pretty(&vector_file)?;
            out.push('\n');
            std::fs::write(file, out).with_context(|| format!("writing {file}"))?;
            info!("vectors regenerated: {}", file);
        }
    }

    Ok(())
}

fn load(path: &str) -> anyhow::Result<VectorFile> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))
}
