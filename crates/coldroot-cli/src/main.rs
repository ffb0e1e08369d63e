// CLI for cold root identity management

use clap::{Parser, Subcommand};

mod commands {
    pub mod derive;
    pub mod generate;
    pub mod lineage;
    pub mod vectors;
    pub mod verify;
}

#[derive(Parser)]
#[command(name = "coldroot")]
#[command(about = "Coldroot - Cold Root Identity CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new root seed (run offline)
    Generate,

    /// Derive an epoch key
    Derive {
        /// Epoch label, e.g. 2025-Q1
        #[arg(short, long)]
        epoch: String,

        /// 32-byte root seed in hex
        #[arg(short, long)]
        root_seed: String,
    },

    /// Create a lineage event
    Lineage {
        /// Epoch label, e.g. 2025-Q1
        #[arg(short, long)]
        epoch: String,

        /// 32-byte root seed in hex
        #[arg(short, long)]
        root_seed: String,

        /// Event kind for the lineage record
        #[arg(short, long, default_value = "30001")]
        kind: u32,
    },

    /// Verify a lineage JSON file
    Verify {
        /// Path to lineage.json
        file: String,
    },

    /// Conformance vector tooling
    Vectors {
        #[command(subcommand)]
        command: commands::vectors::VectorsSubcommand,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .init();

    match cli.command {
        Commands::Generate => {
            commands::generate::run()?;
        }
        Commands::Derive { epoch, root_seed } => {
            commands::derive::run(&root_seed, &epoch)?;
        }
        Commands::Lineage {
            epoch,
            root_seed,
            kind,
        } => {
            commands::lineage::run(&root_seed, &epoch, kind)?;
        }
        Commands::Verify { file } => {
            commands::verify::run(&file)?;
        }
        Commands::Vectors { command } => {
            commands::vectors::run(&command)?;
        }
    }

    Ok(())
}
