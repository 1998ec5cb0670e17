//! Tailor CLI - store initialization and offline sizing tools.
//!
//! # Usage
//!
//! ```bash
//! # Create tables and seed the catalog
//! tailor init
//!
//! # Classify a size without touching the database
//! tailor classify --chest 92 --waist 78
//!
//! # Produce a simulated camera scan (deterministic with --seed)
//! tailor simulate --seed 7
//! ```
//!
//! # Commands
//!
//! - `init` - Create tables and seed the catalog (idempotent)
//! - `classify` - Recommend a size from chest and waist
//! - `simulate` - Print a simulated measurement set as JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tailor")]
#[command(author, version, about = "Tailor CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create tables and seed the clothing catalog
    Init,
    /// Recommend a size from chest and waist (cm)
    Classify {
        /// Chest circumference in cm
        #[arg(long)]
        chest: f64,

        /// Waist circumference in cm
        #[arg(long)]
        waist: f64,
    },
    /// Print a simulated measurement capture as JSON
    Simulate {
        /// Seed for a reproducible capture
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Classify { chest, waist } => commands::sizing::classify(chest, waist),
        Commands::Simulate { seed } => commands::sizing::simulate(seed)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_classify_requires_both_measurements() {
        assert!(Cli::try_parse_from(["tailor", "classify", "--chest", "90"]).is_err());
        assert!(
            Cli::try_parse_from(["tailor", "classify", "--chest", "90", "--waist", "75"]).is_ok()
        );
    }
}
