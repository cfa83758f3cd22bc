//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod generate;
mod link;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{load_settings_with_options, LoadOptions, Settings};
use crate::models::ManifestKind;

#[derive(Parser)]
#[command(name = "synthdocs")]
#[command(about = "Synthetic donation documents and IRS forms for OCR testing")]
#[command(version)]
pub struct Cli {
    /// Output root directory (overrides config file)
    #[arg(long, short = 't', global = true, env = "SYNTHDOCS_TARGET")]
    target: Option<PathBuf>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true, env = "SYNTHDOCS_SEED")]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Generate receipts, acknowledgment letters and bank statements
    Generate,

    /// Generate IRS forms, appraisals, in-kind letters and stock confirmations
    GenerateIrs,

    /// Link generated documents into donation scenarios
    Link {
        /// Only link from the IRS forms manifest
        #[arg(long)]
        no_merge_primary: bool,
    },

    /// Generate both document sets, then link scenarios
    All {
        /// Only link from the IRS forms manifest
        #[arg(long)]
        no_merge_primary: bool,
    },
}

/// Random source for a run: seeded when a seed is configured.
fn rng_for(settings: &Settings) -> StdRng {
    match settings.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        target: cli.target,
        seed: cli.seed,
    };
    let (settings, _config) = load_settings_with_options(options)
        .await
        .context("failed to load configuration")?;

    let mut rng = rng_for(&settings);

    match cli.command {
        Commands::Generate => generate::cmd_generate(&settings, ManifestKind::Primary, &mut rng),
        Commands::GenerateIrs => {
            generate::cmd_generate(&settings, ManifestKind::IrsForms, &mut rng)
        }
        Commands::Link { no_merge_primary } => {
            link::cmd_link(&settings, settings.merge_primary && !no_merge_primary)
        }
        Commands::All { no_merge_primary } => {
            generate::cmd_generate(&settings, ManifestKind::Primary, &mut rng)?;
            generate::cmd_generate(&settings, ManifestKind::IrsForms, &mut rng)?;
            link::cmd_link(&settings, settings.merge_primary && !no_merge_primary)
        }
    }
}
