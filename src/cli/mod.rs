//! Command-line interface for dexidoc
//!
//! Wires configuration, logging and the discovery core together.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use crate::config::DexidocConfig;

/// dexidoc - discover documents for ingestion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true, env = "DEXIDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover files under a directory
    Scan(commands::scan::ScanArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose > 0, self.quiet);
        let custom_config = self.config.as_deref();

        match self.command {
            Commands::Scan(args) => {
                let config = DexidocConfig::load(custom_config)?;
                crate::logging::init(self.verbose, self.quiet, &config.logging)?;
                tracing::debug!("Configuration loaded from {}", config.config_path.display());
                commands::scan::execute(args, &config, &output)
            }
            Commands::Config(args) => commands::config::execute(args, custom_config, &output),
        }
    }
}
