use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::path::Path;

use crate::cli::output::Output;
use crate::config::{self, DexidocConfig};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective merged configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

pub fn execute(args: ConfigArgs, custom_config: Option<&Path>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show { format } => {
            let config = DexidocConfig::load(custom_config)?;
            let rendered = match format {
                ConfigFormat::Toml => config.to_toml()?,
                ConfigFormat::Json => config.to_json()?,
            };
            println!("{}", rendered.trim_end());
        }
        ConfigCommand::Init { force } => {
            let path = match custom_config {
                Some(path) => path.to_path_buf(),
                None => {
                    config::ensure_config_dir()?;
                    config::config_file()
                }
            };
            config::write_default_config(&path, force)?;
            output.success(&format!("Created {}", path.display()));
        }
        ConfigCommand::Path => {
            let path = custom_config
                .map(Path::to_path_buf)
                .unwrap_or_else(config::config_file);
            println!("{}", path.display());
            if !path.exists() {
                output.info("File does not exist yet; built-in defaults are in effect");
            }
        }
    }

    Ok(())
}
