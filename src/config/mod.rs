//! Configuration management for dexidoc
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. defaults embedded from `default-config.toml`
//! 2. the configuration file (`~/dexidoc/config.toml` unless a path is given)
//! 3. `DEXIDOC_*` environment variables, with `__` separating nested keys
//!    (`DEXIDOC_LOGGING__LEVEL=debug`)
//!
//! Keys missing from the file fall back to the defaults.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ENV_PREFIX: &str = "DEXIDOC_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexidocConfig {
    /// Glob patterns excluded from discovery
    pub excludes: Vec<String>,

    /// Allowed file extensions, dot-prefixed
    pub extensions: Vec<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where the configuration file is (or would be) located
    #[serde(skip)]
    pub config_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when neither RUST_LOG nor -v flags are given
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Append logs to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl DexidocConfig {
    /// Load the layered configuration.
    ///
    /// A missing default config file is fine; a custom path must exist.
    pub fn load(custom_config: Option<&Path>) -> Result<Self> {
        let config_path = match custom_config {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => config_file(),
        };

        tracing::trace!("Loading configuration from {}", config_path.display());

        let mut config: DexidocConfig = Self::figment(&config_path)
            .extract()
            .with_context(|| {
                format!("Failed to load configuration from {}", config_path.display())
            })?;
        config.config_path = config_path;

        Ok(config)
    }

    /// The embedded defaults alone, ignoring files and environment.
    pub fn defaults() -> Result<Self> {
        let mut config: DexidocConfig = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .extract()
            .context("Embedded default configuration is invalid")?;
        config.config_path = config_file();
        Ok(config)
    }

    fn figment(config_path: &Path) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));
        if config_path.is_file() {
            figment = figment.merge(Toml::file_exact(config_path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Render the effective configuration as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// `~/dexidoc`, or `./dexidoc` when no home directory is known
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dexidoc")
}

/// Default configuration file location
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Create the configuration directory if needed
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Write the default configuration file to `path`
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}
