//! Logging setup
//!
//! `RUST_LOG` always wins. Otherwise the configured level applies, raised to
//! `debug` by `-v` and `trace` by `-vv`. Logs go to stderr so that stdout
//! stays free for scan results, or are appended to the configured file.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Resolve the filter directive for the given verbosity.
pub fn filter_directive(verbose: u8, config: &LoggingConfig) -> String {
    match verbose {
        0 => config.level.to_lowercase(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global tracing subscriber. Does nothing when `quiet` is set.
pub fn init(verbose: u8, quiet: bool, config: &LoggingConfig) -> Result<()> {
    if quiet {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(verbose, config);
            EnvFilter::try_new(&directive)
                .with_context(|| format!("Invalid log level '{directive}'"))?
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_filter_directive() {
        let config = LoggingConfig {
            level: "WARN".to_string(),
            file: None,
        };
        assert_eq!(filter_directive(0, &config), "warn");
        assert_eq!(filter_directive(1, &config), "debug");
        assert_eq!(filter_directive(2, &config), "trace");
        assert_eq!(filter_directive(5, &config), "trace");
    }

    #[test]
    fn test_quiet_skips_initialisation() {
        let config = LoggingConfig {
            level: "not-a-level!!".to_string(),
            file: Some(PathBuf::from("/nonexistent/dir/log.txt")),
        };
        assert!(init(0, true, &config).is_ok());
    }
}
