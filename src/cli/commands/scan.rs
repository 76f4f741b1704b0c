use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::output::Output;
use crate::config::DexidocConfig;
use crate::discovery::Scanner;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Additional exclude pattern (repeatable, added to configured excludes)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Allowed extension (repeatable, replaces configured extensions)
    #[arg(short = 'x', long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Ignore the configured exclude patterns
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ScanFormat,

    /// Stop after this many files
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScanFormat {
    /// Size, type and path per line
    Text,
    /// One JSON object per line
    Json,
}

/// Build the scanner from configuration plus command-line overrides
pub fn build_scanner(args: &ScanArgs, config: &DexidocConfig) -> Result<Scanner> {
    let mut excludes = if args.no_default_excludes {
        Vec::new()
    } else {
        config.excludes.clone()
    };
    excludes.extend(args.excludes.iter().cloned());

    let extensions = if args.extensions.is_empty() {
        &config.extensions
    } else {
        &args.extensions
    };

    let scanner = Scanner::new(&args.path)
        .with_excludes(excludes)?
        .with_extensions(extensions);
    Ok(scanner)
}

pub fn execute(args: ScanArgs, config: &DexidocConfig, output: &Output) -> Result<()> {
    let scanner = build_scanner(&args, config)?;
    if scanner.extensions().is_empty() {
        output.warning("No extensions configured; nothing will be discovered");
    }

    let start_time = Instant::now();
    tracing::info!("Scanning {}", scanner.base_path().display());

    let mut files = scanner.scan()?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let mut stdout = io::stdout().lock();

    for file in files.by_ref().take(limit) {
        match args.format {
            ScanFormat::Text => output.file_row(&mut stdout, &file)?,
            ScanFormat::Json => {
                serde_json::to_writer(&mut stdout, &file)
                    .context("Failed to serialize discovered file")?;
                writeln!(stdout)?;
            }
        }
    }
    stdout.flush()?;

    let stats = *files.stats();
    tracing::info!(
        "Scan of {} finished in {:.2}s",
        scanner.base_path().display(),
        start_time.elapsed().as_secs_f64()
    );
    output.scan_summary(&stats);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DexidocConfig {
        DexidocConfig::defaults().unwrap()
    }

    fn args() -> ScanArgs {
        ScanArgs {
            path: PathBuf::from("."),
            excludes: Vec::new(),
            extensions: Vec::new(),
            no_default_excludes: false,
            format: ScanFormat::Text,
            limit: None,
        }
    }

    #[test]
    fn test_configured_policy_is_used_by_default() {
        let scanner = build_scanner(&args(), &config()).unwrap();
        assert_eq!(scanner.excludes().len(), 5);
        assert!(scanner.extensions().allows(".pdf"));
        assert!(scanner.extensions().allows(".docx"));
    }

    #[test]
    fn test_cli_excludes_extend_and_extensions_replace() {
        let mut args = args();
        args.excludes = vec!["drafts".to_string()];
        args.extensions = vec!["MD".to_string()];

        let scanner = build_scanner(&args, &config()).unwrap();
        assert_eq!(scanner.excludes().len(), 6);
        assert_eq!(scanner.excludes().patterns().last().unwrap(), "drafts");
        assert!(scanner.extensions().allows(".md"));
        assert!(!scanner.extensions().allows(".pdf"));
    }

    #[test]
    fn test_no_default_excludes() {
        let mut args = args();
        args.no_default_excludes = true;
        args.excludes = vec!["*.tmp".to_string()];

        let scanner = build_scanner(&args, &config()).unwrap();
        assert_eq!(scanner.excludes().patterns(), ["*.tmp".to_string()]);
    }
}
