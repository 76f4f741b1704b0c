//! Styled terminal output
//!
//! Scan results are the only thing written to stdout. Status messages and
//! summaries go to stderr so the result stream can be piped.

use console::style;
use std::io::{self, Write};

use crate::discovery::{DiscoveredFile, ScanStats};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message, even in quiet mode
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print summary statistics
    pub fn summary_stats(&self, label: &str, value: usize) {
        if !self.quiet {
            eprintln!("  {:<32} {}", style(label).dim(), style(value).bold());
        }
    }

    /// One discovered file as a text row
    pub fn file_row(&self, out: &mut impl Write, file: &DiscoveredFile) -> io::Result<()> {
        writeln!(out, "{:>12}  {:<7} {}", file.size, file.file_type, file.path.display())
    }

    /// Report what a finished scan saw
    pub fn scan_summary(&self, stats: &ScanStats) {
        if self.quiet {
            return;
        }

        self.success(&format!(
            "Discovered {} file{}",
            stats.files_discovered,
            if stats.files_discovered == 1 { "" } else { "s" }
        ));

        if self.verbose {
            self.summary_stats("directories visited", stats.directories_visited);
            self.summary_stats("directories pruned", stats.directories_pruned);
            self.summary_stats("directories unreadable", stats.directories_unreadable);
            self.summary_stats(
                "directory links skipped",
                stats.symlinked_directories_skipped,
            );
            self.summary_stats("files excluded", stats.files_excluded);
            self.summary_stats(
                "files filtered by extension",
                stats.files_filtered_by_extension,
            );
            self.summary_stats("files unreadable", stats.files_unreadable);
        }

        if stats.directories_unreadable > 0 {
            self.warning(&format!(
                "{} director{} could not be read",
                stats.directories_unreadable,
                if stats.directories_unreadable == 1 { "y" } else { "ies" }
            ));
        }
    }
}
