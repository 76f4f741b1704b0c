//! # dexidoc - document discovery for ingestion pipelines
//!
//! dexidoc finds the files a document-processing pipeline should ingest. It
//! walks a directory tree, prunes directories and skips files matching
//! shell-style exclusion patterns, and keeps only files with allowed
//! extensions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dexidoc::discovery::Scanner;
//!
//! # fn main() -> anyhow::Result<()> {
//! let scanner = Scanner::new("./documents")
//!     .with_excludes([".*", "__pycache__", "drafts/*"])?
//!     .with_extensions([".pdf", ".txt", ".docx"]);
//!
//! for file in scanner.scan()? {
//!     println!("{} {} {}", file.file_type, file.size, file.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The same policy can be driven from `~/dexidoc/config.toml` through the
//! `dexidoc` binary: `dexidoc scan ./documents`.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use config::DexidocConfig;
pub use discovery::{DiscoveredFile, ScanIter, Scanner};
pub use error::ScanError;

/// Result type alias for dexidoc application code
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
