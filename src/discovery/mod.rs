//! File discovery
//!
//! Walks a directory tree and yields the files a downstream pipeline should
//! ingest. Filtering happens in two stages:
//!
//! 1. **Exclusion** - glob patterns checked against each entry's bare name and
//!    its path relative to the base directory. Excluded directories are pruned
//!    before they are read, so nothing beneath them is ever inspected.
//! 2. **Extension** - files must carry one of the allowed extensions
//!    (case-insensitive). With no allowed extensions nothing is discovered.
//!
//! Results are produced lazily by [`ScanIter`]; work only happens while the
//! caller pulls items.

pub mod extension;
pub mod pattern;
pub mod scanner;
pub mod types;

pub use extension::{ExtensionFilter, extension_of};
pub use pattern::{ExcludeSet, matches};
pub use scanner::{ScanIter, Scanner};
pub use types::{DiscoveredFile, ScanStats};
