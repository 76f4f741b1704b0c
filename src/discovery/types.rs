use serde::Serialize;
use std::path::PathBuf;

/// A file that passed exclusion and extension filtering and whose metadata
/// could be read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiscoveredFile {
    /// Base path joined with the file's path relative to it
    pub path: PathBuf,
    /// Lowercased extension including the leading dot, e.g. `.pdf`
    pub file_type: String,
    /// Size in bytes at scan time
    pub size: u64,
}

/// Counters collected while a scan runs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub directories_visited: usize,
    pub directories_pruned: usize,
    pub directories_unreadable: usize,
    pub symlinked_directories_skipped: usize,
    pub files_excluded: usize,
    pub files_filtered_by_extension: usize,
    pub files_unreadable: usize,
    pub files_discovered: usize,
}
