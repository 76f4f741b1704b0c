use super::extension::{ExtensionFilter, extension_of};
use super::pattern::ExcludeSet;
use super::types::{DiscoveredFile, ScanStats};
use crate::error::ScanError;
use std::fs;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Discovers files below a base directory.
///
/// Every entry is tested against the exclude patterns by its bare name and by
/// its `/`-separated path relative to the base directory. Excluded directories
/// are pruned before they are read; excluded files are skipped. Surviving
/// files must carry one of the allowed extensions.
///
/// ```no_run
/// use dexidoc::discovery::Scanner;
///
/// # fn example() -> Result<(), dexidoc::ScanError> {
/// let scanner = Scanner::new("/data/inbox")
///     .with_excludes([".*", "node_modules"])?
///     .with_extensions([".pdf", ".txt"]);
///
/// for file in scanner.scan()? {
///     println!("{} ({} bytes)", file.path.display(), file.size);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    base_path: PathBuf,
    excludes: ExcludeSet,
    extensions: ExtensionFilter,
}

impl Scanner {
    /// Create a scanner with no exclusions and no allowed extensions.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            excludes: ExcludeSet::default(),
            extensions: ExtensionFilter::default(),
        }
    }

    pub fn with_excludes<I, S>(mut self, patterns: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = ExcludeSet::new(patterns)?;
        Ok(self)
    }

    /// Set the allowed extensions; they are lowercased and dot-prefixed.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = ExtensionFilter::new(extensions);
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn excludes(&self) -> &ExcludeSet {
        &self.excludes
    }

    pub fn extensions(&self) -> &ExtensionFilter {
        &self.extensions
    }

    /// Validate the base path and start a lazy traversal.
    ///
    /// Fails with [`ScanError::BasePathNotFound`] or
    /// [`ScanError::BasePathNotADirectory`] before any directory is read.
    /// Nothing else about the traversal is reported as an error: unreadable
    /// directories are treated as empty and unreadable files are left out.
    pub fn scan(&self) -> Result<ScanIter<'_>, ScanError> {
        let metadata = fs::metadata(&self.base_path)
            .map_err(|_| ScanError::base_path_not_found(&self.base_path))?;
        if !metadata.is_dir() {
            return Err(ScanError::base_path_not_a_directory(&self.base_path));
        }

        tracing::debug!(
            "Scanning {} ({} exclude patterns, {} allowed extensions)",
            self.base_path.display(),
            self.excludes.len(),
            self.extensions.extensions().count()
        );

        Ok(ScanIter {
            scanner: self,
            pending_dirs: vec![self.base_path.clone()],
            pending_files: Vec::new().into_iter(),
            stats: ScanStats::default(),
        })
    }

    /// The pattern excluding `path`, if any.
    fn excluded_by(&self, path: &Path) -> Option<&str> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let relative = self.relative_path(path);
        self.excludes.matching_pattern(&name, relative.as_deref())
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_path).ok()?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(segments.join("/"))
    }
}

/// Lazy, single-pass sequence of discovered files.
///
/// Directories wait on an explicit stack. A directory is listed completely
/// and its handle closed within one call to `next`, so dropping the iterator
/// early leaves nothing open and stops all further reads.
#[derive(Debug)]
pub struct ScanIter<'a> {
    scanner: &'a Scanner,
    pending_dirs: Vec<PathBuf>,
    /// Files of the last listed directory that passed name and extension
    /// checks, paired with their file type.
    pending_files: std::vec::IntoIter<(PathBuf, String)>,
    stats: ScanStats,
}

impl ScanIter<'_> {
    /// Counters for the traversal so far.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn base_path(&self) -> &Path {
        self.scanner.base_path()
    }

    /// List `dir`, pruning excluded children and queueing the rest.
    fn expand(&mut self, dir: &Path) {
        let scanner = self.scanner;
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("Skipping unreadable directory {}: {}", dir.display(), err);
                self.stats.directories_unreadable += 1;
                return;
            }
        };
        self.stats.directories_visited += 1;

        let mut subdirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), err);
                    continue;
                }
            };
            let path = entry.path();
            let kind = entry.file_type().ok();
            let is_dir = kind.is_some_and(|ft| ft.is_dir());

            if let Some(pattern) = scanner.excluded_by(&path) {
                if is_dir {
                    tracing::debug!("Pruning {} (matched '{}')", path.display(), pattern);
                    self.stats.directories_pruned += 1;
                } else {
                    tracing::trace!("Excluding {} (matched '{}')", path.display(), pattern);
                    self.stats.files_excluded += 1;
                }
                continue;
            }

            if is_dir {
                subdirs.push(path);
                continue;
            }

            // Links are never traversed; a link to a directory is not a file either
            if kind.is_some_and(|ft| ft.is_symlink())
                && fs::metadata(&path).is_ok_and(|m| m.is_dir())
            {
                tracing::trace!("Not following directory link {}", path.display());
                self.stats.symlinked_directories_skipped += 1;
                continue;
            }

            let file_type = extension_of(&path);
            if !scanner.extensions.allows(&file_type) {
                tracing::trace!("Filtered by extension: {}", path.display());
                self.stats.files_filtered_by_extension += 1;
                continue;
            }

            files.push((path, file_type));
        }

        subdirs.sort();
        files.sort();

        // Reverse so the stack pops siblings in name order
        self.pending_dirs.extend(subdirs.into_iter().rev());
        self.pending_files = files.into_iter();
    }
}

impl Iterator for ScanIter<'_> {
    type Item = DiscoveredFile;

    fn next(&mut self) -> Option<DiscoveredFile> {
        loop {
            for (path, file_type) in self.pending_files.by_ref() {
                match fs::metadata(&path) {
                    Ok(metadata) => {
                        self.stats.files_discovered += 1;
                        return Some(DiscoveredFile {
                            path,
                            file_type,
                            size: metadata.len(),
                        });
                    }
                    Err(err) => {
                        tracing::debug!("Cannot read metadata for {}: {}", path.display(), err);
                        self.stats.files_unreadable += 1;
                    }
                }
            }

            let dir = self.pending_dirs.pop()?;
            self.expand(&dir);
        }
    }
}

impl FusedIterator for ScanIter<'_> {}
