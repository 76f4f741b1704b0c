//! Extension allow-list

use std::collections::BTreeSet;
use std::path::Path;

/// Lowercased, dot-prefixed extension of `path`, or an empty string.
///
/// Names that only start with a dot (`.bashrc`) or end with one (`notes.`)
/// have no extension.
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}

/// Normalise a user-supplied extension to `.ext` form in lowercase.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Set of allowed extensions. An empty filter allows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { allowed }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Check an already-lowercased file type as returned by [`extension_of`].
    pub fn allows(&self, file_type: &str) -> bool {
        !file_type.is_empty() && self.allowed.contains(file_type)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}
