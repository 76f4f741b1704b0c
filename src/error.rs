//! Error types for file discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the discovery core.
///
/// Only precondition failures reach the caller. Anything that goes wrong with
/// an individual entry during traversal is absorbed by the scanner.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Base path does not exist: {}", .0.display())]
    BasePathNotFound(PathBuf),

    #[error("Base path is not a directory: {}", .0.display())]
    BasePathNotADirectory(PathBuf),

    #[error("Invalid exclude pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ScanError {
    pub fn base_path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::BasePathNotFound(path.into())
    }

    pub fn base_path_not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::BasePathNotADirectory(path.into())
    }

    /// True for the two failures raised before enumeration starts.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::BasePathNotFound(_) | Self::BasePathNotADirectory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScanError::base_path_not_found("/missing/dir");
        assert_eq!(err.to_string(), "Base path does not exist: /missing/dir");
        assert!(err.is_precondition());

        let err = ScanError::base_path_not_a_directory("/etc/hosts");
        assert_eq!(err.to_string(), "Base path is not a directory: /etc/hosts");
        assert!(err.is_precondition());
    }
}
