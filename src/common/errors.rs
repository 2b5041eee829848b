use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan before traversal starts. Both variants mean the
/// root is unusable.
///
/// We use `anyhow` at the top level for CLI error handling, but the library
/// reports this typed error so callers can tell an invalid root apart from
/// anything else. Per-file failures during the walk are not errors at all;
/// they are collected as [`crate::scanner::Diagnostic`] values.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root is missing or not a directory
    #[error("{} is not a directory.", path.display())]
    NotADirectory { path: PathBuf },

    /// The root is a directory but its entries cannot be listed
    #[error("cannot read directory {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The path that caused the error
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::NotADirectory { path } | ScanError::Unreadable { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = ScanError::NotADirectory {
            path: PathBuf::from("/no/such/dir"),
        };
        assert_eq!(err.to_string(), "/no/such/dir is not a directory.");
        assert_eq!(err.path(), std::path::Path::new("/no/such/dir"));
    }
}
