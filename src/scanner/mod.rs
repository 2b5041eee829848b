pub mod classify;
pub mod results;
pub mod walker;

use std::path::Path;
use std::time::Instant;

use crate::common::config::ScanConfig;
use crate::common::errors::ScanError;
use crate::common::format;

pub use results::{
    CategoryTotal, CategoryTotals, Diagnostic, FileRecord, LargeFile, ScanOutcome, ScanResult,
};

/// Check that the scan root exists, is a directory, and can be listed
pub fn validate_root(root: &Path) -> Result<(), ScanError> {
    match std::fs::metadata(root) {
        Ok(m) if m.is_dir() => {}
        _ => {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            })
        }
    }

    std::fs::read_dir(root)
        .map(|_| ())
        .map_err(|source| ScanError::Unreadable {
            path: root.to_path_buf(),
            source,
        })
}

/// Scan a directory tree, collecting diagnostics without reporting them
pub fn scan_directory(config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    scan_directory_with(config, |_| {})
}

/// Main scan entry point.
///
/// Fails only when the root is not a readable directory. Per-file problems are handed
/// to `on_diagnostic` as they happen and never stop the walk.
pub fn scan_directory_with<F>(config: &ScanConfig, on_diagnostic: F) -> Result<ScanOutcome, ScanError>
where
    F: FnMut(&Diagnostic),
{
    validate_root(config.root())?;

    let start = Instant::now();
    tracing::info!(
        "scanning {} (threshold {} bytes, world-writable: {})",
        config.root().display(),
        config.size_threshold,
        config.collect_world_writable
    );

    let outcome = walker::walk_directory(config, on_diagnostic);

    tracing::info!(
        files = outcome.result.files_scanned,
        size = %format::format_mb(outcome.result.total_bytes()),
        unreadable = outcome.diagnostics.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan complete"
    );

    Ok(outcome)
}
