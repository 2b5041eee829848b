use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::classify;
use super::results::{Diagnostic, FileRecord, LargeFile, ScanOutcome, ScanResult};
use crate::common::config::ScanConfig;
use crate::common::permissions;

/// What came of looking at one directory entry
#[derive(Debug)]
pub enum Visit {
    /// A regular file (or a link resolving to one) that can be counted
    File(FileRecord),
    /// Directories and other non-file entries
    Skipped,
    /// The entry could not be inspected
    Failed(Diagnostic),
}

/// Walk `config.root` and build the scan result.
///
/// Symlinks are not followed into directories. Siblings are visited in file
/// name order so repeated scans of the same tree agree. Every diagnostic is
/// passed to `on_diagnostic` as soon as it is produced and also kept in the
/// returned outcome.
pub fn walk_directory<F>(config: &ScanConfig, mut on_diagnostic: F) -> ScanOutcome
where
    F: FnMut(&Diagnostic),
{
    let mut outcome = ScanOutcome::default();

    let walker = WalkDir::new(config.root())
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let visit = match entry {
            Ok(entry) => inspect_entry(&entry, config.probe_signatures),
            Err(err) => Visit::Failed(walk_error(config.root(), &err)),
        };

        match visit {
            Visit::File(record) => record_file(&mut outcome.result, record, config),
            Visit::Skipped => {}
            Visit::Failed(diag) => {
                on_diagnostic(&diag);
                outcome.diagnostics.push(diag);
            }
        }
    }

    outcome
}

/// Stat and classify a single entry
pub fn inspect_entry(entry: &DirEntry, probe: bool) -> Visit {
    let path = entry.path();
    let file_type = entry.file_type();

    if file_type.is_dir() {
        return Visit::Skipped;
    }

    let metadata = if file_type.is_symlink() {
        // Resolve the link; only regular-file targets are counted
        match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) => return Visit::Failed(Diagnostic::new(path, e)),
        }
    } else if file_type.is_file() {
        match entry.metadata() {
            Ok(m) => m,
            Err(e) => return Visit::Failed(Diagnostic::new(path, describe(&e))),
        }
    } else {
        tracing::debug!("skipping special file {}", path.display());
        return Visit::Skipped;
    };

    if !metadata.is_file() {
        return Visit::Skipped;
    }

    Visit::File(FileRecord {
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
        category: classify::classify_file(path, probe),
        mode: permissions::raw_mode(&metadata),
    })
}

/// Fold one file into the running totals
pub fn record_file(result: &mut ScanResult, record: FileRecord, config: &ScanConfig) {
    tracing::debug!(
        "{} {} {} {}",
        permissions::format_mode(record.mode),
        record.size_bytes,
        record.category,
        record.path.display()
    );

    result.files_scanned += 1;
    result.category_totals.add(&record.category, record.size_bytes);

    if config.collect_world_writable && permissions::is_world_writable(record.mode) {
        result.world_writable_files.push(record.path.clone());
    }

    if config.is_large(record.size_bytes) {
        result.large_files.push(LargeFile {
            path: record.path,
            size_bytes: record.size_bytes,
        });
    }
}

fn walk_error(root: &Path, err: &walkdir::Error) -> Diagnostic {
    let path = err.path().unwrap_or(root);
    Diagnostic::new(path, describe(err))
}

/// Prefer the underlying I/O message; walkdir's own text repeats the path
fn describe(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}
