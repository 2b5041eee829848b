//! # fsaudit
//!
//! A quick disk-usage and permission audit for a directory tree.
//!
//! fsaudit walks a directory once and reports:
//!
//! - **Size analysis**: bytes used per file-type category (`text`, `image`, ...)
//! - **Large files**: every file strictly larger than a configurable threshold
//! - **World-writable files**: files whose "other" write bit is set (opt-in)
//!
//! Files that cannot be inspected are reported as diagnostics and skipped;
//! the scan itself only fails when the root is not a readable directory.

pub mod cli;
pub mod common;
pub mod scanner;

pub use common::config::ScanConfig;
pub use common::errors::ScanError;
pub use scanner::{scan_directory, scan_directory_with, ScanOutcome, ScanResult};
