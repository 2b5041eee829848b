use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default large-file threshold: 1 MiB
pub const DEFAULT_SIZE_THRESHOLD: u64 = 1024 * 1024;

/// Settings for a single scan, supplied once at invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory to walk
    #[serde(serialize_with = "crate::common::paths::serialize_lossy")]
    pub root: PathBuf,

    /// Files strictly larger than this many bytes are reported as large
    #[serde(default = "default_size_threshold")]
    pub size_threshold: u64,

    /// Collect and report files with the other-write bit set
    #[serde(default)]
    pub collect_world_writable: bool,

    /// Sniff file contents when the extension is not recognised
    #[serde(default)]
    pub probe_signatures: bool,
}

fn default_size_threshold() -> u64 {
    DEFAULT_SIZE_THRESHOLD
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            size_threshold: default_size_threshold(),
            collect_world_writable: false,
            probe_signatures: false,
        }
    }

    pub fn with_size_threshold(mut self, bytes: u64) -> Self {
        self.size_threshold = bytes;
        self
    }

    pub fn with_world_writable(mut self, collect: bool) -> Self {
        self.collect_world_writable = collect;
        self
    }

    pub fn with_signature_probe(mut self, probe: bool) -> Self {
        self.probe_signatures = probe;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a file of `size` bytes counts as large
    pub fn is_large(&self, size: u64) -> bool {
        size > self.size_threshold
    }
}
