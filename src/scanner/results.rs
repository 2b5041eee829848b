use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ─── Core types ───────────────────────────────────────────────────────────────

/// Accumulated bytes for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub size_bytes: u64,
}

/// Per-category byte totals, kept in the order categories were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes to a category, creating it at the end if unseen
    pub fn add(&mut self, category: &str, bytes: u64) {
        match self.0.iter_mut().find(|t| t.category == category) {
            Some(total) => total.size_bytes += bytes,
            None => self.0.push(CategoryTotal {
                category: category.to_string(),
                size_bytes: bytes,
            }),
        }
    }

    pub fn get(&self, category: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.size_bytes)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum across all categories
    pub fn total(&self) -> u64 {
        self.0.iter().map(|t| t.size_bytes).sum()
    }
}

/// A file whose size exceeded the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeFile {
    #[serde(serialize_with = "crate::common::paths::serialize_lossy")]
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Everything learned about one visited file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub category: String,
    /// Raw permission bits (0 on platforms without POSIX modes)
    pub mode: u32,
}

/// Aggregate statistics for one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub category_totals: CategoryTotals,
    pub large_files: Vec<LargeFile>,
    #[serde(serialize_with = "crate::common::paths::serialize_lossy_list")]
    pub world_writable_files: Vec<PathBuf>,
    pub files_scanned: usize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes across every counted file
    pub fn total_bytes(&self) -> u64 {
        self.category_totals.total()
    }
}

/// A non-fatal failure met during traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(serialize_with = "crate::common::paths::serialize_lossy")]
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: &Path, error: impl std::fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error accessing {}: {}", self.path.display(), self.message)
    }
}

/// A finished scan and the diagnostics collected along the way
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_totals_keep_insertion_order() {
        let mut totals = CategoryTotals::new();
        totals.add("text", 10);
        totals.add("image", 5);
        totals.add("text", 7);
        totals.add("application", 1);

        let order: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(order, vec!["text", "image", "application"]);
        assert_eq!(totals.get("text"), Some(17));
        assert_eq!(totals.get("video"), None);
        assert_eq!(totals.total(), 23);
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn test_zero_byte_file_creates_category() {
        let mut totals = CategoryTotals::new();
        totals.add("unknown", 0);
        assert_eq!(totals.get("unknown"), Some(0));
        assert!(!totals.is_empty());
    }

    #[test]
    fn test_category_totals_serialize_as_list() {
        let mut totals = CategoryTotals::new();
        totals.add("text", 18);
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(json, r#"[{"category":"text","size_bytes":18}]"#);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(Path::new("data/broken.txt"), "No such file or directory");
        assert_eq!(
            diag.to_string(),
            "Error accessing data/broken.txt: No such file or directory"
        );
    }
}
