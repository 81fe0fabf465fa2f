//! Report data structures: per-file and per-project line counts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Line count for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan root
    pub path: PathBuf,
    /// Number of lines in the file
    pub lines: u64,
}

impl FileRecord {
    /// Create a record for a file.
    pub fn new(path: impl Into<PathBuf>, lines: u64) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }
}

/// Aggregated line counts for a project tree.
///
/// `lines` always equals the sum of the per-file counts; the constructor
/// computes it from the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReport {
    /// Project name (base name of the scan root)
    pub project: String,
    /// Total lines across all counted files
    pub lines: u64,
    /// Per-file counts, in traversal order
    pub files: Vec<FileRecord>,
}

impl ProjectReport {
    /// Build a report from per-file records, computing the total.
    pub fn new(project: impl Into<String>, files: Vec<FileRecord>) -> Self {
        let lines = files.iter().map(|f| f.lines).sum();
        Self {
            project: project.into(),
            lines,
            files,
        }
    }

    /// True when no files were counted.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
