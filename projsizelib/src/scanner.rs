//! High-level scanning API.
//!
//! This module provides the main entry points for measuring a project:
//! [`count_lines`] for a single file and [`scan`] for a whole tree.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::ProjsizeError;
use crate::filter::{discover_files, FilterConfig};
use crate::report::{FileRecord, ProjectReport};
use crate::Result;

/// Options for scanning a project.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File-name glob selecting the files to count
    pub extension: String,
    /// Directory names to exclude
    pub skip_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "*.py".to_string(),
            skip_dirs: vec!["venv".to_string()],
        }
    }
}

impl ScanOptions {
    /// Create options with the defaults (`*.py`, skipping `venv`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file-name glob.
    pub fn extension(mut self, glob: impl Into<String>) -> Self {
        self.extension = glob.into();
        self
    }

    /// Set the directory names to skip.
    pub fn skip(mut self, names: Vec<String>) -> Self {
        self.skip_dirs = names;
        self
    }
}

/// Count the lines in a single file.
///
/// A missing file counts as zero lines rather than an error: files can
/// disappear between discovery and counting, and the scan carries on.
/// The count is the number of lines yielded by a buffered line reader,
/// so a trailing line without a terminating newline still counts as one
/// line. Read failures (permissions, non-UTF-8 content) are surfaced as
/// [`ProjsizeError::FileRead`].
///
/// # Example
///
/// ```rust,ignore
/// use projsizelib::count_lines;
///
/// let lines = count_lines("setup.py")?;
/// ```
pub fn count_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => {
            return Err(ProjsizeError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let mut lines = 0u64;
    for line in BufReader::new(file).lines() {
        line.map_err(|e| ProjsizeError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        lines += 1;
    }

    Ok(lines)
}

/// Scan a project tree and produce a report.
///
/// Walks `root`, counts the lines of every file matching the options, and
/// aggregates the results. The project is named after the base name of
/// the absolutized root. File order in the report is traversal order.
///
/// A missing root is an error rather than an empty report.
///
/// # Example
///
/// ```rust,ignore
/// use projsizelib::{scan, ScanOptions};
///
/// let report = scan(".", ScanOptions::new().extension("*.rs"))?;
/// println!("{} lines in {}", report.lines, report.project);
/// ```
pub fn scan(root: impl AsRef<Path>, options: ScanOptions) -> Result<ProjectReport> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ProjsizeError::PathNotFound(root.to_path_buf()));
    }

    let filter = FilterConfig::new(&options.extension)?.skip(options.skip_dirs);
    let files = discover_files(root, &filter)?;

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        let lines = count_lines(&path)?;
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        records.push(FileRecord::new(relative, lines));
    }

    Ok(ProjectReport::new(project_name(root)?, records))
}

/// Base name of the absolutized root, used as the project name.
fn project_name(root: &Path) -> Result<String> {
    let absolute = root.canonicalize()?;
    Ok(absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute.display().to_string()))
}
