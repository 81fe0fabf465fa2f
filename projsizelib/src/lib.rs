//! # projsizelib
//!
//! A small library for measuring the size of a project in lines.
//!
//! ## Overview
//!
//! Given a root directory, a file-name glob, and a set of directory names to
//! skip, the library walks the tree, counts the lines in every matching file,
//! and aggregates the per-file counts into a [`ProjectReport`]. It returns
//! structured data and performs no output itself.
//!
//! ## Features
//!
//! - **Glob selection**: pick files by name pattern (e.g. `*.py`) at any depth
//! - **Skip directories**: exclude trees like `venv` by literal name
//! - **Pure data types**: [`FileRecord`] and [`ProjectReport`] are plain
//!   values with the total kept consistent by construction
//!
//! ## Example
//!
//! ```rust
//! use projsizelib::{scan, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a small project
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("app.py"), "import os\nprint(os.name)\n").unwrap();
//! fs::create_dir(dir.path().join("venv")).unwrap();
//! fs::write(dir.path().join("venv/gen.py"), "x = 1\n").unwrap();
//!
//! // Scan with the defaults (*.py, skipping venv/)
//! let report = scan(dir.path(), ScanOptions::new()).unwrap();
//! assert_eq!(report.files.len(), 1);
//! assert_eq!(report.lines, 2);
//!
//! // Scan with a different glob
//! let report = scan(dir.path(), ScanOptions::new().extension("*.rs")).unwrap();
//! assert_eq!(report.lines, 0);
//! ```

pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;

pub use error::ProjsizeError;
pub use filter::{discover_files, FilterConfig};
pub use report::{FileRecord, ProjectReport};
pub use scanner::{count_lines, scan, ScanOptions};

/// Result type for projsizelib operations
pub type Result<T> = std::result::Result<T, ProjsizeError>;
