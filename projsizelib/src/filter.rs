//! File discovery with glob and skip-directory filtering.
//!
//! This module handles the first stage of the pipeline: deciding which
//! files get counted. Selection is by file-name glob; exclusion is by
//! literal directory name, matched against every path segment.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::ProjsizeError;
use crate::Result;

/// Configuration for selecting which files to count.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// File-name glob (e.g. `*.py`), applied at any depth
    pub pattern: Pattern,
    /// Literal names to exclude wherever they occur in a path
    pub skip_dirs: Vec<String>,
}

impl FilterConfig {
    /// Create a filter for the given file-name glob.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| ProjsizeError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            skip_dirs: Vec::new(),
        })
    }

    /// Set the names to skip.
    pub fn skip(mut self, names: Vec<String>) -> Self {
        self.skip_dirs = names;
        self
    }

    fn is_skipped(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|s| s == name)
    }

    /// Check if a path should be counted.
    ///
    /// A path matches if:
    /// 1. Its file name matches the glob
    /// 2. No segment of the path equals a skip entry
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if !self.pattern.matches(name) {
            return false;
        }

        !path
            .components()
            .any(|c| c.as_os_str().to_str().is_some_and(|s| self.is_skipped(s)))
    }
}

/// Discover files under `root` that match the filter.
///
/// Walks the directory tree, pruning skipped directories, and returns the
/// matching files in traversal order (OS-dependent, not sorted).
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ProjsizeError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        // Prune skipped directories instead of filtering their leaves
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !filter.is_skipped(name);
        }
        // Include files
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if entry.file_type().is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_tree(dir: &Path) {
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::create_dir_all(dir.join("venv/lib")).unwrap();
        fs::create_dir_all(dir.join("docs")).unwrap();

        fs::write(dir.join("main.py"), "print('hi')\n").unwrap();
        fs::write(dir.join("src/util.py"), "pass\n").unwrap();
        fs::write(dir.join("venv/setup.py"), "# generated\n").unwrap();
        fs::write(dir.join("venv/lib/six.py"), "# vendored\n").unwrap();
        fs::write(dir.join("docs/readme.md"), "# docs\n").unwrap();
    }

    #[test]
    fn test_matches_glob_on_file_name() {
        let filter = FilterConfig::new("*.py").unwrap();

        assert!(filter.matches(Path::new("main.py")));
        assert!(filter.matches(Path::new("deeply/nested/mod.py")));
        assert!(!filter.matches(Path::new("readme.md")));
        assert!(!filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_matches_rejects_skipped_segment() {
        let filter = FilterConfig::new("*.py")
            .unwrap()
            .skip(vec!["venv".to_string()]);

        assert!(filter.matches(Path::new("src/util.py")));
        assert!(!filter.matches(Path::new("venv/setup.py")));
        assert!(!filter.matches(Path::new("deep/venv/lib/six.py")));
    }

    #[test]
    fn test_matches_rejects_file_named_like_skip_entry() {
        // The skip list matches every path segment, file names included
        let filter = FilterConfig::new("*")
            .unwrap()
            .skip(vec!["venv".to_string()]);

        assert!(!filter.matches(Path::new("src/venv")));
        assert!(filter.matches(Path::new("src/venue")));
    }

    #[test]
    fn test_discover_files() {
        let temp = tempdir().unwrap();
        create_test_tree(temp.path());

        let filter = FilterConfig::new("*.py")
            .unwrap()
            .skip(vec!["venv".to_string()]);
        let files = discover_files(temp.path(), &filter).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("main.py")));
        assert!(files.iter().any(|p| p.ends_with("src/util.py")));
        assert!(!files.iter().any(|p| p.to_string_lossy().contains("venv")));
    }

    #[test]
    fn test_discover_files_without_skip() {
        let temp = tempdir().unwrap();
        create_test_tree(temp.path());

        let filter = FilterConfig::new("*.py").unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();

        assert_eq!(files.len(), 4);
        assert!(files.iter().any(|p| p.ends_with("venv/lib/six.py")));
    }

    #[test]
    fn test_discover_single_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("script.py");
        fs::write(&file_path, "x = 1\n").unwrap();

        let filter = FilterConfig::new("*.py").unwrap();
        let files = discover_files(&file_path, &filter).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0], file_path);
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let filter = FilterConfig::new("*.py").unwrap();
        let result = discover_files("/nonexistent/path", &filter);

        assert!(matches!(result, Err(ProjsizeError::PathNotFound(_))));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new("[invalid");

        assert!(result.is_err());
        if let Err(ProjsizeError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
