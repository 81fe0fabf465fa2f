//! Error types for projsizelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a project
#[derive(Error, Debug)]
pub enum ProjsizeError {
    /// Failed to read a file while counting its lines
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Scan root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
