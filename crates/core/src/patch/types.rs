//! Data structures for block patch operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or replacing a block
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("could not find `{marker}` block closed by {delimiter:?} in host text")]
    PatternNotFound { marker: String, delimiter: char },

    #[error("failed to read file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid block pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

/// Result of a pure in-memory replacement.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// The full host text with the block body substituted.
    pub text: String,
    /// Number of substitutions performed. Always 1 on success; zero
    /// matches is reported as [`PatchError::PatternNotFound`] instead.
    pub replacements: usize,
}

/// Summary of a file-level patch.
#[derive(Debug, Clone)]
pub struct FilePatchReport {
    /// The file that was overwritten.
    pub target: PathBuf,
    /// Number of substitutions performed (1 on success).
    pub replacements: usize,
    /// Host size in bytes before the patch.
    pub bytes_before: usize,
    /// Host size in bytes after the patch.
    pub bytes_after: usize,
}
