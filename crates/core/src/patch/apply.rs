//! File-level patching: read the inputs, run the replacement, write back.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::patch::replacer::{contains_block, replace_block};
use crate::patch::types::{FilePatchReport, PatchError};

fn read_err(path: &Path, source: std::io::Error) -> PatchError {
    PatchError::ReadError {
        path: path.to_path_buf(),
        source,
    }
}

fn write_err(path: &Path, source: std::io::Error) -> PatchError {
    PatchError::WriteError {
        path: path.to_path_buf(),
        source,
    }
}

/// Overwrite `path` via a temp file in the same directory and a rename, so
/// a failure mid-write cannot leave a truncated host file behind.
fn write_atomic(path: &Path, contents: &str) -> Result<(), PatchError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(path, e))?;
    tmp.write_all(contents.as_bytes()).map_err(|e| write_err(path, e))?;
    tmp.persist(path).map_err(|e| write_err(path, e.error))?;

    Ok(())
}

/// Patch `host_path` in place: replace the body of the first block opened by
/// `marker` and closed by `delimiter` with the contents of `source_path`.
///
/// Both files are read exactly once. The host file is only touched after a
/// successful match, so a missing pattern never corrupts the target.
///
/// # Errors
///
/// Returns [`PatchError::PatternNotFound`] when the block is absent, and
/// [`PatchError::ReadError`] / [`PatchError::WriteError`] for I/O failures
/// on either file.
pub fn apply_to_file(
    host_path: &Path,
    source_path: &Path,
    marker: &str,
    delimiter: char,
) -> Result<FilePatchReport, PatchError> {
    let replacement =
        fs::read_to_string(source_path).map_err(|e| read_err(source_path, e))?;
    let host = fs::read_to_string(host_path).map_err(|e| read_err(host_path, e))?;

    debug!(
        host = %host_path.display(),
        host_bytes = host.len(),
        replacement_bytes = replacement.len(),
        "patching host file"
    );

    let outcome = replace_block(&host, marker, delimiter, &replacement)?;

    write_atomic(host_path, &outcome.text)?;

    Ok(FilePatchReport {
        target: host_path.to_path_buf(),
        replacements: outcome.replacements,
        bytes_before: host.len(),
        bytes_after: outcome.text.len(),
    })
}

/// Read-only probe: report whether `host_path` contains the block without
/// modifying anything.
///
/// # Errors
///
/// Returns [`PatchError::ReadError`] if the host file cannot be read.
pub fn check_file(host_path: &Path, marker: &str, delimiter: char) -> Result<bool, PatchError> {
    let host = fs::read_to_string(host_path).map_err(|e| read_err(host_path, e))?;
    contains_block(&host, marker, delimiter)
}
