//! Marker-delimited block replacement.
//!
//! This module provides functionality to:
//! - Locate the first block opened by a literal marker and closed by a
//!   single delimiter character inside a large host text
//! - Replace the block body with external content, preserving the marker
//!   and the closing delimiter
//! - Apply the replacement to a file in place, with an atomic write

pub mod apply;
pub mod replacer;
pub mod types;

pub use apply::{apply_to_file, check_file};
pub use replacer::{contains_block, replace_block};
pub use types::{FilePatchReport, PatchError, PatchOutcome};
