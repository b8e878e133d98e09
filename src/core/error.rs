//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the `core` module.
///
/// This enum encapsulates the errors that can escape a core operation.
/// Per-item filesystem failures inside a deletion batch are deliberately
/// *not* represented here; they fold into the batch's `DeletionOutcome`
/// instead of aborting it.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents an I/O error, typically from file system operations.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// A filter field was supplied but could not be interpreted. Raised
    /// before any I/O is attempted, so the operation has no side effects.
    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(String),

    /// A path that was expected to be a beatmap directory but was not.
    #[error("not a valid beatmap directory: {0}")]
    InvalidRoot(PathBuf),
}
