pub mod deleter;
pub mod descriptor;
pub mod error;
pub mod filter;
pub mod inspector;
pub mod scanner;

use std::collections::BTreeSet;
use std::path::PathBuf;

/// One descriptor file's parsed contribution to its folder's facts.
///
/// Unreadable files keep their slot in the list with both fields unknown,
/// so the deletion engine still knows the file exists and must be attempted.
#[derive(Debug, Clone)]
pub struct DescriptorEntry {
    pub file_name: String,
    pub key_count: Option<u32>,
    pub mode: Option<u32>,
    pub readable: bool,
}

/// Aggregated facts about one beatmap folder, rebuilt from the filesystem on
/// every call. Nothing here is cached between operations.
#[derive(Debug, Clone, Default)]
pub struct FolderFacts {
    /// Every distinct key count found across the folder's descriptor files.
    pub key_counts: BTreeSet<u32>,
    /// Every distinct mode code found across the folder's descriptor files.
    pub modes: BTreeSet<u32>,
    /// `true` when any entry carries a recognized video extension.
    pub has_video: bool,
    /// The folder's descriptor files, in enumeration order.
    pub descriptors: Vec<DescriptorEntry>,
    /// Every immediate entry name, used by the title filter.
    pub entry_names: Vec<String>,
}

/// A progress snapshot emitted once per folder during a scan.
#[derive(Debug, Clone)]
pub struct ScanProgress {
    pub folders_processed: usize,
    pub folders_total: usize,
    pub current_folder: String,
}

/// Aggregate result of one deletion batch, reported once at the end.
#[derive(Debug, Clone, Default)]
pub struct DeletionOutcome {
    /// Number of removed items; each file and each folder counts as one.
    pub deleted: usize,
    /// Per-item failures. A non-empty list does not mean the batch aborted.
    pub errors: Vec<DeletionError>,
}

/// A single failed removal inside a deletion batch.
#[derive(Debug, Clone)]
pub struct DeletionError {
    pub path: PathBuf,
    pub reason: String,
}

/// Library-wide counts shown by the stats command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub folder_count: usize,
    pub descriptor_count: usize,
}

pub use deleter::DeletionEngine;
pub use error::CoreError;
pub use filter::{FilterCriteria, GameMode, MatchPredicate};
pub use inspector::FolderInspector;
pub use scanner::LibraryScanner;
