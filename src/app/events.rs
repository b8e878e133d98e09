//! Defines the events the engines emit toward the presentation layer.

use crate::core::{DeletionOutcome, LibraryStats, ScanProgress};

/// Events sent from the command layer to whatever front end is attached.
///
/// The CLI shell renders these on the terminal; a graphical shell would map
/// them onto its widgets instead.
#[derive(Debug)]
pub enum UserEvent {
    /// A progress update during a library scan.
    ScanProgress(ScanProgress),
    /// The ordered list of matching folder names produced by a scan.
    ScanComplete(Vec<String>),
    /// The aggregate result of a deletion batch.
    DeletionComplete(DeletionOutcome),
    /// Library-wide folder and descriptor counts.
    StatsReady(LibraryStats),
    /// An error message to be displayed to the user.
    Error(String),
}
