//! Destructive operations over matched folders.
//!
//! The engine re-checks the predicate per target before touching anything,
//! tolerates per-item failures, and reports a single aggregate outcome per
//! batch. A target that has already vanished is a successful no-op, not an
//! error, which makes every batch idempotent.

use std::fs;
use std::io;
use std::path::Path;

use super::{
    CoreError, DeletionError, DeletionOutcome, FilterCriteria, FolderInspector, MatchPredicate,
};

pub struct DeletionEngine {
    inspector: FolderInspector,
}

impl DeletionEngine {
    pub fn new(inspector: FolderInspector) -> Self {
        Self { inspector }
    }

    /// Deletes whole target folders, or only the matching descriptor files
    /// within them when the criteria carry a key or mode constraint.
    ///
    /// Per-target failures are collected; the batch always runs to
    /// completion over all targets.
    pub fn delete_matching(
        &self,
        root: &Path,
        targets: &[String],
        criteria: &FilterCriteria,
    ) -> DeletionOutcome {
        let mut outcome = DeletionOutcome::default();
        if !root.is_dir() {
            tracing::warn!("Deletion requested without a valid root: {}", root.display());
            return outcome;
        }

        for name in targets {
            let folder = root.join(name);
            let facts = match self.inspector.inspect(&folder) {
                Ok(facts) => facts,
                Err(CoreError::Io(err, _)) if err.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!("Target already gone: {name}");
                    continue;
                }
                Err(err) => {
                    outcome.errors.push(DeletionError {
                        path: folder,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            // The filesystem may have changed since the scan that produced
            // the target list; re-check before removing anything.
            if !MatchPredicate::matches(&facts, criteria) {
                tracing::debug!("Target no longer matches criteria, skipping: {name}");
                continue;
            }

            if criteria.is_selective() {
                let file_names = MatchPredicate::deletion_targets(&facts, criteria);
                Self::remove_descriptors(&folder, &file_names, &mut outcome);
            } else {
                Self::remove_folder(&folder, &mut outcome);
            }
        }

        tracing::info!(
            "Deletion batch finished: {} deleted, {} errors",
            outcome.deleted,
            outcome.errors.len()
        );
        outcome
    }

    /// Removes recognized video files from each target folder.
    ///
    /// Key and mode criteria do not apply here, and the folder itself is
    /// always left in place, even when it ends up empty.
    pub fn delete_videos(&self, root: &Path, targets: &[String]) -> DeletionOutcome {
        let mut outcome = DeletionOutcome::default();
        if !root.is_dir() {
            tracing::warn!("Video deletion requested without a valid root: {}", root.display());
            return outcome;
        }

        for name in targets {
            let folder = root.join(name);
            let facts = match self.inspector.inspect(&folder) {
                Ok(facts) => facts,
                Err(CoreError::Io(err, _)) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    outcome.errors.push(DeletionError {
                        path: folder,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            for file_name in facts.entry_names.iter().filter(|n| self.inspector.is_video(n)) {
                Self::remove_file(&folder.join(file_name), &mut outcome);
            }
        }

        tracing::info!(
            "Video deletion finished: {} deleted, {} errors",
            outcome.deleted,
            outcome.errors.len()
        );
        outcome
    }

    /// Removes the selected descriptor files, then the folder itself iff the
    /// removals emptied it. A folder that still has entries stays in place
    /// with its smaller descriptor set.
    fn remove_descriptors(folder: &Path, file_names: &[String], outcome: &mut DeletionOutcome) {
        for file_name in file_names {
            Self::remove_file(&folder.join(file_name), outcome);
        }

        match Self::folder_is_empty(folder) {
            Ok(true) => match fs::remove_dir(folder) {
                Ok(()) => {
                    outcome.deleted += 1;
                    tracing::debug!("Removed emptied folder {}", folder.display());
                }
                Err(err) => outcome.errors.push(DeletionError {
                    path: folder.to_path_buf(),
                    reason: err.to_string(),
                }),
            },
            Ok(false) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => outcome.errors.push(DeletionError {
                path: folder.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }

    fn remove_file(path: &Path, outcome: &mut DeletionOutcome) {
        match fs::remove_file(path) {
            Ok(()) => {
                outcome.deleted += 1;
                tracing::debug!("Removed file {}", path.display());
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => outcome.errors.push(DeletionError {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }

    fn remove_folder(folder: &Path, outcome: &mut DeletionOutcome) {
        match fs::remove_dir_all(folder) {
            Ok(()) => {
                outcome.deleted += 1;
                tracing::debug!("Removed folder {}", folder.display());
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => outcome.errors.push(DeletionError {
                path: folder.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }

    fn folder_is_empty(folder: &Path) -> io::Result<bool> {
        Ok(fs::read_dir(folder)?.next().is_none())
    }
}
