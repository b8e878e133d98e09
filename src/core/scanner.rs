//! Library traversal: applies the match predicate folder by folder.

use std::path::Path;

use walkdir::WalkDir;

use super::{
    CoreError, FilterCriteria, FolderInspector, LibraryStats, MatchPredicate, ScanProgress,
};

/// Walks the immediate subfolders of a library root and collects the names
/// of folders matching the active criteria.
pub struct LibraryScanner {
    inspector: FolderInspector,
}

impl LibraryScanner {
    pub fn new(inspector: FolderInspector) -> Self {
        Self { inspector }
    }

    /// Returns matching folder names in enumeration order.
    ///
    /// An unset or vanished root is a silent no-op yielding no matches; the
    /// caller is responsible for prompting for a directory. The progress
    /// callback fires once per folder whether or not it matched. Two scans
    /// over an unchanged tree with the same criteria yield identical output.
    pub fn scan<F>(
        &self,
        root: &Path,
        criteria: &FilterCriteria,
        mut on_progress: F,
    ) -> Result<Vec<String>, CoreError>
    where
        F: FnMut(ScanProgress),
    {
        if !root.is_dir() {
            tracing::warn!("Scan requested without a valid root: {}", root.display());
            return Ok(Vec::new());
        }

        let folders = Self::subfolders(root);
        let total = folders.len();
        let mut matches = Vec::new();

        for (index, name) in folders.into_iter().enumerate() {
            match self.inspector.inspect(&root.join(&name)) {
                Ok(facts) => {
                    if MatchPredicate::matches(&facts, criteria) {
                        matches.push(name.clone());
                    }
                }
                Err(err) => {
                    tracing::warn!("Skipping unreadable folder {name}: {err}");
                }
            }
            on_progress(ScanProgress {
                folders_processed: index + 1,
                folders_total: total,
                current_folder: name,
            });
        }

        tracing::info!("Scan complete: {} of {} folders matched", matches.len(), total);
        Ok(matches)
    }

    /// Counts beatmap folders and descriptor files under the root.
    pub fn stats(&self, root: &Path) -> LibraryStats {
        let mut stats = LibraryStats::default();
        if !root.is_dir() {
            return stats;
        }
        for name in Self::subfolders(root) {
            if let Ok(facts) = self.inspector.inspect(&root.join(&name)) {
                stats.folder_count += 1;
                stats.descriptor_count += facts.descriptors.len();
            }
        }
        stats
    }

    /// Immediate subdirectory names in filesystem enumeration order.
    fn subfolders(root: &Path) -> Vec<String> {
        WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect()
    }
}
