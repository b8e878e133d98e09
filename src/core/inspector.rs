//! Folder-level fact gathering.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{descriptor, CoreError, DescriptorEntry, FolderFacts};
use crate::utils::file_detection::{is_descriptor_file, is_video_file};

/// Gathers per-folder facts by re-reading the filesystem on every call.
///
/// Configured once from the application settings; holds no per-folder state,
/// so the same inspector serves scans and deletions alike.
#[derive(Debug, Clone)]
pub struct FolderInspector {
    descriptor_extension: String,
    video_extensions: HashSet<String>,
}

impl FolderInspector {
    pub fn new(descriptor_extension: &str, video_extensions: HashSet<String>) -> Self {
        Self {
            descriptor_extension: descriptor_extension.to_ascii_lowercase(),
            video_extensions: video_extensions
                .into_iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Checks a file name against the configured video extension set.
    pub fn is_video(&self, file_name: &str) -> bool {
        is_video_file(file_name, &self.video_extensions)
    }

    /// Aggregates descriptor fields and media presence for one folder.
    ///
    /// Enumeration is non-recursive. Individual files that cannot be read
    /// still appear in the descriptor list with unknown fields; only a
    /// folder that cannot be enumerated at all is an error.
    pub fn inspect(&self, folder: &Path) -> Result<FolderFacts, CoreError> {
        let entries =
            fs::read_dir(folder).map_err(|e| CoreError::Io(e, folder.to_path_buf()))?;

        let mut facts = FolderFacts::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", folder.display(), err);
                    continue;
                }
            };
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if self.is_video(&file_name) {
                facts.has_video = true;
            }
            if is_descriptor_file(&file_name, &self.descriptor_extension) {
                let descriptor = self.read_descriptor(&entry.path(), file_name.clone());
                if let Some(key_count) = descriptor.key_count {
                    facts.key_counts.insert(key_count);
                }
                if let Some(mode) = descriptor.mode {
                    facts.modes.insert(mode);
                }
                facts.descriptors.push(descriptor);
            }
            facts.entry_names.push(file_name);
        }
        Ok(facts)
    }

    fn read_descriptor(&self, path: &Path, file_name: String) -> DescriptorEntry {
        match fs::read(path) {
            Ok(bytes) => {
                // Lossy decoding keeps malformed or binary descriptors from
                // becoming errors; unparseable fields simply stay unknown.
                let content = String::from_utf8_lossy(&bytes);
                DescriptorEntry {
                    file_name,
                    key_count: descriptor::parse_key_count(&content),
                    mode: descriptor::parse_mode(&content),
                    readable: true,
                }
            }
            Err(err) => {
                tracing::warn!("Could not read descriptor {}: {}", path.display(), err);
                DescriptorEntry {
                    file_name,
                    key_count: None,
                    mode: None,
                    readable: false,
                }
            }
        }
    }
}
