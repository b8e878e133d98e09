pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::core::FolderInspector;

/// Application configuration persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// File extension identifying descriptor files, without the dot.
    pub descriptor_extension: String,
    /// Extensions counted as video assets, without the dot.
    pub video_extensions: HashSet<String>,
    /// The beatmap root selected in the previous session.
    pub last_directory: Option<PathBuf>,
    /// Re-open `last_directory` on startup when it still exists.
    pub auto_load_last_directory: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }

    /// Builds the folder inspector configured by these settings.
    pub fn inspector(&self) -> FolderInspector {
        FolderInspector::new(&self.descriptor_extension, self.video_extensions.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut video_extensions = HashSet::new();
        for ext in ["mp4", "avi", "flv"] {
            video_extensions.insert(ext.to_string());
        }

        Self {
            descriptor_extension: "osu".to_string(),
            video_extensions,
            last_directory: None,
            auto_load_last_directory: true,
        }
    }
}
