//! Defines the central, mutable state of the application.

use std::path::PathBuf;

use crate::config::{self, AppConfig};
use crate::core::CoreError;

/// Holds the session state shared by all commands.
pub struct AppState {
    /// The application's configuration settings.
    pub config: AppConfig,
    /// The beatmap root for this session, if one has been selected.
    pub current_path: Option<PathBuf>,
    /// The match list produced by the most recent scan.
    pub last_matches: Vec<String>,
}

impl Default for AppState {
    /// Creates a default state, loading the configuration from disk and
    /// re-opening the previous directory when configured to do so.
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_default();
        let current_path = if config.auto_load_last_directory {
            config.last_directory.clone().filter(|path| path.is_dir())
        } else {
            None
        };
        Self {
            config,
            current_path,
            last_matches: Vec::new(),
        }
    }
}

impl AppState {
    /// Creates a state around an explicit configuration. Tests use this to
    /// stay clear of the on-disk config file.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            current_path: None,
            last_matches: Vec::new(),
        }
    }

    /// Selects a new beatmap root and remembers it for the next session.
    pub fn select_directory(&mut self, path: PathBuf) -> Result<(), CoreError> {
        if !path.is_dir() {
            return Err(CoreError::InvalidRoot(path));
        }
        self.config.last_directory = Some(path.clone());
        if let Err(e) = config::settings::save_config(&self.config, None) {
            tracing::warn!("Failed to persist selected directory: {e}");
        }
        self.last_matches.clear();
        self.current_path = Some(path);
        Ok(())
    }
}
