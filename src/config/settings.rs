use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

const APP_NAME: &str = "Beatsweep";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("io", "beatsweep", APP_NAME).map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
///
/// `override_path` short-circuits the platform lookup; tests pass one so
/// they never touch the real config directory.
pub fn get_config_file_path(override_path: Option<&Path>) -> Option<PathBuf> {
    match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => get_config_directory().map(|dir| dir.join(CONFIG_FILE)),
    }
}

/// Loads the application configuration from the config file.
/// If the file doesn't exist, it creates a default one.
/// If the file is corrupted or cannot be parsed, it logs a warning
/// and falls back to the default configuration to prevent a crash.
pub fn load_config(override_path: Option<&Path>) -> Result<AppConfig> {
    let config_path = get_config_file_path(override_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default config at {:?}",
            config_path
        );
        let default_config = AppConfig::default();
        save_config(&default_config, override_path)?;
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&config_path)?;

    match serde_json::from_str::<AppConfig>(&config_content) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", config_path);
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse config file at {:?}: {}. Falling back to default config.",
                config_path,
                e
            );
            Ok(AppConfig::default())
        }
    }
}

/// Saves the provided configuration to the config file.
pub fn save_config(config: &AppConfig, override_path: Option<&Path>) -> Result<()> {
    let config_path = get_config_file_path(override_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }
    }

    let config_json = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, config_json)?;
    tracing::info!("Saved config to {:?}", config_path);

    Ok(())
}

/// Best-effort guess at the stock osu! songs directory, used as the initial
/// root suggestion on first runs.
pub fn default_songs_directory() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    #[cfg(windows)]
    let candidate = home.join("AppData").join("Local").join("osu!").join("Songs");
    #[cfg(not(windows))]
    let candidate = home.join(".local").join("share").join("osu").join("Songs");
    candidate.is_dir().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_helpers::setup_test_logging;

    #[test]
    fn config_round_trips_through_disk() {
        setup_test_logging();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.video_extensions.insert("wmv".to_string());
        config.last_directory = Some(dir.path().join("Songs"));
        save_config(&config, Some(&path)).expect("save");

        let loaded = load_config(Some(&path)).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_creates_defaults() {
        setup_test_logging();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let loaded = load_config(Some(&path)).expect("load");
        assert_eq!(loaded, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        setup_test_logging();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");

        let loaded = load_config(Some(&path)).expect("load");
        assert_eq!(loaded, AppConfig::default());
    }
}
