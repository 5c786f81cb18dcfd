//! Settings persistence
//!
//! Reads and writes [`GameSettings`] as JSON.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/cheesse/settings.json`, unless a path is given explicitly.
//! Falls back to `settings.json` in the working directory when no
//! configuration directory can be found.
//!
//! # Error Handling
//!
//! [`load_settings`] reports every failure. [`load_or_default`] is what the
//! binary calls: a missing file is normal, anything else is logged and the
//! defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use super::error::CoreResult;
use super::resources::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default settings file path
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "cheesse", "cheesse") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Parse and validate settings JSON
pub fn parse_settings(contents: &str) -> CoreResult<GameSettings> {
    let settings: GameSettings = serde_json::from_str(contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Read settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    parse_settings(&contents)
}

/// Read settings from `path`, or the default location, falling back to
/// defaults on any failure
pub fn load_or_default(path: Option<&Path>) -> GameSettings {
    let resolved = path.map(Path::to_path_buf).unwrap_or_else(settings_path);

    if !resolved.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            resolved
        );
        return GameSettings::default();
    }

    match load_settings(&resolved) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", resolved);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                resolved, e
            );
            GameSettings::default()
        }
    }
}

/// Write settings to `path`, creating parent directories as needed
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
