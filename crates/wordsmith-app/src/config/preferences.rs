//! Preferences loader for `<config_dir>/wordsmith/config.toml`

use std::path::{Path, PathBuf};

use wordsmith_core::prelude::*;

use super::types::Preferences;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "wordsmith";

/// Default location of the preferences file, if the platform has a config dir.
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Read and parse a preferences file.
///
/// Errors on unreadable or malformed files. A missing file is an I/O error
/// here; use [`load_preferences`] for the forgiving variant.
pub fn try_load_preferences(path: &Path) -> Result<Preferences> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let prefs: Preferences = toml::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    if prefs.engine.channel_capacity == 0 {
        return Err(Error::config("engine.channel_capacity must be at least 1"));
    }
    Ok(prefs)
}

/// Load preferences, falling back to defaults.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_preferences(path: &Path) -> Preferences {
    if !path.exists() {
        debug!("No preferences at {}, using defaults", path.display());
        return Preferences::default();
    }

    match try_load_preferences(path) {
        Ok(prefs) => {
            debug!("Loaded preferences from {}", path.display());
            prefs
        }
        Err(e) => {
            warn!("Using default preferences: {}", e);
            Preferences::default()
        }
    }
}
