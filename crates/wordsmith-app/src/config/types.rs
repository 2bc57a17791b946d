//! Local preference types
//!
//! Defines:
//! - `Preferences` - Frontend-only preferences (`config.toml`)
//! - Section types for the UI, the engine and logging

use serde::{Deserialize, Serialize};

/// Frontend preferences. Provider settings are owned by the backend and never
/// appear here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Preferences {
    #[serde(default)]
    pub ui: UiPreferences,

    #[serde(default)]
    pub engine: EngineSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// UI preferences
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiPreferences {
    /// Show the settings view instead of the main view on startup
    #[serde(default)]
    pub open_settings_on_start: bool,
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineSettings {
    /// Capacity of the task completion channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    64
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `WORDSMITH_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "wordsmith=info,warn".to_string()
}
