//! Application state (Model in TEA pattern)
//!
//! - `settings`: provider settings being viewed or edited
//! - `session`: text, languages and action lists of the main view

mod session;
mod settings;

pub use session::SessionState;
pub use settings::{CheckStatus, ConnectionCheck, ConnectionChecks, SettingsState};

use crate::config::Preferences;

/// Complete application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Settings view is showing instead of the main view
    pub show_settings: bool,

    pub settings: SettingsState,

    pub session: SessionState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: &Preferences) -> Self {
        Self {
            show_settings: preferences.ui.open_settings_on_start,
            ..Self::default()
        }
    }
}
