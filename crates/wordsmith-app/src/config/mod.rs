//! Local preferences for Wordsmith
//!
//! Supports:
//! - `<config_dir>/wordsmith/config.toml` - Frontend preferences
//!
//! Provider settings live in the backend and are edited through
//! [`crate::state::SettingsState`], not here.

pub mod preferences;
pub mod types;

pub use preferences::{default_preferences_path, load_preferences, try_load_preferences};
pub use types::*;
