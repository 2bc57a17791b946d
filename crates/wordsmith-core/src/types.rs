//! Domain types: backend wire records and frontend display records
//!
//! Wire records mirror the backend RPC payloads (camelCase JSON). Display
//! records are frontend-only projections built by [`crate::mappers`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Wire records
// ─────────────────────────────────────────────────────────────────────────────

/// Provider and output settings, persisted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
    pub model_name: String,
    /// Sampling temperature, 0.0..=1.0
    pub temperature: f64,
    pub default_input_language: String,
    pub default_output_language: String,
    pub available_languages: Vec<String>,
    pub use_markdown_for_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            headers: BTreeMap::new(),
            model_name: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            default_input_language: String::new(),
            default_output_language: String::new(),
            available_languages: Vec::new(),
            use_markdown_for_output: false,
        }
    }
}

/// Temperature used before settings are loaded.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Lowest accepted temperature.
pub const MIN_TEMPERATURE: f64 = 0.0;

/// Highest accepted temperature.
pub const MAX_TEMPERATURE: f64 = 1.0;

/// One user-invocable text operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub action_id: String,
    pub action_text: String,
}

impl ActionItem {
    pub fn new(action_id: impl Into<String>, action_text: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            action_text: action_text.into(),
        }
    }
}

/// One language option offered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageItem {
    pub language_id: String,
    pub language_text: String,
}

impl LanguageItem {
    pub fn new(language_id: impl Into<String>, language_text: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            language_text: language_text.into(),
        }
    }
}

/// Payload of a `processAction` call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action_id: String,
    pub action_input: String,
    pub action_output: String,
    pub action_input_language: String,
    pub action_output_language: String,
}

/// The endpoint and model the backend currently sends requests to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProvider {
    pub base_url: String,
    pub model_name: String,
}

/// Named collection of text operations shown as one button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionGroup {
    Proofreading,
    Formatting,
    Translating,
    Summarization,
    Transforming,
}

impl ActionGroup {
    /// All groups in display order.
    pub const ALL: [ActionGroup; 5] = [
        ActionGroup::Proofreading,
        ActionGroup::Formatting,
        ActionGroup::Translating,
        ActionGroup::Summarization,
        ActionGroup::Transforming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionGroup::Proofreading => "Proofreading",
            ActionGroup::Formatting => "Formatting",
            ActionGroup::Translating => "Translating",
            ActionGroup::Summarization => "Summarization",
            ActionGroup::Transforming => "Transforming",
        }
    }
}

impl fmt::Display for ActionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display records
// ─────────────────────────────────────────────────────────────────────────────

/// One option of a choice control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectItem {
    pub item_id: String,
    pub display_text: String,
}

impl SelectItem {
    pub fn new(item_id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            display_text: display_text.into(),
        }
    }
}

/// One editable header row.
///
/// `id` is an opaque, freshly generated identifier that keeps list rows
/// stable while editing. It is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    pub id: String,
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: crate::mappers::fresh_id(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// A new row with empty key and value.
    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// True when the key is empty after trimming.
    pub fn has_blank_key(&self) -> bool {
        self.key.trim().is_empty()
    }
}
