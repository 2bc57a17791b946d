//! Message types for the application (TEA pattern)

use std::collections::BTreeMap;

use wordsmith_core::{
    ActionGroup, ActionItem, CurrentProvider, ErrorReport, LanguageItem, Settings,
};

use crate::state::ConnectionCheck;

/// Action lists for every group, as fetched during initialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionLists {
    pub proofreading: Vec<ActionItem>,
    pub formatting: Vec<ActionItem>,
    pub translating: Vec<ActionItem>,
    pub summarization: Vec<ActionItem>,
    pub transforming: Vec<ActionItem>,
}

impl ActionLists {
    pub fn get(&self, group: ActionGroup) -> &[ActionItem] {
        match group {
            ActionGroup::Proofreading => &self.proofreading,
            ActionGroup::Formatting => &self.formatting,
            ActionGroup::Translating => &self.translating,
            ActionGroup::Summarization => &self.summarization,
            ActionGroup::Transforming => &self.transforming,
        }
    }

    /// Find an action by id across all groups.
    pub fn find(&self, action_id: &str) -> Option<&ActionItem> {
        ActionGroup::ALL
            .iter()
            .flat_map(|group| self.get(*group))
            .find(|item| item.action_id == action_id)
    }
}

/// Everything the initialization fan-out produces. Applied as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialData {
    pub actions: ActionLists,
    pub input_languages: Vec<LanguageItem>,
    pub output_languages: Vec<LanguageItem>,
    pub default_input_language: LanguageItem,
    pub default_output_language: LanguageItem,
    pub provider: CurrentProvider,
}

/// Pending state held by a task that was aborted before it reported back.
#[derive(Debug, Clone, PartialEq)]
pub enum Cancelled {
    /// Load, reset or save of the settings form
    SettingsRequest,
    Check(ConnectionCheck),
    Action { action_id: String },
    /// Initialization or a clipboard transfer
    SessionRequest,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Root View
    // ─────────────────────────────────────────────────────────
    /// Switch to the settings view (reloads settings and models)
    ShowSettings,

    /// Return to the main view
    HideSettings,

    // ─────────────────────────────────────────────────────────
    // Settings Slice
    // ─────────────────────────────────────────────────────────
    /// Fetch settings from the backend
    LoadSettings,

    /// Settings arrived from a load or a reset
    SettingsLoaded { settings: Settings },

    /// Load or reset failed
    SettingsLoadFailed { error: ErrorReport },

    /// Fetch the settings file location for display
    FetchSettingsFilePath,

    SettingsFilePathLoaded { path: String },

    SettingsFilePathFailed { error: ErrorReport },

    /// Ask the backend to restore default settings
    ResetSettings,

    /// Persist the current settings
    SaveSettings,

    SettingsSaved { settings: Settings },

    SettingsSaveFailed { error: ErrorReport },

    SetBaseUrl(String),

    /// Replace the whole header map (recomputes the header rows)
    SetHeaders(BTreeMap<String, String>),

    SetModelName(String),

    SetTemperature(f64),

    SetDefaultInputLanguage(String),

    SetDefaultOutputLanguage(String),

    SetUseMarkdownForOutput(bool),

    /// Append a blank header row
    AddHeader,

    UpdateHeaderKey { id: String, key: String },

    UpdateHeaderValue { id: String, value: String },

    RemoveHeader { id: String },

    /// Fetch the provider's model list
    ListModels,

    ModelsListed { models: Vec<String> },

    ModelsListFailed { error: ErrorReport },

    /// Run one of the provider checks against the current form values
    RunCheck(ConnectionCheck),

    CheckCompleted { check: ConnectionCheck, passed: bool },

    DismissSettingsError,

    // ─────────────────────────────────────────────────────────
    // Session Slice
    // ─────────────────────────────────────────────────────────
    /// Fetch action lists, languages and provider in one fan-out
    Initialize,

    Initialized(Box<InitialData>),

    InitializeFailed { error: ErrorReport },

    /// Run an action on the current input
    ProcessAction { action_id: String },

    ActionProcessed { action_id: String, output: String },

    ActionFailed { action_id: String, error: ErrorReport },

    /// Copy the output text to the clipboard
    CopyOutput,

    ClipboardCopied { success: bool },

    /// Replace the input text with the clipboard contents
    PasteInput,

    ClipboardPasted { text: String },

    ClipboardPasteFailed { error: ErrorReport },

    /// Re-fetch the provider summary (after a settings save)
    RefreshProvider,

    ProviderRefreshed { provider: CurrentProvider },

    ProviderRefreshFailed { error: ErrorReport },

    SetInputText(String),

    SetOutputText(String),

    SelectInputLanguage(String),

    SelectOutputLanguage(String),

    SwapLanguages,

    ClearInput,

    ClearOutput,

    DismissError,

    // ─────────────────────────────────────────────────────────
    // Engine
    // ─────────────────────────────────────────────────────────
    /// Release what an aborted task was holding
    TaskCancelled(Cancelled),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_lists_lookup() {
        let lists = ActionLists {
            proofreading: vec![ActionItem::new("proofread", "Proofread")],
            summarization: vec![ActionItem::new("summarize", "Summarize")],
            ..Default::default()
        };

        assert_eq!(lists.get(ActionGroup::Proofreading).len(), 1);
        assert!(lists.get(ActionGroup::Formatting).is_empty());
        assert_eq!(
            lists.find("summarize").map(|a| a.action_text.as_str()),
            Some("Summarize")
        );
        assert!(lists.find("missing").is_none());
    }
}
