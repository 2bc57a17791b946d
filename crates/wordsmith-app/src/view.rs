//! View models derived from [`AppState`]
//!
//! Views never read state fields directly; they render one of these models and
//! send [`crate::Message`]s back. Everything here is recomputed on demand.

use wordsmith_core::{
    action_to_select_item, language_to_select_item, ActionGroup, ErrorKind, KeyValuePair,
    SelectItem,
};

use crate::state::{AppState, CheckStatus, ConnectionCheck, SessionState, SettingsState};

/// Top-level view selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootView {
    Main,
    Settings,
}

impl RootView {
    pub fn from_state(state: &AppState) -> Self {
        if state.show_settings {
            RootView::Settings
        } else {
            RootView::Main
        }
    }
}

/// Hint shown under an error banner.
pub fn error_hint(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network | ErrorKind::Unavailable => {
            "Check that the backend service is running and reachable."
        }
        ErrorKind::Timeout => "The backend took too long to answer. Try again.",
        ErrorKind::Rejected => "Check the provider settings.",
        ErrorKind::InvalidResponse => "The backend sent a response Wordsmith could not read.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub hint: Option<&'static str>,
}

// ─────────────────────────────────────────────────────────────────
// Main view
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub item: SelectItem,
    /// This action is the one being processed
    pub is_running: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub group: ActionGroup,
    pub label: &'static str,
    pub buttons: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainViewModel {
    pub input_text: String,
    pub output_text: String,
    pub input_languages: Vec<SelectItem>,
    pub output_languages: Vec<SelectItem>,
    pub selected_input_language: Option<String>,
    pub selected_output_language: Option<String>,
    pub action_rows: Vec<ActionRow>,
    pub is_processing: bool,
    pub can_copy: bool,
    pub error: Option<ErrorBanner>,
    /// e.g. `gpt-4o-mini @ https://api.openai.com/v1`
    pub provider_summary: Option<String>,
}

impl MainViewModel {
    pub fn from_state(session: &SessionState) -> Self {
        let action_rows = ActionGroup::ALL
            .iter()
            .map(|group| ActionRow {
                group: *group,
                label: group.label(),
                buttons: session
                    .actions
                    .get(*group)
                    .iter()
                    .map(|action| ActionButton {
                        item: action_to_select_item(action),
                        is_running: session.current_task.as_deref()
                            == Some(action.action_id.as_str()),
                        disabled: session.is_processing || !session.initialized,
                    })
                    .collect(),
            })
            .filter(|row| !row.buttons.is_empty())
            .collect();

        Self {
            input_text: session.input_text.clone(),
            output_text: session.output_text.clone(),
            input_languages: session
                .input_languages
                .iter()
                .map(language_to_select_item)
                .collect(),
            output_languages: session
                .output_languages
                .iter()
                .map(language_to_select_item)
                .collect(),
            selected_input_language: session.selected_input_language.clone(),
            selected_output_language: session.selected_output_language.clone(),
            action_rows,
            is_processing: session.is_processing,
            can_copy: !session.output_text.is_empty() && !session.is_processing,
            error: session.error_message.as_ref().map(|message| ErrorBanner {
                message: message.clone(),
                hint: session.error_kind.map(error_hint),
            }),
            provider_summary: session
                .provider
                .as_ref()
                .map(|p| format!("{} @ {}", p.model_name, p.base_url)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Settings view
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsViewModel {
    pub base_url: String,
    pub base_url_error: Option<String>,
    pub header_rows: Vec<KeyValuePair>,
    pub can_add_header: bool,
    pub model: SelectItem,
    pub models: Vec<SelectItem>,
    pub temperature: f64,
    pub languages: Vec<SelectItem>,
    pub default_input_language: SelectItem,
    pub default_output_language: SelectItem,
    pub use_markdown_for_output: bool,
    pub checks: Vec<(ConnectionCheck, CheckStatus)>,
    pub settings_file_path: Option<String>,
    pub is_loading: bool,
    pub error_msg: Option<String>,
    pub save_enabled: bool,
}

impl SettingsViewModel {
    pub fn from_state(settings: &SettingsState) -> Self {
        let checks = [
            ConnectionCheck::Connection,
            ConnectionCheck::ModelsRequest,
            ConnectionCheck::CompletionRequest,
        ]
        .into_iter()
        .map(|check| (check, settings.checks.get(check)))
        .collect();

        Self {
            base_url: settings.settings.base_url.clone(),
            base_url_error: settings.base_url_error.clone(),
            header_rows: settings.header_rows.clone(),
            can_add_header: !settings.header_rows.iter().any(KeyValuePair::has_blank_key),
            model: settings.model_item(),
            models: settings.model_items(),
            temperature: settings.settings.temperature,
            languages: settings.language_items(),
            default_input_language: settings.default_input_language_item(),
            default_output_language: settings.default_output_language_item(),
            use_markdown_for_output: settings.settings.use_markdown_for_output,
            checks,
            settings_file_path: settings.settings_file_path.clone(),
            is_loading: settings.is_loading,
            error_msg: settings.error_msg.clone(),
            save_enabled: settings.can_save(),
        }
    }
}
