//! Backend RPC surface
//!
//! The backend service (settings persistence, provider calls, action
//! execution) runs behind an IPC bridge. This module only describes the
//! operations the frontend consumes and the transport failures it can see.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use wordsmith_core::{
    ActionItem, ActionRequest, CurrentProvider, ErrorKind, LanguageItem, Settings,
};

/// Result of a single RPC call
pub type RpcResult<T> = std::result::Result<T, RpcError>;

/// Failure reported by the IPC bridge for one call.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend bridge disconnected")]
    Disconnected,
}

impl RpcError {
    pub fn remote(code: i64, message: impl Into<String>) -> Self {
        Self::Remote {
            code,
            message: message.into(),
        }
    }

    /// Classify this failure. Called once, where the error leaves the bridge.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RpcError::Transport(_) => ErrorKind::Network,
            RpcError::Timeout(_) => ErrorKind::Timeout,
            RpcError::Remote { .. } => ErrorKind::Rejected,
            RpcError::Decode(_) => ErrorKind::InvalidResponse,
            RpcError::Disconnected => ErrorKind::Unavailable,
        }
    }
}

/// Severity levels accepted by the backend log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

/// Every backend operation, used for log lines and user-facing failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadSettings,
    SaveSettings,
    ResetSettings,
    SettingsFilePath,
    ValidateConnection,
    ValidateModelsRequest,
    ValidateCompletionRequest,
    ListModels,
    ProofreadingItems,
    FormattingItems,
    TranslatingItems,
    SummarizationItems,
    TransformingItems,
    InputLanguages,
    OutputLanguages,
    DefaultInputLanguage,
    DefaultOutputLanguage,
    CurrentProvider,
    ProcessAction,
    ClipboardGet,
    ClipboardSet,
    Log,
}

impl Operation {
    /// RPC method name on the bridge.
    pub fn method(&self) -> &'static str {
        match self {
            Operation::LoadSettings => "loadSettings",
            Operation::SaveSettings => "saveSettings",
            Operation::ResetSettings => "resetToDefaultSettings",
            Operation::SettingsFilePath => "getSettingsFilePath",
            Operation::ValidateConnection => "validateConnection",
            Operation::ValidateModelsRequest => "validateModelsRequest",
            Operation::ValidateCompletionRequest => "validateCompletionRequest",
            Operation::ListModels => "getModelsList",
            Operation::ProofreadingItems => "getProofreadingItems",
            Operation::FormattingItems => "getFormattingItems",
            Operation::TranslatingItems => "getTranslatingItems",
            Operation::SummarizationItems => "getSummarizationItems",
            Operation::TransformingItems => "getTransformingItems",
            Operation::InputLanguages => "getInputLanguages",
            Operation::OutputLanguages => "getOutputLanguages",
            Operation::DefaultInputLanguage => "getDefaultInputLanguage",
            Operation::DefaultOutputLanguage => "getDefaultOutputLanguage",
            Operation::CurrentProvider => "getCurrentProviderAndModel",
            Operation::ProcessAction => "processAction",
            Operation::ClipboardGet => "clipboardGetText",
            Operation::ClipboardSet => "clipboardSetText",
            Operation::Log => "log",
        }
    }

    /// Fixed message surfaced to the user when the call fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::LoadSettings => "Failed to load settings",
            Operation::SaveSettings => "Failed to save settings",
            Operation::ResetSettings => "Failed to reset settings to default",
            Operation::SettingsFilePath => "Failed to get settings file path",
            Operation::ValidateConnection => "Failed to validate connection",
            Operation::ValidateModelsRequest => "Failed to validate models request",
            Operation::ValidateCompletionRequest => "Failed to validate completion request",
            Operation::ListModels => "Failed to get list of models",
            Operation::ProofreadingItems => "Failed to get proofreading actions",
            Operation::FormattingItems => "Failed to get formatting actions",
            Operation::TranslatingItems => "Failed to get translating actions",
            Operation::SummarizationItems => "Failed to get summarization actions",
            Operation::TransformingItems => "Failed to get transforming actions",
            Operation::InputLanguages => "Failed to get input languages",
            Operation::OutputLanguages => "Failed to get output languages",
            Operation::DefaultInputLanguage => "Failed to get default input language",
            Operation::DefaultOutputLanguage => "Failed to get default output language",
            Operation::CurrentProvider => "Failed to get current provider and model",
            Operation::ProcessAction => "Failed to process action",
            Operation::ClipboardGet => "Failed to read from clipboard",
            Operation::ClipboardSet => "Failed to copy to clipboard",
            Operation::Log => "Failed to write log",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// Backend operations consumed by the frontend.
///
/// Implemented by the IPC bridge in the host application and by
/// `test_utils::FakeBackend` in tests.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    // ── Settings ────────────────────────────────────────────────
    async fn load_settings(&self) -> RpcResult<Settings>;

    async fn save_settings(&self, settings: &Settings) -> RpcResult<Settings>;

    async fn reset_to_default_settings(&self) -> RpcResult<Settings>;

    /// Location of the settings file, for read-only display.
    async fn settings_file_path(&self) -> RpcResult<String>;

    // ── Provider checks ─────────────────────────────────────────
    async fn validate_connection(
        &self,
        base_url: &str,
        headers: &BTreeMap<String, String>,
    ) -> RpcResult<bool>;

    async fn validate_models_request(
        &self,
        base_url: &str,
        headers: &BTreeMap<String, String>,
    ) -> RpcResult<bool>;

    async fn validate_completion_request(&self, settings: &Settings) -> RpcResult<bool>;

    async fn get_models_list(&self) -> RpcResult<Vec<String>>;

    // ── Actions ─────────────────────────────────────────────────
    async fn get_proofreading_items(&self) -> RpcResult<Vec<ActionItem>>;

    async fn get_formatting_items(&self) -> RpcResult<Vec<ActionItem>>;

    async fn get_translating_items(&self) -> RpcResult<Vec<ActionItem>>;

    async fn get_summarization_items(&self) -> RpcResult<Vec<ActionItem>>;

    async fn get_transforming_items(&self) -> RpcResult<Vec<ActionItem>>;

    async fn process_action(&self, request: &ActionRequest) -> RpcResult<String>;

    // ── Languages / provider ────────────────────────────────────
    async fn get_input_languages(&self) -> RpcResult<Vec<LanguageItem>>;

    async fn get_output_languages(&self) -> RpcResult<Vec<LanguageItem>>;

    async fn get_default_input_language(&self) -> RpcResult<LanguageItem>;

    async fn get_default_output_language(&self) -> RpcResult<LanguageItem>;

    async fn get_current_provider(&self) -> RpcResult<CurrentProvider>;

    // ── Clipboard ───────────────────────────────────────────────
    async fn clipboard_get_text(&self) -> RpcResult<String>;

    async fn clipboard_set_text(&self, text: &str) -> RpcResult<bool>;

    // ── Log sink ────────────────────────────────────────────────
    async fn log_trace(&self, message: &str) -> RpcResult<()>;

    async fn log_debug(&self, message: &str) -> RpcResult<()>;

    async fn log_info(&self, message: &str) -> RpcResult<()>;

    async fn log_warning(&self, message: &str) -> RpcResult<()>;

    async fn log_error(&self, message: &str) -> RpcResult<()>;

    async fn log_fatal(&self, message: &str) -> RpcResult<()>;
}
