//! In-memory backend for tests
//!
//! `FakeBackend` answers every RPC from canned data, records the calls it
//! receives, and can be told to fail or stall individual operations.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use wordsmith_core::{
    ActionGroup, ActionItem, ActionRequest, CurrentProvider, LanguageItem, Settings,
};

use crate::rpc::{Backend, LogSeverity, Operation, RpcError, RpcResult};

/// Which transport failure a failing operation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFailure {
    Transport,
    Timeout,
    Remote,
    Decode,
    Disconnected,
}

impl FakeFailure {
    fn to_error(self, op: Operation) -> RpcError {
        match self {
            FakeFailure::Transport => RpcError::Transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                format!("{} connection reset", op.method()),
            )),
            FakeFailure::Timeout => RpcError::Timeout(Duration::from_secs(30)),
            FakeFailure::Remote => RpcError::remote(500, format!("{} failed", op.method())),
            FakeFailure::Decode => match serde_json::from_str::<Settings>("{") {
                Err(e) => RpcError::Decode(e),
                Ok(_) => RpcError::Disconnected,
            },
            FakeFailure::Disconnected => RpcError::Disconnected,
        }
    }
}

/// Canned responses and recorded traffic.
#[derive(Debug)]
pub struct FakeState {
    pub settings: Settings,
    pub default_settings: Settings,
    pub settings_path: String,
    pub models: Vec<String>,
    pub actions: HashMap<ActionGroup, Vec<ActionItem>>,
    pub input_languages: Vec<LanguageItem>,
    pub output_languages: Vec<LanguageItem>,
    pub default_input_language: LanguageItem,
    pub default_output_language: LanguageItem,
    pub provider: CurrentProvider,
    pub process_output: String,
    pub clipboard: String,
    pub connection_ok: bool,
    pub failing: HashMap<Operation, FakeFailure>,
    pub panicking: HashSet<Operation>,
    pub delays: HashMap<Operation, Duration>,

    pub calls: Vec<Operation>,
    pub saved: Vec<Settings>,
    pub processed: Vec<ActionRequest>,
    pub logs: Vec<(LogSeverity, String)>,
}

impl Default for FakeState {
    fn default() -> Self {
        let mut actions = HashMap::new();
        actions.insert(
            ActionGroup::Proofreading,
            vec![ActionItem::new("proofread", "Proofread")],
        );
        actions.insert(
            ActionGroup::Formatting,
            vec![ActionItem::new("format-email", "Format as email")],
        );
        actions.insert(
            ActionGroup::Translating,
            vec![ActionItem::new("translate", "Translate")],
        );
        actions.insert(
            ActionGroup::Summarization,
            vec![ActionItem::new("summarize", "Summarize")],
        );
        actions.insert(
            ActionGroup::Transforming,
            vec![ActionItem::new("bullet-points", "To bullet points")],
        );

        let languages = vec![
            LanguageItem::new("en", "English"),
            LanguageItem::new("de", "German"),
            LanguageItem::new("fr", "French"),
        ];

        Self {
            settings: sample_settings(),
            default_settings: Settings {
                base_url: "http://localhost:11434".to_string(),
                model_name: "llama3".to_string(),
                ..sample_settings()
            },
            settings_path: "/home/user/.config/wordsmith/settings.json".to_string(),
            models: vec!["gpt-4o-mini".to_string(), "gpt-4o".to_string()],
            actions,
            input_languages: languages.clone(),
            output_languages: languages,
            default_input_language: LanguageItem::new("en", "English"),
            default_output_language: LanguageItem::new("de", "German"),
            provider: CurrentProvider {
                base_url: "https://api.openai.com/v1".to_string(),
                model_name: "gpt-4o-mini".to_string(),
            },
            process_output: "processed text".to_string(),
            clipboard: String::new(),
            connection_ok: true,
            failing: HashMap::new(),
            panicking: HashSet::new(),
            delays: HashMap::new(),
            calls: Vec::new(),
            saved: Vec::new(),
            processed: Vec::new(),
            logs: Vec::new(),
        }
    }
}

/// Settings the fake returns from `load_settings` unless overridden.
pub fn sample_settings() -> Settings {
    let mut headers = BTreeMap::new();
    headers.insert("Authorization".to_string(), "Bearer test".to_string());
    Settings {
        base_url: "https://api.openai.com/v1".to_string(),
        headers,
        model_name: "gpt-4o-mini".to_string(),
        temperature: 0.7,
        default_input_language: "en".to_string(),
        default_output_language: "de".to_string(),
        available_languages: vec!["en".to_string(), "de".to_string(), "fr".to_string()],
        use_markdown_for_output: false,
    }
}

/// Backend double backed by [`FakeState`].
#[derive(Debug, Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        self.state().settings = settings;
        self
    }

    pub fn with_models(self, models: &[&str]) -> Self {
        self.state().models = models.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_process_output(self, output: &str) -> Self {
        self.state().process_output = output.to_string();
        self
    }

    pub fn with_clipboard(self, text: &str) -> Self {
        self.state().clipboard = text.to_string();
        self
    }

    pub fn with_connection_ok(self, ok: bool) -> Self {
        self.state().connection_ok = ok;
        self
    }

    /// Make `op` fail with a remote error.
    pub fn failing(self, op: Operation) -> Self {
        self.failing_with(op, FakeFailure::Remote)
    }

    pub fn failing_with(self, op: Operation, failure: FakeFailure) -> Self {
        self.state().failing.insert(op, failure);
        self
    }

    /// Make `op` panic, like a broken host implementation would.
    pub fn panicking(self, op: Operation) -> Self {
        self.state().panicking.insert(op);
        self
    }

    /// Hold `op` for `delay` before answering.
    pub fn delayed(self, op: Operation, delay: Duration) -> Self {
        self.state().delays.insert(op, delay);
        self
    }

    /// Lock the state for inspection or mid-test changes.
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.state().calls.clone()
    }

    pub fn call_count(&self, op: Operation) -> usize {
        self.state().calls.iter().filter(|c| **c == op).count()
    }

    pub fn distinct_calls(&self) -> HashSet<Operation> {
        self.state().calls.iter().copied().collect()
    }

    pub fn saved_settings(&self) -> Vec<Settings> {
        self.state().saved.clone()
    }

    pub fn processed_requests(&self) -> Vec<ActionRequest> {
        self.state().processed.clone()
    }

    pub fn logs(&self) -> Vec<(LogSeverity, String)> {
        self.state().logs.clone()
    }

    pub fn clipboard(&self) -> String {
        self.state().clipboard.clone()
    }

    /// Record the call, apply any delay, then report the configured failure.
    async fn enter(&self, op: Operation) -> RpcResult<()> {
        let (delay, failure, panics) = {
            let mut state = self.state();
            state.calls.push(op);
            (
                state.delays.get(&op).copied(),
                state.failing.get(&op).copied(),
                state.panicking.contains(&op),
            )
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if panics {
            panic!("{} panicked", op.method());
        }
        match failure {
            Some(failure) => Err(failure.to_error(op)),
            None => Ok(()),
        }
    }

    async fn record_log(&self, severity: LogSeverity, message: &str) -> RpcResult<()> {
        self.enter(Operation::Log).await?;
        self.state().logs.push((severity, message.to_string()));
        Ok(())
    }

    async fn actions(&self, op: Operation, group: ActionGroup) -> RpcResult<Vec<ActionItem>> {
        self.enter(op).await?;
        Ok(self.state().actions.get(&group).cloned().unwrap_or_default())
    }
}

impl Backend for FakeBackend {
    async fn load_settings(&self) -> RpcResult<Settings> {
        self.enter(Operation::LoadSettings).await?;
        Ok(self.state().settings.clone())
    }

    async fn save_settings(&self, settings: &Settings) -> RpcResult<Settings> {
        self.enter(Operation::SaveSettings).await?;
        let mut state = self.state();
        state.saved.push(settings.clone());
        state.settings = settings.clone();
        Ok(settings.clone())
    }

    async fn reset_to_default_settings(&self) -> RpcResult<Settings> {
        self.enter(Operation::ResetSettings).await?;
        let mut state = self.state();
        state.settings = state.default_settings.clone();
        Ok(state.settings.clone())
    }

    async fn settings_file_path(&self) -> RpcResult<String> {
        self.enter(Operation::SettingsFilePath).await?;
        Ok(self.state().settings_path.clone())
    }

    async fn validate_connection(
        &self,
        _base_url: &str,
        _headers: &BTreeMap<String, String>,
    ) -> RpcResult<bool> {
        self.enter(Operation::ValidateConnection).await?;
        Ok(self.state().connection_ok)
    }

    async fn validate_models_request(
        &self,
        _base_url: &str,
        _headers: &BTreeMap<String, String>,
    ) -> RpcResult<bool> {
        self.enter(Operation::ValidateModelsRequest).await?;
        Ok(self.state().connection_ok)
    }

    async fn validate_completion_request(&self, _settings: &Settings) -> RpcResult<bool> {
        self.enter(Operation::ValidateCompletionRequest).await?;
        Ok(self.state().connection_ok)
    }

    async fn get_models_list(&self) -> RpcResult<Vec<String>> {
        self.enter(Operation::ListModels).await?;
        Ok(self.state().models.clone())
    }

    async fn get_proofreading_items(&self) -> RpcResult<Vec<ActionItem>> {
        self.actions(Operation::ProofreadingItems, ActionGroup::Proofreading)
            .await
    }

    async fn get_formatting_items(&self) -> RpcResult<Vec<ActionItem>> {
        self.actions(Operation::FormattingItems, ActionGroup::Formatting)
            .await
    }

    async fn get_translating_items(&self) -> RpcResult<Vec<ActionItem>> {
        self.actions(Operation::TranslatingItems, ActionGroup::Translating)
            .await
    }

    async fn get_summarization_items(&self) -> RpcResult<Vec<ActionItem>> {
        self.actions(Operation::SummarizationItems, ActionGroup::Summarization)
            .await
    }

    async fn get_transforming_items(&self) -> RpcResult<Vec<ActionItem>> {
        self.actions(Operation::TransformingItems, ActionGroup::Transforming)
            .await
    }

    async fn process_action(&self, request: &ActionRequest) -> RpcResult<String> {
        self.enter(Operation::ProcessAction).await?;
        let mut state = self.state();
        state.processed.push(request.clone());
        Ok(state.process_output.clone())
    }

    async fn get_input_languages(&self) -> RpcResult<Vec<LanguageItem>> {
        self.enter(Operation::InputLanguages).await?;
        Ok(self.state().input_languages.clone())
    }

    async fn get_output_languages(&self) -> RpcResult<Vec<LanguageItem>> {
        self.enter(Operation::OutputLanguages).await?;
        Ok(self.state().output_languages.clone())
    }

    async fn get_default_input_language(&self) -> RpcResult<LanguageItem> {
        self.enter(Operation::DefaultInputLanguage).await?;
        Ok(self.state().default_input_language.clone())
    }

    async fn get_default_output_language(&self) -> RpcResult<LanguageItem> {
        self.enter(Operation::DefaultOutputLanguage).await?;
        Ok(self.state().default_output_language.clone())
    }

    async fn get_current_provider(&self) -> RpcResult<CurrentProvider> {
        self.enter(Operation::CurrentProvider).await?;
        Ok(self.state().provider.clone())
    }

    async fn clipboard_get_text(&self) -> RpcResult<String> {
        self.enter(Operation::ClipboardGet).await?;
        Ok(self.state().clipboard.clone())
    }

    async fn clipboard_set_text(&self, text: &str) -> RpcResult<bool> {
        self.enter(Operation::ClipboardSet).await?;
        self.state().clipboard = text.to_string();
        Ok(true)
    }

    async fn log_trace(&self, message: &str) -> RpcResult<()> {
        self.record_log(LogSeverity::Trace, message).await
    }

    async fn log_debug(&self, message: &str) -> RpcResult<()> {
        self.record_log(LogSeverity::Debug, message).await
    }

    async fn log_info(&self, message: &str) -> RpcResult<()> {
        self.record_log(LogSeverity::Info, message).await
    }

    async fn log_warning(&self, message: &str) -> RpcResult<()> {
        self.record_log(LogSeverity::Warning, message).await
    }

    async fn log_error(&self, message: &str) -> RpcResult<()> {
        self.record_log(LogSeverity::Error, message).await
    }

    async fn log_fatal(&self, message: &str) -> RpcResult<()> {
        self.record_log(LogSeverity::Fatal, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let backend = FakeBackend::new();

        assert_ok!(backend.load_settings().await);
        assert_ok!(backend.get_models_list().await);

        assert_eq!(
            backend.calls(),
            vec![Operation::LoadSettings, Operation::ListModels]
        );
    }

    #[tokio::test]
    async fn test_failing_operation_reports_configured_kind() {
        let backend =
            FakeBackend::new().failing_with(Operation::ListModels, FakeFailure::Timeout);

        let err = assert_err!(backend.get_models_list().await);
        assert!(matches!(err, RpcError::Timeout(_)));
        assert_eq!(backend.call_count(Operation::ListModels), 1);
    }

    #[tokio::test]
    async fn test_save_then_load_returns_saved_settings() {
        let backend = FakeBackend::new();
        let mut settings = sample_settings();
        settings.model_name = "gpt-4o".to_string();

        assert_ok!(backend.save_settings(&settings).await);
        let loaded = assert_ok!(backend.load_settings().await);

        assert_eq!(loaded.model_name, "gpt-4o");
        assert_eq!(backend.saved_settings().len(), 1);
    }

    #[tokio::test]
    async fn test_decode_failure_builds_decode_error() {
        let backend = FakeBackend::new().failing_with(Operation::LoadSettings, FakeFailure::Decode);
        let err = assert_err!(backend.load_settings().await);
        assert!(matches!(err, RpcError::Decode(_)));
    }

    #[tokio::test]
    async fn test_log_sink_records_severity() {
        let backend = FakeBackend::new();
        assert_ok!(backend.log_warning("careful").await);
        assert_eq!(
            backend.logs(),
            vec![(LogSeverity::Warning, "careful".to_string())]
        );
    }
}
