//! Backend adapter: uniform logging and error normalization around RPC calls
//!
//! Data operations propagate a normalized [`Error::Backend`] whose message is
//! the fixed text for the operation. Boolean checks and clipboard writes
//! swallow failures and report `false`. Either way the original transport
//! error is logged locally and forwarded to the backend log sink.

use std::collections::BTreeMap;
use std::future::Future;

use wordsmith_backend::{Backend, LogSeverity, Operation, RpcError, RpcResult};
use wordsmith_core::prelude::*;
use wordsmith_core::{ActionGroup, ActionItem, ActionRequest, CurrentProvider, LanguageItem, Settings};

/// Wraps a [`Backend`] with the frontend's calling conventions.
#[derive(Debug)]
pub struct BackendAdapter<B> {
    backend: B,
}

impl<B> BackendAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend + Sync> BackendAdapter<B> {
    // ─────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────

    pub async fn load_settings(&self) -> Result<Settings> {
        self.call(Operation::LoadSettings, self.backend.load_settings())
            .await
    }

    pub async fn save_settings(&self, settings: &Settings) -> Result<Settings> {
        self.call(Operation::SaveSettings, self.backend.save_settings(settings))
            .await
    }

    pub async fn reset_to_default_settings(&self) -> Result<Settings> {
        self.call(
            Operation::ResetSettings,
            self.backend.reset_to_default_settings(),
        )
        .await
    }

    pub async fn settings_file_path(&self) -> Result<String> {
        self.call(Operation::SettingsFilePath, self.backend.settings_file_path())
            .await
    }

    pub async fn get_models_list(&self) -> Result<Vec<String>> {
        self.call(Operation::ListModels, self.backend.get_models_list())
            .await
    }

    // ─────────────────────────────────────────────────────────
    // Provider checks (failures read as `false`)
    // ─────────────────────────────────────────────────────────

    pub async fn validate_connection(
        &self,
        base_url: &str,
        headers: &BTreeMap<String, String>,
    ) -> bool {
        self.check(
            Operation::ValidateConnection,
            self.backend.validate_connection(base_url, headers),
        )
        .await
    }

    pub async fn validate_models_request(
        &self,
        base_url: &str,
        headers: &BTreeMap<String, String>,
    ) -> bool {
        self.check(
            Operation::ValidateModelsRequest,
            self.backend.validate_models_request(base_url, headers),
        )
        .await
    }

    pub async fn validate_completion_request(&self, settings: &Settings) -> bool {
        self.check(
            Operation::ValidateCompletionRequest,
            self.backend.validate_completion_request(settings),
        )
        .await
    }

    // ─────────────────────────────────────────────────────────
    // Actions, languages, provider
    // ─────────────────────────────────────────────────────────

    pub async fn get_action_items(&self, group: ActionGroup) -> Result<Vec<ActionItem>> {
        match group {
            ActionGroup::Proofreading => {
                self.call(
                    Operation::ProofreadingItems,
                    self.backend.get_proofreading_items(),
                )
                .await
            }
            ActionGroup::Formatting => {
                self.call(
                    Operation::FormattingItems,
                    self.backend.get_formatting_items(),
                )
                .await
            }
            ActionGroup::Translating => {
                self.call(
                    Operation::TranslatingItems,
                    self.backend.get_translating_items(),
                )
                .await
            }
            ActionGroup::Summarization => {
                self.call(
                    Operation::SummarizationItems,
                    self.backend.get_summarization_items(),
                )
                .await
            }
            ActionGroup::Transforming => {
                self.call(
                    Operation::TransformingItems,
                    self.backend.get_transforming_items(),
                )
                .await
            }
        }
    }

    pub async fn get_input_languages(&self) -> Result<Vec<LanguageItem>> {
        self.call(Operation::InputLanguages, self.backend.get_input_languages())
            .await
    }

    pub async fn get_output_languages(&self) -> Result<Vec<LanguageItem>> {
        self.call(
            Operation::OutputLanguages,
            self.backend.get_output_languages(),
        )
        .await
    }

    pub async fn get_default_input_language(&self) -> Result<LanguageItem> {
        self.call(
            Operation::DefaultInputLanguage,
            self.backend.get_default_input_language(),
        )
        .await
    }

    pub async fn get_default_output_language(&self) -> Result<LanguageItem> {
        self.call(
            Operation::DefaultOutputLanguage,
            self.backend.get_default_output_language(),
        )
        .await
    }

    pub async fn get_current_provider(&self) -> Result<CurrentProvider> {
        self.call(
            Operation::CurrentProvider,
            self.backend.get_current_provider(),
        )
        .await
    }

    pub async fn process_action(&self, request: &ActionRequest) -> Result<String> {
        self.call(Operation::ProcessAction, self.backend.process_action(request))
            .await
    }

    // ─────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────

    pub async fn clipboard_get_text(&self) -> Result<String> {
        self.call(Operation::ClipboardGet, self.backend.clipboard_get_text())
            .await
    }

    /// Returns `false` when the write failed; the failure is only logged.
    pub async fn clipboard_set_text(&self, text: &str) -> bool {
        self.check(Operation::ClipboardSet, self.backend.clipboard_set_text(text))
            .await
    }

    // ─────────────────────────────────────────────────────────
    // Log sink
    // ─────────────────────────────────────────────────────────

    /// Write a line to the backend log. Failures are logged locally only.
    pub async fn log(&self, severity: LogSeverity, message: &str) {
        let result = match severity {
            LogSeverity::Trace => self.backend.log_trace(message).await,
            LogSeverity::Debug => self.backend.log_debug(message).await,
            LogSeverity::Info => self.backend.log_info(message).await,
            LogSeverity::Warning => self.backend.log_warning(message).await,
            LogSeverity::Error => self.backend.log_error(message).await,
            LogSeverity::Fatal => self.backend.log_fatal(message).await,
        };
        if let Err(e) = result {
            warn!("Backend log sink rejected {:?} line: {}", severity, e);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Call wrappers
    // ─────────────────────────────────────────────────────────

    /// Run a data operation, normalizing any failure.
    async fn call<T>(
        &self,
        op: Operation,
        request: impl Future<Output = RpcResult<T>>,
    ) -> Result<T> {
        debug!("Calling backend {}", op);
        match request.await {
            Ok(value) => {
                debug!("Backend {} succeeded", op);
                Ok(value)
            }
            Err(e) => {
                let kind = e.kind();
                self.report_failure(op, &e).await;
                Err(Error::backend(op.failure_message(), kind))
            }
        }
    }

    /// Run a boolean operation; any failure reads as `false`.
    async fn check(&self, op: Operation, request: impl Future<Output = RpcResult<bool>>) -> bool {
        debug!("Calling backend {}", op);
        match request.await {
            Ok(passed) => {
                debug!("Backend {} returned {}", op, passed);
                passed
            }
            Err(e) => {
                self.report_failure(op, &e).await;
                false
            }
        }
    }

    async fn report_failure(&self, op: Operation, err: &RpcError) {
        let line = format!("{} ({}): {}", op.failure_message(), err.kind(), err);
        error!("{}", line);
        self.log(LogSeverity::Error, &line).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};
    use wordsmith_backend::test_utils::{FakeBackend, FakeFailure};

    #[tokio::test]
    async fn test_data_call_returns_backend_value() {
        let adapter = BackendAdapter::new(FakeBackend::new().with_models(&["a", "b"]));

        let models = assert_ok!(adapter.get_models_list().await);

        assert_eq!(models, vec!["a", "b"]);
        assert!(adapter.backend().logs().is_empty());
    }

    #[tokio::test]
    async fn test_data_call_failure_is_normalized() {
        let backend = FakeBackend::new().failing_with(Operation::LoadSettings, FakeFailure::Transport);
        let adapter = BackendAdapter::new(backend);

        let err = assert_err!(adapter.load_settings().await);

        assert_eq!(err.to_string(), "Failed to load settings");
        assert_eq!(err.kind(), Some(ErrorKind::Network));
        // the transport detail stays out of the returned error
        assert!(!err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_failure_is_forwarded_to_backend_log() {
        let backend = FakeBackend::new().failing(Operation::ProcessAction);
        let adapter = BackendAdapter::new(backend);

        let _ = adapter.process_action(&ActionRequest::default()).await;

        let logs = adapter.backend().logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, LogSeverity::Error);
        assert!(logs[0].1.starts_with("Failed to process action (BackendError)"));
    }

    #[tokio::test]
    async fn test_check_swallows_failure_as_false() {
        let backend =
            FakeBackend::new().failing_with(Operation::ValidateConnection, FakeFailure::Timeout);
        let adapter = BackendAdapter::new(backend);

        let passed = adapter
            .validate_connection("http://x", &BTreeMap::new())
            .await;

        assert!(!passed);
        assert_eq!(adapter.backend().logs().len(), 1);
    }

    #[tokio::test]
    async fn test_check_passes_through_backend_answer() {
        let adapter = BackendAdapter::new(FakeBackend::new().with_connection_ok(false));
        assert!(
            !adapter
                .validate_models_request("http://x", &BTreeMap::new())
                .await
        );

        let adapter = BackendAdapter::new(FakeBackend::new());
        assert!(
            adapter
                .validate_completion_request(&Settings::default())
                .await
        );
    }

    #[tokio::test]
    async fn test_clipboard_write_failure_reports_false() {
        let adapter = BackendAdapter::new(FakeBackend::new().failing(Operation::ClipboardSet));
        assert!(!adapter.clipboard_set_text("hello").await);

        let adapter = BackendAdapter::new(FakeBackend::new());
        assert!(adapter.clipboard_set_text("hello").await);
        assert_eq!(adapter.backend().clipboard(), "hello");
    }

    #[tokio::test]
    async fn test_action_items_route_to_group_operation() {
        let adapter = BackendAdapter::new(FakeBackend::new());

        for group in ActionGroup::ALL {
            assert_ok!(adapter.get_action_items(group).await);
        }

        let calls = adapter.backend().calls();
        assert_eq!(
            calls,
            vec![
                Operation::ProofreadingItems,
                Operation::FormattingItems,
                Operation::TranslatingItems,
                Operation::SummarizationItems,
                Operation::TransformingItems,
            ]
        );
    }

    #[tokio::test]
    async fn test_log_sink_failure_does_not_propagate() {
        let adapter = BackendAdapter::new(FakeBackend::new().failing(Operation::Log));
        adapter.log(LogSeverity::Info, "hello").await;
        assert!(adapter.backend().logs().is_empty());
    }
}
