//! Settings view scenarios: load, edit headers, pick models, save

use wordsmith::app::{CheckStatus, ConnectionCheck, Message, RootView, SettingsViewModel};
use wordsmith::backend::test_utils::FakeBackend;
use wordsmith::backend::{LogSeverity, Operation};

use crate::{engine_with, scenario_settings};

#[tokio::test]
async fn test_loaded_headers_can_be_removed() {
    let mut engine = engine_with(FakeBackend::new().with_settings(scenario_settings()));
    let scope = engine.open_scope();

    engine.dispatch_in(scope, Message::LoadSettings);
    engine.settle().await;

    let rows = &engine.state.settings.header_rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, "A");
    assert_eq!(rows[0].value, "1");
    assert!(!engine.state.settings.is_changed);

    let id = rows[0].id.clone();
    engine.dispatch_in(scope, Message::RemoveHeader { id });

    assert!(engine.state.settings.settings.headers.is_empty());
    assert!(engine.state.settings.is_changed);
}

#[tokio::test]
async fn test_open_settings_auto_selects_offered_model() {
    let mut settings = scenario_settings();
    settings.model_name = "gpt-3".to_string();
    let backend = FakeBackend::new()
        .with_settings(settings)
        .with_models(&["a", "b"]);
    let mut engine = engine_with(backend);
    let scope = engine.open_scope();

    engine.dispatch_in(scope, Message::LoadSettings);
    engine.settle().await;
    engine.dispatch_in(scope, Message::ListModels);
    engine.settle().await;

    let vm = SettingsViewModel::from_state(&engine.state.settings);
    assert_eq!(engine.state.settings.settings.model_name, "a");
    assert_eq!(vm.model.item_id, "a");
    assert!(vm.save_enabled);
}

#[tokio::test]
async fn test_edit_save_and_provider_refresh() {
    let mut engine = engine_with(FakeBackend::new().with_settings(scenario_settings()));
    engine.dispatch(Message::ShowSettings);
    engine.settle().await;
    assert_eq!(engine.root_view(), RootView::Settings);

    engine.dispatch(Message::AddHeader);
    let id = engine
        .state
        .settings
        .header_rows
        .iter()
        .find(|row| row.key.is_empty())
        .map(|row| row.id.clone())
        .expect("blank row");
    engine.dispatch(Message::UpdateHeaderKey {
        id: id.clone(),
        key: "Authorization".to_string(),
    });
    engine.dispatch(Message::UpdateHeaderValue {
        id,
        value: "Bearer abc".to_string(),
    });
    engine.dispatch(Message::SetTemperature(0.2));
    engine.dispatch(Message::SaveSettings);
    engine.settle().await;

    let saved = engine.backend().saved_settings();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].headers.len(), 2);
    assert_eq!(
        saved[0].headers.get("Authorization").map(String::as_str),
        Some("Bearer abc")
    );
    assert_eq!(saved[0].temperature, 0.2);
    assert!(!engine.state.settings.is_changed);
    assert_eq!(engine.backend().call_count(Operation::CurrentProvider), 1);
    assert!(engine.state.session.provider.is_some());

    engine.dispatch(Message::HideSettings);
    assert_eq!(engine.root_view(), RootView::Main);
}

#[tokio::test]
async fn test_save_failure_keeps_form_and_reports() {
    let backend = FakeBackend::new()
        .with_settings(scenario_settings())
        .failing(Operation::SaveSettings);
    let mut engine = engine_with(backend);
    engine.dispatch(Message::LoadSettings);
    engine.settle().await;

    engine.dispatch(Message::SetModelName("edited".to_string()));
    engine.dispatch(Message::SaveSettings);
    engine.settle().await;

    assert_eq!(
        engine.state.settings.error_msg.as_deref(),
        Some("Failed to save settings")
    );
    assert_eq!(engine.state.settings.settings.model_name, "edited");
    assert!(engine.state.settings.is_changed);

    let logs = engine.backend().logs();
    assert!(logs
        .iter()
        .any(|(severity, line)| *severity == LogSeverity::Error
            && line.starts_with("Failed to save settings")));
}

#[tokio::test]
async fn test_reset_restores_backend_defaults() {
    let mut engine = engine_with(FakeBackend::new().with_settings(scenario_settings()));
    engine.dispatch(Message::LoadSettings);
    engine.settle().await;
    engine.dispatch(Message::SetBaseUrl("http://edited".to_string()));

    engine.dispatch(Message::ResetSettings);
    engine.settle().await;

    assert_eq!(
        engine.state.settings.settings.base_url,
        "http://localhost:11434"
    );
    assert!(!engine.state.settings.is_changed);
}

#[tokio::test]
async fn test_connection_checks_report_status() {
    let backend = FakeBackend::new()
        .with_settings(scenario_settings())
        .with_connection_ok(false)
        .failing(Operation::ValidateCompletionRequest);
    let mut engine = engine_with(backend);
    engine.dispatch(Message::LoadSettings);
    engine.settle().await;

    engine.dispatch(Message::RunCheck(ConnectionCheck::Connection));
    engine.dispatch(Message::RunCheck(ConnectionCheck::CompletionRequest));
    engine.settle().await;

    let checks = &engine.state.settings.checks;
    assert_eq!(checks.get(ConnectionCheck::Connection), CheckStatus::Failed);
    assert_eq!(
        checks.get(ConnectionCheck::CompletionRequest),
        CheckStatus::Failed
    );
    assert_eq!(checks.get(ConnectionCheck::ModelsRequest), CheckStatus::Unknown);
    // a failed check is not an error for the form
    assert!(engine.state.settings.error_msg.is_none());
}
