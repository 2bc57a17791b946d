//! Main view scenarios: initialization, actions, clipboard

use wordsmith::app::{MainViewModel, Message};
use wordsmith::backend::test_utils::{FakeBackend, FakeFailure};
use wordsmith::backend::Operation;
use wordsmith::core::ErrorKind;

use crate::engine_with;

#[tokio::test]
async fn test_initialize_populates_main_view() {
    let mut engine = engine_with(FakeBackend::new());

    engine.dispatch(Message::Initialize);
    engine.settle().await;

    let session = &engine.state.session;
    assert!(session.initialized);
    assert!(!session.is_processing);
    assert_eq!(session.selected_input_language.as_deref(), Some("en"));
    assert_eq!(session.selected_output_language.as_deref(), Some("de"));

    let vm = MainViewModel::from_state(session);
    assert_eq!(vm.action_rows.len(), 5);
    assert!(vm.action_rows.iter().flat_map(|r| &r.buttons).all(|b| !b.disabled));
}

#[tokio::test]
async fn test_initialize_is_all_or_nothing() {
    let backend = FakeBackend::new().failing_with(Operation::TranslatingItems, FakeFailure::Timeout);
    let mut engine = engine_with(backend);

    engine.dispatch(Message::Initialize);
    engine.settle().await;

    let session = &engine.state.session;
    assert!(!session.is_processing);
    assert!(!session.initialized);
    assert!(session.actions.proofreading.is_empty());
    assert!(session.input_languages.is_empty());
    assert!(session.provider.is_none());
    assert_eq!(
        session.error_message.as_deref(),
        Some("Failed to get translating actions")
    );
    assert_eq!(session.error_kind, Some(ErrorKind::Timeout));

    let banner = MainViewModel::from_state(session).error.expect("banner");
    assert!(banner.hint.is_some());
}

#[tokio::test]
async fn test_process_action_round_trip() {
    let mut engine = engine_with(FakeBackend::new().with_process_output("Hello, world."));
    engine.dispatch(Message::Initialize);
    engine.settle().await;

    engine.dispatch(Message::SetInputText("helo wrld".to_string()));
    engine.dispatch(Message::SelectOutputLanguage("fr".to_string()));
    engine.dispatch(Message::ProcessAction {
        action_id: "proofread".to_string(),
    });
    assert_eq!(
        engine.state.session.current_task.as_deref(),
        Some("proofread")
    );
    engine.settle().await;

    assert!(engine.state.session.current_task.is_none());
    assert!(!engine.state.session.is_processing);
    assert_eq!(engine.state.session.output_text, "Hello, world.");

    let requests = engine.backend().processed_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action_input, "helo wrld");
    assert_eq!(requests[0].action_input_language, "en");
    assert_eq!(requests[0].action_output_language, "fr");
}

#[tokio::test]
async fn test_failed_action_clears_current_task() {
    let backend = FakeBackend::new().failing_with(Operation::ProcessAction, FakeFailure::Disconnected);
    let mut engine = engine_with(backend);
    engine.dispatch(Message::Initialize);
    engine.settle().await;

    engine.dispatch(Message::ProcessAction {
        action_id: "summarize".to_string(),
    });
    engine.settle().await;

    let session = &engine.state.session;
    assert!(session.current_task.is_none());
    assert_eq!(
        session.error_message.as_deref(),
        Some("Failed to process action")
    );
    assert_eq!(session.error_kind, Some(ErrorKind::Unavailable));
}

#[tokio::test]
async fn test_clipboard_copy_and_paste() {
    let mut engine = engine_with(FakeBackend::new().with_clipboard("from clipboard"));

    engine.dispatch(Message::PasteInput);
    engine.settle().await;
    assert_eq!(engine.state.session.input_text, "from clipboard");

    engine.dispatch(Message::SetOutputText("result".to_string()));
    engine.dispatch(Message::CopyOutput);
    engine.settle().await;
    assert_eq!(engine.backend().clipboard(), "result");
    assert!(engine.state.session.error_message.is_none());
}

#[tokio::test]
async fn test_clipboard_copy_failure_only_sets_error() {
    let mut engine = engine_with(FakeBackend::new().failing(Operation::ClipboardSet));
    engine.dispatch(Message::SetOutputText("result".to_string()));

    engine.dispatch(Message::CopyOutput);
    engine.settle().await;

    assert_eq!(
        engine.state.session.error_message.as_deref(),
        Some("Failed to copy to clipboard")
    );
    assert_eq!(engine.state.session.output_text, "result");
    assert!(!engine.state.session.is_processing);
}
