//! View scopes: results of a closed view never reach state

use std::time::Duration;

use wordsmith::app::{Engine, Message, Preferences, RootView};
use wordsmith::backend::test_utils::FakeBackend;
use wordsmith::backend::Operation;

use crate::{engine_with, scenario_settings};

#[tokio::test]
async fn test_leaving_settings_discards_pending_load() {
    let backend = FakeBackend::new()
        .with_settings(scenario_settings())
        .delayed(Operation::LoadSettings, Duration::from_secs(60))
        .delayed(Operation::ListModels, Duration::from_secs(60));
    let mut engine = engine_with(backend);

    let settings_view = engine.open_scope();
    let handles = engine.dispatch_in(settings_view, Message::ShowSettings);
    assert_eq!(handles.len(), 2);

    engine.dispatch(Message::HideSettings);
    assert_eq!(engine.close_scope(settings_view), 2);
    assert_eq!(engine.settle().await, 0);

    assert_eq!(engine.root_view(), RootView::Main);
    assert!(engine.state.settings.header_rows.is_empty());
    assert!(engine.state.settings.models.is_empty());
}

#[tokio::test]
async fn test_main_view_survives_settings_scope_closing() {
    let backend = FakeBackend::new().delayed(Operation::ListModels, Duration::from_secs(60));
    let mut engine = engine_with(backend);

    engine.start();
    let settings_view = engine.open_scope();
    engine.dispatch_in(settings_view, Message::ListModels);
    engine.close_scope(settings_view);
    engine.settle().await;

    assert!(engine.state.session.initialized);
    assert!(engine.state.settings.models.is_empty());
}

#[tokio::test]
async fn test_engines_are_independent() {
    let mut first = Engine::new(FakeBackend::new(), Preferences::default());
    let mut second = Engine::new(
        FakeBackend::new().failing(Operation::InputLanguages),
        Preferences::default(),
    );

    first.dispatch(Message::Initialize);
    second.dispatch(Message::Initialize);
    first.settle().await;
    second.settle().await;

    assert!(first.state.session.initialized);
    assert!(!second.state.session.initialized);
}
