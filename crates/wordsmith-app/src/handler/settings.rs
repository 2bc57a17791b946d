//! Settings slice handlers

use tracing::{debug, warn};
use wordsmith_core::{ErrorReport, Settings};

use crate::message::Message;
use crate::state::{AppState, CheckStatus, ConnectionCheck};

use super::{Task, UpdateResult};

pub fn handle_load(state: &mut AppState) -> UpdateResult {
    state.settings.is_loading = true;
    UpdateResult::spawn(Task::LoadSettings)
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    state.settings.is_loading = true;
    UpdateResult::spawn(Task::ResetSettings)
}

/// Settings arrived from a load or a reset.
pub fn handle_loaded(state: &mut AppState, settings: Settings) -> UpdateResult {
    state.settings.apply_loaded(settings);
    if state.settings.settings_file_path.is_none() {
        UpdateResult::message(Message::FetchSettingsFilePath)
    } else {
        UpdateResult::none()
    }
}

/// Load, reset or save failed. Values on screen are left as they were.
pub fn handle_failed(state: &mut AppState, error: &ErrorReport) -> UpdateResult {
    warn!("Settings request failed: {}", error);
    state.settings.fail(error.message.clone());
    UpdateResult::none()
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if !state.settings.can_save() {
        debug!(
            "Save ignored (changed: {}, loading: {}, base url valid: {})",
            state.settings.is_changed,
            state.settings.is_loading,
            state.settings.is_base_url_valid()
        );
        return UpdateResult::none();
    }

    state.settings.is_loading = true;
    UpdateResult::spawn(Task::SaveSettings(state.settings.settings.clone()))
}

/// The backend's echo is not applied; the form keeps the values it sent.
pub fn handle_saved(state: &mut AppState, saved: Settings) -> UpdateResult {
    debug!("Settings saved for {}", saved.base_url);
    state.settings.mark_saved();
    UpdateResult::message(Message::RefreshProvider)
}

pub fn handle_add_header(state: &mut AppState) -> UpdateResult {
    if !state.settings.add_header() {
        debug!("Blank header row already present");
    }
    UpdateResult::none()
}

pub fn handle_row_edit(found: bool, id: &str) -> UpdateResult {
    if !found {
        warn!("No header row with id {}", id);
    }
    UpdateResult::none()
}

pub fn handle_models_listed(state: &mut AppState, models: Vec<String>) -> UpdateResult {
    let count = models.len();
    if state.settings.apply_models(models) {
        debug!(
            "Model not offered by provider, selected {}",
            state.settings.settings.model_name
        );
    }
    debug!("Provider offers {} models", count);
    UpdateResult::none()
}

pub fn handle_models_failed(state: &mut AppState, error: &ErrorReport) -> UpdateResult {
    warn!("Model list unavailable: {}", error);
    state.settings.clear_models();
    UpdateResult::none()
}

pub fn handle_run_check(state: &mut AppState, check: ConnectionCheck) -> UpdateResult {
    state.settings.checks.set(check, CheckStatus::Checking);
    UpdateResult::spawn(Task::RunCheck {
        check,
        settings: state.settings.settings.clone(),
    })
}

/// Results for values that were edited while the check ran are dropped.
pub fn handle_check_completed(
    state: &mut AppState,
    check: ConnectionCheck,
    passed: bool,
) -> UpdateResult {
    if state.settings.checks.get(check) != CheckStatus::Checking {
        debug!("Discarding stale {} check result", check.label());
        return UpdateResult::none();
    }
    let status = if passed {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed
    };
    state.settings.checks.set(check, status);
    UpdateResult::none()
}
