//! Session slice handlers

use tracing::{debug, warn};
use wordsmith_core::ErrorReport;

use crate::state::AppState;

use super::{Task, UpdateResult};

/// Message shown when a clipboard write reports failure.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

pub fn handle_initialize(state: &mut AppState) -> UpdateResult {
    state.session.begin_request();
    UpdateResult::spawn(Task::Initialize)
}

/// Nothing from a failed fan-out is applied.
pub fn handle_initialize_failed(state: &mut AppState, error: &ErrorReport) -> UpdateResult {
    warn!("Initialization failed: {}", error);
    state.session.fail(error);
    UpdateResult::none()
}

/// `is_processing` only disables the view's buttons; a dispatch while busy
/// still runs.
pub fn handle_process_action(state: &mut AppState, action_id: String) -> UpdateResult {
    if state.session.actions.find(&action_id).is_none() {
        debug!("Action {} not in any fetched group", action_id);
    }

    let request = state.session.start_action(&action_id);
    UpdateResult::spawn(Task::ProcessAction(request))
}

pub fn handle_action_processed(
    state: &mut AppState,
    action_id: String,
    output: String,
) -> UpdateResult {
    debug!("Action {} produced {} bytes", action_id, output.len());
    state.session.finish_action(output);
    UpdateResult::none()
}

pub fn handle_action_failed(
    state: &mut AppState,
    action_id: String,
    error: &ErrorReport,
) -> UpdateResult {
    warn!("Action {} failed: {}", action_id, error);
    state.session.fail_action(error);
    UpdateResult::none()
}

pub fn handle_copy_output(state: &mut AppState) -> UpdateResult {
    state.session.begin_request();
    UpdateResult::spawn(Task::CopyToClipboard {
        text: state.session.output_text.clone(),
    })
}

/// A failed write only sets the error message.
pub fn handle_clipboard_copied(state: &mut AppState, success: bool) -> UpdateResult {
    state.session.is_processing = false;
    if !success {
        state
            .session
            .set_error(&ErrorReport::new("ClipboardError", COPY_FAILED_MESSAGE));
    }
    UpdateResult::none()
}
