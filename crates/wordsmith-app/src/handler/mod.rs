//! Handler module - TEA update function and slice handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `settings`: Settings slice handlers
//! - `session`: Session slice handlers

pub(crate) mod session;
pub(crate) mod settings;
pub(crate) mod update;


use wordsmith_core::{ActionRequest, ErrorReport, Settings};

use crate::message::{Cancelled, Message};
use crate::state::ConnectionCheck;

// Re-export main entry point
pub use update::update;

/// Actions that the engine should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Background tasks to spawn. Each one ends in exactly one completion message.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    LoadSettings,
    ResetSettings,
    SaveSettings(Settings),
    FetchSettingsFilePath,
    ListModels,
    /// Run a provider check against a snapshot of the form values
    RunCheck {
        check: ConnectionCheck,
        settings: Settings,
    },
    Initialize,
    ProcessAction(ActionRequest),
    CopyToClipboard { text: String },
    PasteFromClipboard,
    RefreshProvider,
}

impl Task {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Task::LoadSettings => "load_settings",
            Task::ResetSettings => "reset_settings",
            Task::SaveSettings(_) => "save_settings",
            Task::FetchSettingsFilePath => "fetch_settings_file_path",
            Task::ListModels => "list_models",
            Task::RunCheck { .. } => "run_check",
            Task::Initialize => "initialize",
            Task::ProcessAction(_) => "process_action",
            Task::CopyToClipboard { .. } => "copy_to_clipboard",
            Task::PasteFromClipboard => "paste_from_clipboard",
            Task::RefreshProvider => "refresh_provider",
        }
    }

    /// Message that releases the pending state of this task if it is
    /// aborted. `None` when the task holds nothing.
    pub fn cancellation(&self) -> Option<Message> {
        let cancelled = match self {
            Task::LoadSettings | Task::ResetSettings | Task::SaveSettings(_) => {
                Cancelled::SettingsRequest
            }
            Task::RunCheck { check, .. } => Cancelled::Check(*check),
            Task::ProcessAction(request) => Cancelled::Action {
                action_id: request.action_id.clone(),
            },
            Task::Initialize | Task::CopyToClipboard { .. } | Task::PasteFromClipboard => {
                Cancelled::SessionRequest
            }
            Task::FetchSettingsFilePath | Task::ListModels | Task::RefreshProvider => return None,
        };
        Some(Message::TaskCancelled(cancelled))
    }

    /// The failure completion of this task, for when it stops without
    /// producing one.
    pub fn failure(&self, error: ErrorReport) -> Message {
        match self {
            Task::LoadSettings | Task::ResetSettings => Message::SettingsLoadFailed { error },
            Task::SaveSettings(_) => Message::SettingsSaveFailed { error },
            Task::FetchSettingsFilePath => Message::SettingsFilePathFailed { error },
            Task::ListModels => Message::ModelsListFailed { error },
            Task::RunCheck { check, .. } => Message::CheckCompleted {
                check: *check,
                passed: false,
            },
            Task::Initialize => Message::InitializeFailed { error },
            Task::ProcessAction(request) => Message::ActionFailed {
                action_id: request.action_id.clone(),
                error,
            },
            Task::CopyToClipboard { .. } => Message::ClipboardCopied { success: false },
            Task::PasteFromClipboard => Message::ClipboardPasteFailed { error },
            Task::RefreshProvider => Message::ProviderRefreshFailed { error },
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the engine to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn spawn(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }

    /// Follow-up message plus a task.
    pub fn message_and_spawn(msg: Message, task: Task) -> Self {
        Self {
            message: Some(msg),
            action: Some(UpdateAction::SpawnTask(task)),
        }
    }
}
