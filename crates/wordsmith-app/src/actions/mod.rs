//! Task execution: run one background task against the backend
//!
//! Every task resolves to exactly one completion [`Message`]. Failures are
//! already normalized by the adapter and travel as [`ErrorReport`]s.

use tracing::debug;
use wordsmith_backend::Backend;
use wordsmith_core::ErrorReport;

use crate::adapter::BackendAdapter;
use crate::handler::Task;
use crate::message::Message;

pub mod session;
pub mod settings;

/// Run `task` to completion and produce its completion message.
pub async fn execute_task<B: Backend + Sync>(task: Task, adapter: &BackendAdapter<B>) -> Message {
    debug!("Executing task {}", task.name());
    match task {
        Task::LoadSettings => settings::load(adapter).await,
        Task::ResetSettings => settings::reset(adapter).await,
        Task::SaveSettings(values) => settings::save(adapter, &values).await,
        Task::FetchSettingsFilePath => settings::file_path(adapter).await,
        Task::ListModels => settings::list_models(adapter).await,
        Task::RunCheck {
            check,
            settings: values,
        } => settings::run_check(adapter, check, &values).await,
        Task::Initialize => session::initialize(adapter).await,
        Task::ProcessAction(request) => session::process_action(adapter, request).await,
        Task::CopyToClipboard { text } => session::copy_to_clipboard(adapter, &text).await,
        Task::PasteFromClipboard => session::paste_from_clipboard(adapter).await,
        Task::RefreshProvider => session::refresh_provider(adapter).await,
    }
}

fn report(err: wordsmith_core::Error) -> ErrorReport {
    ErrorReport::from(err)
}
