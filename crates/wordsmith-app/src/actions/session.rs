//! Session tasks

use wordsmith_backend::Backend;
use wordsmith_core::{ActionGroup, ActionRequest, Result};

use crate::adapter::BackendAdapter;
use crate::message::{ActionLists, InitialData, Message};

use super::report;

/// Fetch everything the main view needs, concurrently.
///
/// The first failure aborts the whole fan-out and nothing is returned.
pub async fn fetch_initial_data<B: Backend + Sync>(
    adapter: &BackendAdapter<B>,
) -> Result<InitialData> {
    let (
        proofreading,
        formatting,
        translating,
        summarization,
        transforming,
        input_languages,
        output_languages,
        default_input_language,
        default_output_language,
        provider,
    ) = tokio::try_join!(
        adapter.get_action_items(ActionGroup::Proofreading),
        adapter.get_action_items(ActionGroup::Formatting),
        adapter.get_action_items(ActionGroup::Translating),
        adapter.get_action_items(ActionGroup::Summarization),
        adapter.get_action_items(ActionGroup::Transforming),
        adapter.get_input_languages(),
        adapter.get_output_languages(),
        adapter.get_default_input_language(),
        adapter.get_default_output_language(),
        adapter.get_current_provider(),
    )?;

    Ok(InitialData {
        actions: ActionLists {
            proofreading,
            formatting,
            translating,
            summarization,
            transforming,
        },
        input_languages,
        output_languages,
        default_input_language,
        default_output_language,
        provider,
    })
}

pub async fn initialize<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match fetch_initial_data(adapter).await {
        Ok(data) => Message::Initialized(Box::new(data)),
        Err(e) => Message::InitializeFailed { error: report(e) },
    }
}

pub async fn process_action<B: Backend + Sync>(
    adapter: &BackendAdapter<B>,
    request: ActionRequest,
) -> Message {
    let action_id = request.action_id.clone();
    match adapter.process_action(&request).await {
        Ok(output) => Message::ActionProcessed { action_id, output },
        Err(e) => Message::ActionFailed {
            action_id,
            error: report(e),
        },
    }
}

pub async fn copy_to_clipboard<B: Backend + Sync>(
    adapter: &BackendAdapter<B>,
    text: &str,
) -> Message {
    let success = adapter.clipboard_set_text(text).await;
    Message::ClipboardCopied { success }
}

pub async fn paste_from_clipboard<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match adapter.clipboard_get_text().await {
        Ok(text) => Message::ClipboardPasted { text },
        Err(e) => Message::ClipboardPasteFailed { error: report(e) },
    }
}

pub async fn refresh_provider<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match adapter.get_current_provider().await {
        Ok(provider) => Message::ProviderRefreshed { provider },
        Err(e) => Message::ProviderRefreshFailed { error: report(e) },
    }
}
