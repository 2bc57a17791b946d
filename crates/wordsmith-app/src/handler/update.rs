//! Main update function - handles state transitions (TEA pattern)

use crate::message::{Cancelled, Message};
use crate::state::AppState;
use tracing::{debug, warn};

use super::{session, settings, Task, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Root View
        // ─────────────────────────────────────────────────────────
        Message::ShowSettings => {
            state.show_settings = true;
            UpdateResult::message_and_spawn(Message::LoadSettings, Task::ListModels)
        }

        Message::HideSettings => {
            state.show_settings = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Settings Slice
        // ─────────────────────────────────────────────────────────
        Message::LoadSettings => settings::handle_load(state),
        Message::ResetSettings => settings::handle_reset(state),
        Message::SettingsLoaded { settings: loaded } => settings::handle_loaded(state, loaded),
        Message::SettingsLoadFailed { error } => settings::handle_failed(state, &error),
        Message::FetchSettingsFilePath => UpdateResult::spawn(Task::FetchSettingsFilePath),
        Message::SettingsFilePathLoaded { path } => {
            state.settings.settings_file_path = Some(path);
            UpdateResult::none()
        }
        Message::SettingsFilePathFailed { error } => {
            // display-only field; the form stays usable without it
            warn!("Settings file path unavailable: {}", error);
            UpdateResult::none()
        }
        Message::SaveSettings => settings::handle_save(state),
        Message::SettingsSaved { settings: saved } => settings::handle_saved(state, saved),
        Message::SettingsSaveFailed { error } => settings::handle_failed(state, &error),

        Message::SetBaseUrl(base_url) => {
            state.settings.set_base_url(base_url);
            UpdateResult::none()
        }
        Message::SetHeaders(headers) => {
            state.settings.set_headers(headers);
            UpdateResult::none()
        }
        Message::SetModelName(model_name) => {
            state.settings.set_model_name(model_name);
            UpdateResult::none()
        }
        Message::SetTemperature(temperature) => {
            state.settings.set_temperature(temperature);
            UpdateResult::none()
        }
        Message::SetDefaultInputLanguage(language) => {
            state.settings.set_default_input_language(language);
            UpdateResult::none()
        }
        Message::SetDefaultOutputLanguage(language) => {
            state.settings.set_default_output_language(language);
            UpdateResult::none()
        }
        Message::SetUseMarkdownForOutput(enabled) => {
            state.settings.set_use_markdown_for_output(enabled);
            UpdateResult::none()
        }
        Message::AddHeader => settings::handle_add_header(state),
        Message::UpdateHeaderKey { id, key } => {
            settings::handle_row_edit(state.settings.update_header_key(&id, key), &id)
        }
        Message::UpdateHeaderValue { id, value } => {
            settings::handle_row_edit(state.settings.update_header_value(&id, value), &id)
        }
        Message::RemoveHeader { id } => {
            settings::handle_row_edit(state.settings.remove_header(&id), &id)
        }

        Message::ListModels => UpdateResult::spawn(Task::ListModels),
        Message::ModelsListed { models } => settings::handle_models_listed(state, models),
        Message::ModelsListFailed { error } => settings::handle_models_failed(state, &error),

        Message::RunCheck(check) => settings::handle_run_check(state, check),
        Message::CheckCompleted { check, passed } => {
            settings::handle_check_completed(state, check, passed)
        }

        Message::DismissSettingsError => {
            state.settings.error_msg = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session Slice
        // ─────────────────────────────────────────────────────────
        Message::Initialize => session::handle_initialize(state),
        Message::Initialized(data) => {
            state.session.apply_initial_data(*data);
            UpdateResult::none()
        }
        Message::InitializeFailed { error } => session::handle_initialize_failed(state, &error),

        Message::ProcessAction { action_id } => session::handle_process_action(state, action_id),
        Message::ActionProcessed { action_id, output } => {
            session::handle_action_processed(state, action_id, output)
        }
        Message::ActionFailed { action_id, error } => {
            session::handle_action_failed(state, action_id, &error)
        }

        Message::CopyOutput => session::handle_copy_output(state),
        Message::ClipboardCopied { success } => session::handle_clipboard_copied(state, success),
        Message::PasteInput => {
            state.session.begin_request();
            UpdateResult::spawn(Task::PasteFromClipboard)
        }
        Message::ClipboardPasted { text } => {
            state.session.input_text = text;
            state.session.is_processing = false;
            UpdateResult::none()
        }
        Message::ClipboardPasteFailed { error } => {
            state.session.fail(&error);
            UpdateResult::none()
        }

        Message::RefreshProvider => UpdateResult::spawn(Task::RefreshProvider),
        Message::ProviderRefreshed { provider } => {
            state.session.provider = Some(provider);
            UpdateResult::none()
        }
        Message::ProviderRefreshFailed { error } => {
            state.session.set_error(&error);
            UpdateResult::none()
        }

        Message::SetInputText(text) => {
            state.session.input_text = text;
            UpdateResult::none()
        }
        Message::SetOutputText(text) => {
            state.session.output_text = text;
            UpdateResult::none()
        }
        Message::SelectInputLanguage(language_id) => {
            state.session.selected_input_language = Some(language_id);
            UpdateResult::none()
        }
        Message::SelectOutputLanguage(language_id) => {
            state.session.selected_output_language = Some(language_id);
            UpdateResult::none()
        }
        Message::SwapLanguages => {
            state.session.swap_languages();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.session.clear_input();
            UpdateResult::none()
        }
        Message::ClearOutput => {
            state.session.clear_output();
            UpdateResult::none()
        }
        Message::DismissError => {
            state.session.clear_error();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Engine
        // ─────────────────────────────────────────────────────────
        Message::TaskCancelled(cancelled) => {
            debug!("Releasing {:?}", cancelled);
            match cancelled {
                Cancelled::SettingsRequest => state.settings.is_loading = false,
                Cancelled::Check(check) => state.settings.cancel_check(check),
                Cancelled::Action { action_id } => state.session.cancel_action(&action_id),
                Cancelled::SessionRequest => state.session.is_processing = false,
            }
            UpdateResult::none()
        }
    }
}
