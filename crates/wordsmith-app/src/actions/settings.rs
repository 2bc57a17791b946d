//! Settings tasks

use wordsmith_backend::Backend;
use wordsmith_core::Settings;

use crate::adapter::BackendAdapter;
use crate::message::Message;
use crate::state::ConnectionCheck;

use super::report;

pub async fn load<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match adapter.load_settings().await {
        Ok(settings) => Message::SettingsLoaded { settings },
        Err(e) => Message::SettingsLoadFailed { error: report(e) },
    }
}

pub async fn reset<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match adapter.reset_to_default_settings().await {
        Ok(settings) => Message::SettingsLoaded { settings },
        Err(e) => Message::SettingsLoadFailed { error: report(e) },
    }
}

pub async fn save<B: Backend + Sync>(adapter: &BackendAdapter<B>, settings: &Settings) -> Message {
    match adapter.save_settings(settings).await {
        Ok(settings) => Message::SettingsSaved { settings },
        Err(e) => Message::SettingsSaveFailed { error: report(e) },
    }
}

pub async fn file_path<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match adapter.settings_file_path().await {
        Ok(path) => Message::SettingsFilePathLoaded { path },
        Err(e) => Message::SettingsFilePathFailed { error: report(e) },
    }
}

pub async fn list_models<B: Backend + Sync>(adapter: &BackendAdapter<B>) -> Message {
    match adapter.get_models_list().await {
        Ok(models) => Message::ModelsListed { models },
        Err(e) => Message::ModelsListFailed { error: report(e) },
    }
}

pub async fn run_check<B: Backend + Sync>(
    adapter: &BackendAdapter<B>,
    check: ConnectionCheck,
    settings: &Settings,
) -> Message {
    let passed = match check {
        ConnectionCheck::Connection => {
            adapter
                .validate_connection(&settings.base_url, &settings.headers)
                .await
        }
        ConnectionCheck::ModelsRequest => {
            adapter
                .validate_models_request(&settings.base_url, &settings.headers)
                .await
        }
        ConnectionCheck::CompletionRequest => adapter.validate_completion_request(settings).await,
    };
    Message::CheckCompleted { check, passed }
}
