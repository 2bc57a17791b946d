//! Session slice: the main view's working state

use std::mem;

use wordsmith_core::{ActionRequest, CurrentProvider, ErrorKind, ErrorReport, LanguageItem};

use crate::message::{ActionLists, InitialData};

/// Transient text-processing state plus the lists fetched at startup.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub input_text: String,
    pub output_text: String,

    pub selected_input_language: Option<String>,
    pub selected_output_language: Option<String>,

    /// Id of the action being processed, `None` when idle
    pub current_task: Option<String>,

    /// Shared busy flag. Any pending session request sets it and the next
    /// settlement clears it, so overlapping requests can clear it early.
    pub is_processing: bool,

    pub error_message: Option<String>,
    pub error_kind: Option<ErrorKind>,

    pub actions: ActionLists,
    pub input_languages: Vec<LanguageItem>,
    pub output_languages: Vec<LanguageItem>,
    pub default_input_language: Option<LanguageItem>,
    pub default_output_language: Option<LanguageItem>,
    pub provider: Option<CurrentProvider>,

    /// Initialization completed successfully
    pub initialized: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_request(&mut self) {
        self.is_processing = true;
    }

    /// Apply the initialization fan-out in one step.
    pub fn apply_initial_data(&mut self, data: InitialData) {
        self.selected_input_language = Some(data.default_input_language.language_id.clone());
        self.selected_output_language = Some(data.default_output_language.language_id.clone());
        self.actions = data.actions;
        self.input_languages = data.input_languages;
        self.output_languages = data.output_languages;
        self.default_input_language = Some(data.default_input_language);
        self.default_output_language = Some(data.default_output_language);
        self.provider = Some(data.provider);
        self.initialized = true;
        self.is_processing = false;
        self.clear_error();
    }

    /// A request failed; record the error and release the busy flag.
    pub fn fail(&mut self, error: &ErrorReport) {
        self.is_processing = false;
        self.set_error(error);
    }

    pub fn set_error(&mut self, error: &ErrorReport) {
        self.error_message = Some(error.message.clone());
        self.error_kind = error.kind;
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.error_kind = None;
    }

    // ─────────────────────────────────────────────────────────
    // Action processing
    // ─────────────────────────────────────────────────────────

    /// Mark `action_id` as running and build its request.
    pub fn start_action(&mut self, action_id: &str) -> ActionRequest {
        self.current_task = Some(action_id.to_string());
        self.begin_request();
        self.clear_error();
        ActionRequest {
            action_id: action_id.to_string(),
            action_input: self.input_text.clone(),
            action_output: self.output_text.clone(),
            action_input_language: self.selected_input_language.clone().unwrap_or_default(),
            action_output_language: self.selected_output_language.clone().unwrap_or_default(),
        }
    }

    pub fn finish_action(&mut self, output: String) {
        self.output_text = output;
        self.current_task = None;
        self.is_processing = false;
    }

    pub fn fail_action(&mut self, error: &ErrorReport) {
        self.current_task = None;
        self.fail(error);
    }

    /// The task for `action_id` was aborted without a result.
    pub fn cancel_action(&mut self, action_id: &str) {
        if self.current_task.as_deref() == Some(action_id) {
            self.current_task = None;
        }
        self.is_processing = false;
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn swap_languages(&mut self) {
        mem::swap(
            &mut self.selected_input_language,
            &mut self.selected_output_language,
        );
    }

    pub fn clear_input(&mut self) {
        self.input_text.clear();
    }

    pub fn clear_output(&mut self) {
        self.output_text.clear();
    }
}
