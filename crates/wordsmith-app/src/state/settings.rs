//! Settings slice: canonical provider settings plus their editing projection
//!
//! `settings` is the single source of truth. `header_rows` is the editing
//! buffer for `settings.headers`; every row edit re-flattens the canonical
//! map, and every whole-map change (load, reset, `set_headers`) rebuilds the
//! rows. Select items are derived on read.

use std::collections::BTreeMap;

use wordsmith_core::{
    pairs_to_record, record_to_pairs, string_to_select_item, strings_to_select_items,
    validate_base_url, KeyValuePair, SelectItem, Settings, MAX_TEMPERATURE, MIN_TEMPERATURE,
};

/// Provider checks offered by the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionCheck {
    /// Can the base URL be reached with the configured headers
    Connection,
    /// Does the models endpoint answer
    ModelsRequest,
    /// Does a completion request with the full settings succeed
    CompletionRequest,
}

impl ConnectionCheck {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionCheck::Connection => "Connection",
            ConnectionCheck::ModelsRequest => "Models request",
            ConnectionCheck::CompletionRequest => "Completion request",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    Unknown,
    Checking,
    Passed,
    Failed,
}

/// Status of every provider check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionChecks {
    pub connection: CheckStatus,
    pub models_request: CheckStatus,
    pub completion_request: CheckStatus,
}

impl ConnectionChecks {
    pub fn get(&self, check: ConnectionCheck) -> CheckStatus {
        match check {
            ConnectionCheck::Connection => self.connection,
            ConnectionCheck::ModelsRequest => self.models_request,
            ConnectionCheck::CompletionRequest => self.completion_request,
        }
    }

    pub fn set(&mut self, check: ConnectionCheck, status: CheckStatus) {
        match check {
            ConnectionCheck::Connection => self.connection = status,
            ConnectionCheck::ModelsRequest => self.models_request = status,
            ConnectionCheck::CompletionRequest => self.completion_request = status,
        }
    }

    /// Results no longer describe the edited values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State behind the settings view.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Canonical values (cached copy of the backend's settings)
    pub settings: Settings,

    /// Editing buffer for `settings.headers`
    pub header_rows: Vec<KeyValuePair>,

    /// Last fetched model list
    pub models: Vec<String>,

    /// Read-only location of the backend's settings file
    pub settings_file_path: Option<String>,

    pub is_loading: bool,

    pub error_msg: Option<String>,

    /// Unsaved edits exist
    pub is_changed: bool,

    pub base_url_error: Option<String>,

    pub checks: ConnectionChecks,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Whole-settings transitions
    // ─────────────────────────────────────────────────────────

    /// Replace everything with settings fresh from the backend.
    pub fn apply_loaded(&mut self, settings: Settings) {
        self.header_rows = record_to_pairs(&settings.headers);
        self.settings = settings;
        self.is_loading = false;
        self.is_changed = false;
        self.error_msg = None;
        self.checks.reset();
        self.revalidate_base_url();
    }

    /// A request failed; prior values stay in place.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error_msg = Some(message.into());
    }

    /// An aborted check that is still running goes back to unknown.
    pub fn cancel_check(&mut self, check: ConnectionCheck) {
        if self.checks.get(check) == CheckStatus::Checking {
            self.checks.set(check, CheckStatus::Unknown);
        }
    }

    /// Save succeeded. Values stay as edited.
    pub fn mark_saved(&mut self) {
        self.is_loading = false;
        self.is_changed = false;
        self.error_msg = None;
    }

    // ─────────────────────────────────────────────────────────
    // Field setters
    // ─────────────────────────────────────────────────────────

    pub fn set_base_url(&mut self, base_url: String) {
        self.settings.base_url = base_url;
        self.revalidate_base_url();
        self.touch();
    }

    /// Replace the whole header map; rows are rebuilt with fresh ids.
    pub fn set_headers(&mut self, headers: BTreeMap<String, String>) {
        self.header_rows = record_to_pairs(&headers);
        self.sync_headers();
        self.touch();
    }

    pub fn set_model_name(&mut self, model_name: String) {
        self.settings.model_name = model_name;
        self.touch();
    }

    /// Non-finite values are ignored; everything else is clamped to 0.0..=1.0.
    pub fn set_temperature(&mut self, temperature: f64) {
        if !temperature.is_finite() {
            return;
        }
        self.settings.temperature = temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
        self.touch();
    }

    pub fn set_default_input_language(&mut self, language: String) {
        self.settings.default_input_language = language;
        self.touch();
    }

    pub fn set_default_output_language(&mut self, language: String) {
        self.settings.default_output_language = language;
        self.touch();
    }

    pub fn set_use_markdown_for_output(&mut self, enabled: bool) {
        self.settings.use_markdown_for_output = enabled;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────
    // Header rows
    // ─────────────────────────────────────────────────────────

    /// Append a blank row. Returns false, changing nothing, when a row with a
    /// blank key is already waiting to be filled in.
    pub fn add_header(&mut self) -> bool {
        if self.header_rows.iter().any(KeyValuePair::has_blank_key) {
            return false;
        }
        self.header_rows.push(KeyValuePair::blank());
        self.sync_headers();
        self.touch();
        true
    }

    pub fn update_header_key(&mut self, id: &str, key: String) -> bool {
        let Some(row) = self.header_rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        row.key = key;
        self.sync_headers();
        self.touch();
        true
    }

    pub fn update_header_value(&mut self, id: &str, value: String) -> bool {
        let Some(row) = self.header_rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        row.value = value;
        self.sync_headers();
        self.touch();
        true
    }

    pub fn remove_header(&mut self, id: &str) -> bool {
        let before = self.header_rows.len();
        self.header_rows.retain(|row| row.id != id);
        if self.header_rows.len() == before {
            return false;
        }
        self.sync_headers();
        self.touch();
        true
    }

    // ─────────────────────────────────────────────────────────
    // Models
    // ─────────────────────────────────────────────────────────

    /// Store a fetched model list. If the current model is not offered, the
    /// first entry is selected. Returns true when the selection changed.
    pub fn apply_models(&mut self, models: Vec<String>) -> bool {
        self.models = models;
        let replacement = match self.models.first() {
            Some(first) if !self.models.contains(&self.settings.model_name) => first.clone(),
            _ => return false,
        };
        self.set_model_name(replacement);
        true
    }

    pub fn clear_models(&mut self) {
        self.models.clear();
    }

    // ─────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────

    pub fn is_base_url_valid(&self) -> bool {
        validate_base_url(&self.settings.base_url).is_ok()
    }

    /// Save is offered only for valid, unsaved edits while idle.
    pub fn can_save(&self) -> bool {
        self.is_changed && !self.is_loading && self.is_base_url_valid()
    }

    pub fn language_items(&self) -> Vec<SelectItem> {
        strings_to_select_items(&self.settings.available_languages)
    }

    pub fn default_input_language_item(&self) -> SelectItem {
        string_to_select_item(&self.settings.default_input_language)
    }

    pub fn default_output_language_item(&self) -> SelectItem {
        string_to_select_item(&self.settings.default_output_language)
    }

    /// Fetched models, with the current model first if the list lacks it.
    pub fn model_items(&self) -> Vec<SelectItem> {
        let mut items = strings_to_select_items(&self.models);
        let current = &self.settings.model_name;
        if !current.is_empty() && !self.models.contains(current) {
            items.insert(0, string_to_select_item(current));
        }
        items
    }

    pub fn model_item(&self) -> SelectItem {
        string_to_select_item(&self.settings.model_name)
    }

    fn revalidate_base_url(&mut self) {
        self.base_url_error = validate_base_url(&self.settings.base_url)
            .err()
            .map(|e| e.to_string());
    }

    fn sync_headers(&mut self) {
        self.settings.headers = pairs_to_record(&self.header_rows);
    }

    fn touch(&mut self) {
        self.is_changed = true;
        self.checks.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(headers: &[(&str, &str)]) -> SettingsState {
        let mut state = SettingsState::new();
        state.apply_loaded(Settings {
            base_url: "http://x".to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            model_name: "m".to_string(),
            temperature: 0.5,
            ..Default::default()
        });
        state
    }

    #[test]
    fn test_apply_loaded_rebuilds_projection() {
        let state = loaded(&[("A", "1"), ("B", "2")]);

        assert_eq!(state.header_rows.len(), 2);
        assert!(!state.is_changed);
        assert!(state.base_url_error.is_none());
        assert_eq!(pairs_to_record(&state.header_rows), state.settings.headers);
    }

    #[test]
    fn test_apply_loaded_flags_invalid_base_url() {
        let mut state = SettingsState::new();
        state.apply_loaded(Settings {
            base_url: "localhost:8080".to_string(),
            ..Default::default()
        });
        assert_eq!(
            state.base_url_error.as_deref(),
            Some("Base Url should start with http:// or https://")
        );
    }

    #[test]
    fn test_set_base_url_validates_each_edit() {
        let mut state = loaded(&[]);

        state.set_base_url(String::new());
        assert_eq!(
            state.base_url_error.as_deref(),
            Some("Base Url cannot be empty.")
        );

        state.set_base_url("ftp://x".to_string());
        assert_eq!(
            state.base_url_error.as_deref(),
            Some("Base Url should start with http:// or https://")
        );

        state.set_base_url("http://x/".to_string());
        assert_eq!(
            state.base_url_error.as_deref(),
            Some("Base Url should not end with /")
        );

        state.set_base_url("http://x".to_string());
        assert!(state.base_url_error.is_none());
        assert!(state.is_changed);
    }

    #[test]
    fn test_remove_header_reflattens_map() {
        let mut state = loaded(&[("A", "1")]);
        let id = state.header_rows[0].id.clone();

        assert!(state.remove_header(&id));

        assert!(state.settings.headers.is_empty());
        assert!(state.header_rows.is_empty());
        assert!(state.is_changed);
    }

    #[test]
    fn test_remove_unknown_header_is_noop() {
        let mut state = loaded(&[("A", "1")]);
        assert!(!state.remove_header("nope"));
        assert!(!state.is_changed);
    }

    #[test]
    fn test_add_header_twice_yields_one_blank_row() {
        let mut state = loaded(&[("A", "1")]);

        assert!(state.add_header());
        assert!(!state.add_header());

        assert_eq!(state.header_rows.len(), 2);
        assert_eq!(
            state.header_rows.iter().filter(|r| r.has_blank_key()).count(),
            1
        );
        // blank rows never reach the canonical map
        assert_eq!(state.settings.headers.len(), 1);
    }

    #[test]
    fn test_add_header_allowed_after_key_filled() {
        let mut state = loaded(&[]);
        state.add_header();
        let id = state.header_rows[0].id.clone();

        state.update_header_key(&id, "X-Api-Key".to_string());
        state.update_header_value(&id, "secret".to_string());

        assert_eq!(
            state.settings.headers.get("X-Api-Key").map(String::as_str),
            Some("secret")
        );
        assert!(state.add_header());
        assert_eq!(state.header_rows.len(), 2);
    }

    #[test]
    fn test_header_key_is_trimmed_in_canonical_map() {
        let mut state = loaded(&[("A", "1")]);
        let id = state.header_rows[0].id.clone();

        state.update_header_key(&id, "  B  ".to_string());

        assert_eq!(state.settings.headers.len(), 1);
        assert!(state.settings.headers.contains_key("B"));
        assert_eq!(state.header_rows[0].key, "  B  ");
    }

    #[test]
    fn test_set_headers_recomputes_rows() {
        let mut state = loaded(&[("A", "1")]);
        let old_id = state.header_rows[0].id.clone();

        let mut headers = BTreeMap::new();
        headers.insert("A".to_string(), "1".to_string());
        headers.insert("C".to_string(), "3".to_string());
        state.set_headers(headers.clone());

        assert_eq!(state.settings.headers, headers);
        assert_eq!(state.header_rows.len(), 2);
        assert!(state.header_rows.iter().all(|r| r.id != old_id));
        assert!(state.is_changed);
    }

    #[test]
    fn test_temperature_is_clamped() {
        let mut state = loaded(&[]);

        state.set_temperature(1.7);
        assert_eq!(state.settings.temperature, 1.0);

        state.set_temperature(-0.2);
        assert_eq!(state.settings.temperature, 0.0);

        state.set_temperature(f64::NAN);
        assert_eq!(state.settings.temperature, 0.0);
    }

    #[test]
    fn test_models_auto_select_first_when_current_missing() {
        let mut state = loaded(&[]);
        state.settings.model_name = "gpt-3".to_string();

        let changed = state.apply_models(vec!["a".to_string(), "b".to_string()]);

        assert!(changed);
        assert_eq!(state.settings.model_name, "a");
        assert_eq!(state.model_item(), SelectItem::new("a", "a"));
        assert!(state.is_changed);
    }

    #[test]
    fn test_models_keep_current_when_present() {
        let mut state = loaded(&[]);
        state.settings.model_name = "b".to_string();

        let changed = state.apply_models(vec!["a".to_string(), "b".to_string()]);

        assert!(!changed);
        assert_eq!(state.settings.model_name, "b");
        assert!(!state.is_changed);
    }

    #[test]
    fn test_empty_model_list_keeps_current() {
        let mut state = loaded(&[]);
        assert!(!state.apply_models(Vec::new()));
        assert_eq!(state.settings.model_name, "m");
    }

    #[test]
    fn test_model_items_include_unlisted_current_model() {
        let mut state = loaded(&[]);
        state.models = vec!["a".to_string()];

        let items = state.model_items();

        assert_eq!(items, vec![SelectItem::new("m", "m"), SelectItem::new("a", "a")]);
    }

    #[test]
    fn test_can_save_requires_valid_unsaved_edits() {
        let mut state = loaded(&[]);
        assert!(!state.can_save());

        state.set_model_name("other".to_string());
        assert!(state.can_save());

        state.set_base_url("http://x/".to_string());
        assert!(!state.can_save());

        state.set_base_url("http://y".to_string());
        state.is_loading = true;
        assert!(!state.can_save());
    }

    #[test]
    fn test_edit_resets_check_results() {
        let mut state = loaded(&[]);
        state.checks.set(ConnectionCheck::Connection, CheckStatus::Passed);

        state.set_base_url("http://other".to_string());

        assert_eq!(state.checks.get(ConnectionCheck::Connection), CheckStatus::Unknown);
    }

    #[test]
    fn test_failure_keeps_edits() {
        let mut state = loaded(&[]);
        state.set_model_name("edited".to_string());
        state.is_loading = true;

        state.fail("Failed to save settings");

        assert_eq!(state.settings.model_name, "edited");
        assert!(state.is_changed);
        assert!(!state.is_loading);
        assert_eq!(state.error_msg.as_deref(), Some("Failed to save settings"));
    }

    #[test]
    fn test_language_items_follow_available_languages() {
        let mut state = loaded(&[]);
        state.settings.available_languages = vec!["en".to_string(), "de".to_string()];
        state.settings.default_output_language = "de".to_string();

        assert_eq!(
            state.language_items(),
            vec![SelectItem::new("en", "en"), SelectItem::new("de", "de")]
        );
        assert_eq!(state.default_output_language_item(), SelectItem::new("de", "de"));
    }
}
