//! Conversions between backend wire records and frontend display records

use std::collections::BTreeMap;

use rand::Rng;

use crate::types::{ActionItem, KeyValuePair, LanguageItem, SelectItem};

/// Generate an opaque row identifier.
pub fn fresh_id() -> String {
    format!("{:016x}", rand::thread_rng().gen::<u64>())
}

/// Expand a header map into editable rows, one fresh id per entry.
///
/// Row order follows map iteration order; callers must not rely on it
/// matching the order the backend used.
pub fn record_to_pairs(record: &BTreeMap<String, String>) -> Vec<KeyValuePair> {
    record
        .iter()
        .map(|(key, value)| KeyValuePair::new(key.clone(), value.clone()))
        .collect()
}

/// Flatten editable rows back into a header map.
///
/// Rows whose key is blank after trimming are dropped. Keys are stored
/// trimmed; when two rows share a key the later row wins.
pub fn pairs_to_record(pairs: &[KeyValuePair]) -> BTreeMap<String, String> {
    let mut record = BTreeMap::new();
    for pair in pairs {
        let key = pair.key.trim();
        if key.is_empty() {
            continue;
        }
        record.insert(key.to_string(), pair.value.clone());
    }
    record
}

/// `{item_id: s, display_text: s}`
pub fn string_to_select_item(s: &str) -> SelectItem {
    SelectItem::new(s, s)
}

pub fn strings_to_select_items(items: &[String]) -> Vec<SelectItem> {
    items.iter().map(|s| string_to_select_item(s)).collect()
}

pub fn language_to_select_item(language: &LanguageItem) -> SelectItem {
    SelectItem::new(&language.language_id, &language.language_text)
}

pub fn action_to_select_item(action: &ActionItem) -> SelectItem {
    SelectItem::new(&action.action_id, &action.action_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_record_round_trip_without_blank_keys() {
        let original = headers(&[
            ("Authorization", "Bearer abc"),
            ("X-Org", "acme"),
            ("X-Empty-Value", ""),
        ]);

        let rows = record_to_pairs(&original);
        assert_eq!(rows.len(), 3);

        assert_eq!(pairs_to_record(&rows), original);
    }

    #[test]
    fn test_record_to_pairs_assigns_unique_ids() {
        let rows = record_to_pairs(&headers(&[("A", "1"), ("B", "2"), ("C", "3")]));

        let mut ids: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(rows.iter().all(|r| !r.id.is_empty()));
    }

    #[test]
    fn test_record_to_pairs_ids_are_fresh_each_call() {
        let record = headers(&[("A", "1")]);
        let first = record_to_pairs(&record);
        let second = record_to_pairs(&record);
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn test_pairs_to_record_drops_blank_keys() {
        let rows = vec![
            KeyValuePair::new("", "orphan"),
            KeyValuePair::new("   ", "spaces"),
            KeyValuePair::new("A", "1"),
        ];

        assert_eq!(pairs_to_record(&rows), headers(&[("A", "1")]));
    }

    #[test]
    fn test_pairs_to_record_last_write_wins() {
        let rows = vec![
            KeyValuePair::new("A", "first"),
            KeyValuePair::new(" A ", "second"),
        ];

        assert_eq!(pairs_to_record(&rows), headers(&[("A", "second")]));
    }

    #[test]
    fn test_string_to_select_item_is_identity() {
        for s in ["", "en", "gpt-4o-mini", "名前"] {
            let item = string_to_select_item(s);
            assert_eq!(item.item_id, s);
            assert_eq!(item.display_text, s);
        }
    }

    #[test]
    fn test_language_and_action_items() {
        let lang = language_to_select_item(&LanguageItem::new("de", "German"));
        assert_eq!(lang, SelectItem::new("de", "German"));

        let action = action_to_select_item(&ActionItem::new("fix", "Fix grammar"));
        assert_eq!(action, SelectItem::new("fix", "Fix grammar"));
    }
}
