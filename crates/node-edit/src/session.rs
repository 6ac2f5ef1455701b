//! Save-boundary glue between the core and the surrounding UI stores.
//!
//! The graph store owns the selection, the document store owns the text;
//! the core only reads from the one and hands a fresh string to the
//! other. Hard errors stop here, converted to the display message shown
//! to the user; nothing is retried.

use json_node_path::{Path, Step};
use serde_json::Value;

use crate::edit::apply_edit;
use crate::sync::sync_fields;
use crate::types::{EditableField, Row};

/// External owner of the document text.
pub trait DocumentStore {
    /// The current full document text.
    fn document_text(&self) -> String;
    /// Adopt new document text; `dirty` marks it as unsaved to disk.
    fn set_document_text(&mut self, text: String, dirty: bool);
}

/// The currently selected node, as handed over by the graph store.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSelection {
    pub rows: Vec<Row>,
    pub path: Path,
}

/// Project a selection's primitive rows into edit-mode fields.
///
/// Container rows are display summaries and stay out of edit mode. A
/// bare scalar node yields a single keyless field. The result is
/// throwaway state: dropping it is the cancel action.
pub fn edit_fields(selection: &NodeSelection) -> Vec<EditableField> {
    selection
        .rows
        .iter()
        .filter_map(|row| match row {
            Row::Keyed { key, value, kind } if !kind.is_container() => Some(EditableField {
                key: Some(key.clone()),
                value: field_text(value),
                kind: *kind,
            }),
            Row::Scalar { value, kind } => Some(EditableField {
                key: None,
                value: field_text(value),
                kind: *kind,
            }),
            _ => None,
        })
        .collect()
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Commit edited fields at `path`.
///
/// Reads a fresh snapshot from the store, and on success writes the new
/// text back exactly once, marked dirty. On failure the store is left
/// untouched and the error's display message is returned for the UI.
pub fn save_fields(
    store: &mut impl DocumentStore,
    path: &[Step],
    fields: &[EditableField],
) -> Result<(), String> {
    let text = store.document_text();
    let updated = sync_fields(&text, path, fields).map_err(|e| e.to_string())?;
    store.set_document_text(updated, true);
    Ok(())
}

/// Commit a whole-value replacement at `path`.
pub fn save_value(
    store: &mut impl DocumentStore,
    path: &[Step],
    value: Value,
) -> Result<(), String> {
    let text = store.document_text();
    let updated = apply_edit(&text, path, value).map_err(|e| e.to_string())?;
    store.set_document_text(updated, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueKind;
    use serde_json::json;

    struct MemoryStore {
        text: String,
        dirty: bool,
        writes: usize,
    }

    impl MemoryStore {
        fn new(text: &str) -> Self {
            MemoryStore {
                text: text.to_string(),
                dirty: false,
                writes: 0,
            }
        }
    }

    impl DocumentStore for MemoryStore {
        fn document_text(&self) -> String {
            self.text.clone()
        }

        fn set_document_text(&mut self, text: String, dirty: bool) {
            self.text = text;
            self.dirty = dirty;
            self.writes += 1;
        }
    }

    #[test]
    fn test_edit_fields_projection() {
        let selection = NodeSelection {
            rows: vec![
                Row::keyed("name", json!("ada")),
                Row::keyed("age", json!(36)),
                Row::summary("tags", "[2 items]", ValueKind::Array),
            ],
            path: vec![Step::key("person")],
        };
        let fields = edit_fields(&selection);
        assert_eq!(
            fields,
            vec![
                EditableField::new("name", "ada", ValueKind::String),
                EditableField::new("age", "36", ValueKind::Number),
            ]
        );
    }

    #[test]
    fn test_edit_fields_bare_scalar() {
        let selection = NodeSelection {
            rows: vec![Row::scalar(json!(true))],
            path: vec![],
        };
        let fields = edit_fields(&selection);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, None);
        assert_eq!(fields[0].value, "true");
        assert_eq!(fields[0].kind, ValueKind::Boolean);
    }

    #[test]
    fn test_save_fields_writes_once_and_marks_dirty() {
        let mut store = MemoryStore::new(r#"{"a": {"b": 1}}"#);
        let fields = vec![EditableField::new("b", "2", ValueKind::Number)];
        save_fields(&mut store, &[Step::key("a")], &fields).unwrap();
        assert_eq!(store.writes, 1);
        assert!(store.dirty);
        let parsed: Value = serde_json::from_str(&store.text).unwrap();
        assert_eq!(parsed, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_save_fields_failure_leaves_store_untouched() {
        let mut store = MemoryStore::new("{oops");
        let fields = vec![EditableField::new("b", "2", ValueKind::Number)];
        let err = save_fields(&mut store, &[], &fields).unwrap_err();
        assert!(!err.is_empty());
        assert_eq!(store.writes, 0);
        assert_eq!(store.text, "{oops");
        assert!(!store.dirty);
    }

    #[test]
    fn test_save_value_invalid_path_message() {
        let mut store = MemoryStore::new(r#"{"a": 1}"#);
        let err = save_value(&mut store, &[Step::key("x"), Step::key("y")], json!(0)).unwrap_err();
        assert_eq!(err, "Invalid path");
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_save_value_root() {
        let mut store = MemoryStore::new("{}");
        save_value(&mut store, &[], json!({"fresh": true})).unwrap();
        let parsed: Value = serde_json::from_str(&store.text).unwrap();
        assert_eq!(parsed, json!({"fresh": true}));
    }
}
