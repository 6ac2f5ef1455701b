//! End-to-end flow: selection -> read views -> edit -> save.

use json_node_edit::{
    apply_edit, edit_fields, format_query, normalize, save_fields, sync_fields, DocumentStore,
    EditableField, NodeSelection, Row, Step, ValueKind,
};
use serde_json::{json, Value};

struct MemoryStore {
    text: String,
    dirty: bool,
}

impl DocumentStore for MemoryStore {
    fn document_text(&self) -> String {
        self.text.clone()
    }

    fn set_document_text(&mut self, text: String, dirty: bool) {
        self.text = text;
        self.dirty = dirty;
    }
}

fn reparse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_inspect_then_edit_then_save() {
    let doc = r#"{"customer": [{"id": 7, "name": "ada", "orders": [1, 2]}]}"#;
    let mut store = MemoryStore {
        text: doc.to_string(),
        dirty: false,
    };

    // What the graph store hands over for the selected node.
    let selection = NodeSelection {
        rows: vec![
            Row::keyed("id", json!(7)),
            Row::keyed("name", json!("ada")),
            Row::summary("orders", "[2 items]", ValueKind::Array),
        ],
        path: vec![Step::key("customer"), Step::index(0)],
    };

    // Read views.
    assert_eq!(format_query(&selection.path), r#"$["customer"][0]"#);
    let snippet = normalize(&selection.rows);
    assert_eq!(reparse(&snippet), json!({"id": 7, "name": "ada"}));

    // Edit mode: tweak one field, drop another.
    let mut fields = edit_fields(&selection);
    assert_eq!(fields.len(), 2);
    fields[0].value = "8".to_string();
    fields.truncate(1);

    save_fields(&mut store, &selection.path, &fields).unwrap();
    assert!(store.dirty);
    assert_eq!(
        reparse(&store.text),
        json!({"customer": [{"id": 8, "orders": [1, 2]}]})
    );
}

#[test]
fn test_cancel_is_just_dropping_the_fields() {
    let doc = r#"{"a": {"b": 1}}"#;
    let mut store = MemoryStore {
        text: doc.to_string(),
        dirty: false,
    };
    let selection = NodeSelection {
        rows: vec![Row::keyed("b", json!(1))],
        path: vec![Step::key("a")],
    };

    let mut fields = edit_fields(&selection);
    fields[0].value = "999".to_string();
    drop(fields);

    // No save happened: store text and dirty flag are untouched.
    assert_eq!(store.text, doc);
    assert!(!store.dirty);
    // A later save from a fresh projection sees the original value.
    let fields = edit_fields(&selection);
    save_fields(&mut store, &selection.path, &fields).unwrap();
    assert_eq!(reparse(&store.text), json!({"a": {"b": 1}}));
}

#[test]
fn test_stale_path_after_document_change() {
    // The document changed shape underneath a held selection.
    let selection_path = vec![Step::key("customer"), Step::index(0), Step::key("id")];
    let changed_doc = r#"{"clients": []}"#;
    let err = apply_edit(changed_doc, &selection_path, json!(1)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid path");
}

#[test]
fn test_deep_edit_preserves_everything_else() {
    let doc = r#"
    {
      "meta": {"version": 3},
      "items": [
        {"id": 1, "tags": ["a", "b"]},
        {"id": 2, "tags": ["c"]}
      ]
    }"#;
    let path = vec![
        Step::key("items"),
        Step::index(1),
        Step::key("tags"),
        Step::index(0),
    ];
    let out = apply_edit(doc, &path, json!("z")).unwrap();
    assert_eq!(
        reparse(&out),
        json!({
            "meta": {"version": 3},
            "items": [
                {"id": 1, "tags": ["a", "b"]},
                {"id": 2, "tags": ["z"]}
            ]
        })
    );
}

#[test]
fn test_sync_at_root_of_scalar_document() {
    // A whole-document scalar target is replaced by the field object.
    let out = sync_fields(
        "42",
        &[],
        &[EditableField::new("answer", "42", ValueKind::Number)],
    )
    .unwrap();
    assert_eq!(reparse(&out), json!({"answer": 42}));
}

#[test]
fn test_consecutive_edits_parse_fresh_each_time() {
    let mut store = MemoryStore {
        text: r#"{"n": 0}"#.to_string(),
        dirty: false,
    };
    for i in 1..=3 {
        let fields = vec![EditableField::new("n", i.to_string(), ValueKind::Number)];
        save_fields(&mut store, &[], &fields).unwrap();
    }
    assert_eq!(reparse(&store.text), json!({"n": 3}));
}
