//! Inspect and edit a single node of a larger JSON document.
//!
//! The selected node arrives as a list of [`Row`]s plus a [`Path`] into
//! the document. [`normalize`] and [`format_query`] render the read-only
//! views; [`apply_edit`] and [`sync_fields`] compute a new document text
//! when the user saves. The document itself is opaque text owned by an
//! external store - every operation parses a fresh snapshot and hands
//! back a new string, so there is no cached tree to go stale.
//!
//! # Example
//!
//! ```
//! use json_node_edit::{sync_fields, EditableField, Step, ValueKind};
//! use serde_json::json;
//!
//! let doc = r#"{"a": {"b": 1, "c": "keep", "d": {"e": 1}}}"#;
//! let fields = vec![EditableField::new("b", "99", ValueKind::Number)];
//! let out = sync_fields(doc, &[Step::key("a")], &fields).unwrap();
//!
//! let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
//! // Primitive "c" was deleted (no field for it); nested "d" survives.
//! assert_eq!(parsed, json!({"a": {"b": 99, "d": {"e": 1}}}));
//! ```

mod types;
pub use types::{EditError, EditableField, Row, ValueKind};

mod normalize;
pub use normalize::normalize;

mod coerce;
pub use coerce::{coerce, Coerced};

mod edit;
pub use edit::apply_edit;

mod sync;
pub use sync::sync_fields;

pub mod session;
pub use session::{edit_fields, save_fields, save_value, DocumentStore, NodeSelection};

pub mod cli;

pub use json_node_path::{format_query, Path, Step};
