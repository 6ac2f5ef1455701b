//! Core types for node inspection and editing.

use serde_json::Value;
use thiserror::Error;

/// Type tag of a field value, as shown in the inspector table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl ValueKind {
    /// Whether this kind is a nested container rather than a primitive.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }

    /// The kind of a parsed JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Parse the lowercase tag used on the wire and in the UI.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(ValueKind::String),
            "number" => Some(ValueKind::Number),
            "boolean" => Some(ValueKind::Boolean),
            "null" => Some(ValueKind::Null),
            "array" => Some(ValueKind::Array),
            "object" => Some(ValueKind::Object),
            _ => None,
        }
    }

    /// The lowercase tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

/// One displayable field of a selected node.
///
/// A node is either a bag of keyed fields (where nested containers appear
/// as summary rows) or a single bare scalar. The two shapes are separate
/// variants, so a bare scalar can never carry a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// A keyed property of an object node.
    Keyed {
        key: String,
        value: Value,
        kind: ValueKind,
    },
    /// The node itself is a primitive value.
    Scalar { value: Value, kind: ValueKind },
}

impl Row {
    /// A keyed row whose kind is derived from the value.
    pub fn keyed(key: impl Into<String>, value: Value) -> Self {
        let kind = ValueKind::of(&value);
        Row::Keyed {
            key: key.into(),
            value,
            kind,
        }
    }

    /// A bare scalar row whose kind is derived from the value.
    pub fn scalar(value: Value) -> Self {
        let kind = ValueKind::of(&value);
        Row::Scalar { value, kind }
    }

    /// A keyed row summarizing a nested container.
    ///
    /// `value` is the placeholder text shown in the table, not the
    /// container's contents; `kind` must be `Array` or `Object`.
    pub fn summary(key: impl Into<String>, placeholder: impl Into<String>, kind: ValueKind) -> Self {
        Row::Keyed {
            key: key.into(),
            value: Value::String(placeholder.into()),
            kind,
        }
    }

    /// The row's type tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Row::Keyed { kind, .. } | Row::Scalar { kind, .. } => *kind,
        }
    }
}

/// The edit-mode projection of a row.
///
/// `value` stays text for the whole lifetime of the edit; it is coerced
/// back to a typed value only on save.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableField {
    /// Target key; `None` for a newly added row not yet named.
    pub key: Option<String>,
    pub value: String,
    pub kind: ValueKind,
}

impl EditableField {
    pub fn new(key: impl Into<String>, value: impl Into<String>, kind: ValueKind) -> Self {
        EditableField {
            key: Some(key.into()),
            value: value.into(),
            kind,
        }
    }
}

/// Failure of a document mutation.
#[derive(Debug, Error)]
pub enum EditError {
    /// The document text is not well-formed JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    /// A path step does not resolve in the current document.
    #[error("Invalid path")]
    InvalidPath,
}
