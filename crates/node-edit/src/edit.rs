//! Path-addressed replacement inside a JSON document.

use json_node_path::Step;
use serde_json::Value;

use crate::types::EditError;

/// Replace the value at `path` inside `document`, returning the new
/// pretty-printed document text.
///
/// The empty path replaces the whole document. Everything not on the
/// path - sibling keys, array elements, their nested contents - carries
/// over verbatim (modulo re-serialization formatting).
///
/// # Errors
///
/// - [`EditError::Parse`] - `document` is not well-formed JSON
/// - [`EditError::InvalidPath`] - a step does not resolve: a missing
///   intermediate key, an index past the end, a step kind that does not
///   match the container, or a scalar in the middle of the path
///
/// A missing key at the *final* step is not an error: assignment
/// semantics apply and the key is created.
///
/// # Example
///
/// ```
/// use json_node_edit::{apply_edit, Step};
/// use serde_json::json;
///
/// let doc = r#"{"a": {"b": 1, "c": [1, 2]}}"#;
/// let out = apply_edit(doc, &[Step::key("a"), Step::key("b")], json!(99)).unwrap();
/// let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(parsed, json!({"a": {"b": 99, "c": [1, 2]}}));
/// ```
pub fn apply_edit(document: &str, path: &[Step], new_value: Value) -> Result<String, EditError> {
    let root: Value = serde_json::from_str(document)?;
    let updated = replace_at(root, path, new_value)?;
    Ok(to_pretty(&updated)?)
}

/// Pretty-print with the 2-space indent used throughout the crate.
pub(crate) fn to_pretty(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Rebuild `current` with the value at `path` replaced by `new_value`.
///
/// Consumes the tree and reassembles the spine along the path; siblings
/// are moved into the result, never copied.
pub(crate) fn replace_at(
    current: Value,
    path: &[Step],
    new_value: Value,
) -> Result<Value, EditError> {
    let Some((step, rest)) = path.split_first() else {
        return Ok(new_value);
    };
    match (step, current) {
        (Step::Key(key), Value::Object(mut map)) => {
            if rest.is_empty() {
                map.insert(key.clone(), new_value);
            } else {
                let slot = map.get_mut(key).ok_or(EditError::InvalidPath)?;
                *slot = replace_at(std::mem::take(slot), rest, new_value)?;
            }
            Ok(Value::Object(map))
        }
        (Step::Index(index), Value::Array(mut arr)) => {
            let slot = arr.get_mut(*index).ok_or(EditError::InvalidPath)?;
            *slot = replace_at(std::mem::take(slot), rest, new_value)?;
            Ok(Value::Array(arr))
        }
        _ => Err(EditError::InvalidPath),
    }
}
