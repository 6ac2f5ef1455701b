//! Reconcile edited fields against the object at a path.

use json_node_path::{resolve, Step};
use serde_json::{Map, Value};

use crate::coerce::coerce;
use crate::edit::{apply_edit, replace_at, to_pretty};
use crate::types::{EditError, EditableField};

/// Write a set of edited fields back into the document at `path`,
/// returning the new pretty-printed document text.
///
/// When the target is an object, its own primitive-valued keys that are
/// absent from `fields` are deleted (a row removed in the UI becomes a
/// key deletion), every incoming key is set or overwritten, and keys
/// holding nested objects or arrays are never touched. When the target
/// is anything else, the whole location is replaced by an object built
/// from the fields.
///
/// Fields without a key (a freshly added row not yet named) are skipped.
/// Field text is coerced per its declared kind; text that does not fit
/// the kind is kept verbatim as a string rather than failing the save.
///
/// # Errors
///
/// Same conditions as [`apply_edit`]: [`EditError::Parse`] for malformed
/// document text, [`EditError::InvalidPath`] when an intermediate step
/// does not resolve.
pub fn sync_fields(
    document: &str,
    path: &[Step],
    fields: &[EditableField],
) -> Result<String, EditError> {
    let root: Value = serde_json::from_str(document)?;

    let mut incoming: Map<String, Value> = Map::new();
    for field in fields {
        let Some(key) = field.key.as_deref().filter(|k| !k.is_empty()) else {
            continue;
        };
        incoming.insert(key.to_string(), coerce(&field.value, field.kind).value);
    }

    let existing: Option<Map<String, Value>> = match locate(&root, path)? {
        Some(Value::Object(map)) => Some(map.clone()),
        _ => None,
    };
    let Some(existing) = existing else {
        // Scalar or array target: replace the whole location.
        return apply_edit(document, path, Value::Object(incoming));
    };

    let merged = merge_fields(&existing, incoming);
    let updated = replace_at(root, path, Value::Object(merged))?;
    Ok(to_pretty(&updated)?)
}

/// Walk to the value addressed by `path`.
///
/// Intermediate steps must resolve; a missing or out-of-range *final*
/// step yields `None` (the caller decides what that means).
fn locate<'a>(root: &'a Value, path: &[Step]) -> Result<Option<&'a Value>, EditError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(Some(root));
    };
    let container = resolve(root, parents).map_err(|_| EditError::InvalidPath)?;
    match (last, container) {
        (Step::Key(key), Value::Object(map)) => Ok(map.get(key)),
        (Step::Index(index), Value::Array(arr)) => Ok(arr.get(*index)),
        _ => Err(EditError::InvalidPath),
    }
}

/// Apply the deletion and upsert passes to an object's key set.
///
/// Original key order is kept for surviving keys; new keys append in
/// field order.
fn merge_fields(existing: &Map<String, Value>, incoming: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in existing {
        let nested = value.is_object() || value.is_array();
        if nested || incoming.contains_key(key) {
            out.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in incoming {
        out.insert(key, value);
    }
    out
}
