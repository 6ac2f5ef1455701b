//! Pure traversal over a parsed document.

use serde_json::Value;

use crate::{PathError, Step};

/// Resolve a path to the value it addresses inside `doc`.
///
/// The empty path resolves to `doc` itself.
///
/// # Errors
///
/// - [`PathError::NotFound`] - an object key along the path is absent
/// - [`PathError::IndexOutOfBounds`] - an array index is past the end
/// - [`PathError::StepMismatch`] - a key step met an array or vice versa
/// - [`PathError::NotAContainer`] - the path descends into a scalar
///
/// # Example
///
/// ```
/// use json_node_path::{resolve, Step};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// let val = resolve(&doc, &[Step::key("foo"), Step::key("bar")]).unwrap();
/// assert_eq!(val, &json!(42));
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &[Step]) -> Result<&'a Value, PathError> {
    let mut current = doc;
    for step in path {
        current = match (step, current) {
            (Step::Key(key), Value::Object(map)) => {
                map.get(key).ok_or(PathError::NotFound)?
            }
            (Step::Index(index), Value::Array(arr)) => {
                arr.get(*index).ok_or(PathError::IndexOutOfBounds)?
            }
            (_, Value::Object(_)) | (_, Value::Array(_)) => {
                return Err(PathError::StepMismatch)
            }
            _ => return Err(PathError::NotAContainer),
        };
    }
    Ok(current)
}

/// Resolve a path, returning `None` where [`resolve`] would error.
pub fn get<'a>(doc: &'a Value, path: &[Step]) -> Option<&'a Value> {
    resolve(doc, path).ok()
}
