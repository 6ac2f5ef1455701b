//! Canonical read-only rendering of a node's rows.

use serde_json::{Map, Value};

use crate::types::Row;

/// Render a node's rows as a canonical JSON snippet for display.
///
/// - No rows: the empty object `{}`.
/// - A single bare scalar row: the value as standalone JSON (strings
///   quoted, numbers/booleans/null bare).
/// - Otherwise: a pretty-printed object of the keyed primitive rows.
///   Container rows hold summary placeholders, not data, so they are
///   left out rather than inlined.
///
/// Never fails: an unserializable value degrades to its plain-text form.
///
/// # Example
///
/// ```
/// use json_node_edit::{normalize, Row};
/// use serde_json::json;
///
/// assert_eq!(normalize(&[]), "{}");
/// assert_eq!(normalize(&[Row::scalar(json!(42))]), "42");
/// ```
pub fn normalize(rows: &[Row]) -> String {
    match rows {
        [] => "{}".to_string(),
        [Row::Scalar { value, .. }] => {
            serde_json::to_string(value).unwrap_or_else(|_| plain_text(value))
        }
        _ => {
            let mut map = Map::new();
            for row in rows {
                if let Row::Keyed { key, value, kind } = row {
                    if !kind.is_container() {
                        map.insert(key.clone(), value.clone());
                    }
                }
            }
            serde_json::to_string_pretty(&Value::Object(map))
                .unwrap_or_else(|_| "{}".to_string())
        }
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
