//! Core logic for the command-line entry points.
//!
//! Provides the argument parsing and dispatch used by the binaries:
//! - `node-apply` - replace the value at a path in a document
//! - `node-sync`  - write edited fields back into the object at a path
//!
//! Paths are given as JSON arrays of keys and indices (`'["a",0,"b"]'`),
//! fields as JSON arrays of `{key, value, type}` objects.

use json_node_path::{Path, Step};
use serde_json::Value;
use thiserror::Error;

use crate::edit::apply_edit;
use crate::sync::sync_fields;
use crate::types::{EditError, EditableField, ValueKind};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Edit(#[from] EditError),
    #[error("Invalid path argument: {0}")]
    BadPath(String),
    #[error("Invalid field argument: {0}")]
    BadField(String),
}

/// Parse a path argument: a JSON array of strings and non-negative
/// integers.
pub fn parse_path_arg(arg: &str) -> Result<Path, CliError> {
    let items: Vec<Value> = serde_json::from_str(arg)?;
    items
        .into_iter()
        .map(|item| match item {
            Value::String(key) => Ok(Step::Key(key)),
            Value::Number(n) => n
                .as_u64()
                .map(|i| Step::Index(i as usize))
                .ok_or_else(|| CliError::BadPath(n.to_string())),
            other => Err(CliError::BadPath(other.to_string())),
        })
        .collect()
}

/// Parse a fields argument: a JSON array of `{key, value, type}`
/// objects. `key` may be null or absent for a not-yet-named row.
pub fn parse_fields_arg(arg: &str) -> Result<Vec<EditableField>, CliError> {
    let items: Vec<Value> = serde_json::from_str(arg)?;
    items
        .into_iter()
        .map(|item| {
            let Value::Object(map) = item else {
                return Err(CliError::BadField(item.to_string()));
            };
            let key = match map.get("key") {
                None | Some(Value::Null) => None,
                Some(Value::String(k)) => Some(k.clone()),
                Some(other) => return Err(CliError::BadField(other.to_string())),
            };
            let value = match map.get("value") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            let kind = map
                .get("type")
                .and_then(Value::as_str)
                .and_then(ValueKind::from_tag)
                .ok_or_else(|| CliError::BadField("missing or unknown type tag".to_string()))?;
            Ok(EditableField { key, value, kind })
        })
        .collect()
}

/// Replace the value at a path. Arguments are the raw argv strings.
pub fn run_apply(document: &str, path_arg: &str, value_arg: &str) -> Result<String, CliError> {
    let path = parse_path_arg(path_arg)?;
    let value: Value = serde_json::from_str(value_arg)?;
    Ok(apply_edit(document, &path, value)?)
}

/// Sync edited fields into the object at a path.
pub fn run_sync(document: &str, path_arg: &str, fields_arg: &str) -> Result<String, CliError> {
    let path = parse_path_arg(path_arg)?;
    let fields = parse_fields_arg(fields_arg)?;
    Ok(sync_fields(document, &path, &fields)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path_arg() {
        assert_eq!(parse_path_arg("[]").unwrap(), Vec::<Step>::new());
        assert_eq!(
            parse_path_arg(r#"["a", 0, "b"]"#).unwrap(),
            vec![Step::key("a"), Step::index(0), Step::key("b")]
        );
    }

    #[test]
    fn test_parse_path_arg_rejects_negative_index() {
        assert!(matches!(
            parse_path_arg("[-1]").unwrap_err(),
            CliError::BadPath(_)
        ));
    }

    #[test]
    fn test_parse_path_arg_rejects_bool() {
        assert!(matches!(
            parse_path_arg("[true]").unwrap_err(),
            CliError::BadPath(_)
        ));
    }

    #[test]
    fn test_parse_fields_arg() {
        let fields =
            parse_fields_arg(r#"[{"key": "b", "value": "99", "type": "number"}]"#).unwrap();
        assert_eq!(fields, vec![EditableField::new("b", "99", ValueKind::Number)]);
    }

    #[test]
    fn test_parse_fields_arg_null_key() {
        let fields = parse_fields_arg(r#"[{"key": null, "value": "x", "type": "string"}]"#).unwrap();
        assert_eq!(fields[0].key, None);
    }

    #[test]
    fn test_parse_fields_arg_unknown_type() {
        assert!(matches!(
            parse_fields_arg(r#"[{"key": "a", "value": "1", "type": "int"}]"#).unwrap_err(),
            CliError::BadField(_)
        ));
    }

    #[test]
    fn test_run_apply() {
        let out = run_apply(r#"{"a": {"b": 1}}"#, r#"["a", "b"]"#, "99").unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"a": {"b": 99}}));
    }

    #[test]
    fn test_run_sync() {
        let out = run_sync(
            r#"{"a": {"b": 1, "c": "drop"}}"#,
            r#"["a"]"#,
            r#"[{"key": "b", "value": "2", "type": "number"}]"#,
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_run_apply_edit_error_display() {
        let err = run_apply(r#"{"a": 1}"#, r#"["x", "y"]"#, "1").unwrap_err();
        assert_eq!(err.to_string(), "Invalid path");
    }
}
