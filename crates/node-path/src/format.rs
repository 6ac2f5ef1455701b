//! Query-path rendering.

use crate::Step;

/// Render a path as a `$`-rooted query string.
///
/// The root alone is `$`. Each step adds one bracket group: indices are
/// bare digits, keys are quoted (and escaped) JSON strings.
///
/// # Example
///
/// ```
/// use json_node_path::{format_query, Step};
///
/// assert_eq!(format_query(&[]), "$");
/// assert_eq!(
///     format_query(&[Step::key("a"), Step::index(0), Step::key("b")]),
///     r#"$["a"][0]["b"]"#
/// );
/// ```
pub fn format_query(path: &[Step]) -> String {
    if path.is_empty() {
        return "$".to_string();
    }
    let mut out = String::with_capacity(path.len() * 8 + 1);
    out.push('$');
    for step in path {
        out.push('[');
        match step {
            Step::Index(index) => out.push_str(&index.to_string()),
            Step::Key(key) => out.push_str(&quote_key(key)),
        }
        out.push(']');
    }
    out
}

/// Quote a key as a JSON string literal.
fn quote_key(key: &str) -> String {
    serde_json::to_string(key).unwrap_or_else(|_| format!("\"{key}\""))
}
