//! Best-effort coercion of edited text back into typed JSON values.

use serde_json::{Number, Value};

use crate::types::ValueKind;

/// Outcome of coercing a field's text to its declared kind.
///
/// Coercion never fails: text that does not fit the declared kind is kept
/// verbatim as a string, and `used_fallback` records that it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub value: Value,
    pub used_fallback: bool,
}

impl Coerced {
    fn typed(value: Value) -> Self {
        Coerced {
            value,
            used_fallback: false,
        }
    }

    fn fallback(text: &str) -> Self {
        Coerced {
            value: Value::String(text.to_string()),
            used_fallback: true,
        }
    }
}

/// Coerce `text` according to the field's declared kind.
///
/// - `Number`: numeric parse, integers kept exact.
/// - `Boolean`: case-insensitive `true`/`false`.
/// - `Null`: null regardless of the text.
/// - Anything else: the text itself.
pub fn coerce(text: &str, kind: ValueKind) -> Coerced {
    match kind {
        ValueKind::Number => match parse_number(text) {
            Some(n) => Coerced::typed(Value::Number(n)),
            None => Coerced::fallback(text),
        },
        ValueKind::Boolean => match text.to_ascii_lowercase().as_str() {
            "true" => Coerced::typed(Value::Bool(true)),
            "false" => Coerced::typed(Value::Bool(false)),
            _ => Coerced::fallback(text),
        },
        ValueKind::Null => Coerced::typed(Value::Null),
        _ => Coerced::typed(Value::String(text.to_string())),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(i) = text.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Some(Number::from(u));
    }
    // from_f64 rejects NaN and infinities, which fall back to text.
    text.parse::<f64>().ok().and_then(Number::from_f64)
}
