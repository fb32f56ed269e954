//! Mapping literal rendering for `{name, value}` pair lists

use serde_json::{Map, Value as JsonValue};

use crate::har::NameValue;

/// Render name/value pairs as a mapping literal such as `{"A": "1", "B": "2"}`.
///
/// Pairs keep their input order. A repeated name keeps the position of its
/// first occurrence and the value of its last. Values are written as Python
/// literals, so a recorded `null` becomes `None` and booleans `True`/`False`.
pub fn to_mapping_literal(pairs: &[NameValue]) -> String {
    let mut map = Map::new();
    for pair in pairs {
        map.insert(pair.name.clone(), pair.value.clone());
    }

    let body = map
        .iter()
        .map(|(name, value)| format!("{}: {}", quote(name), python_literal(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// Python source literal for a JSON value.
pub fn python_literal(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "None".to_string(),
        JsonValue::Bool(true) => "True".to_string(),
        JsonValue::Bool(false) => "False".to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => quote(s),
        JsonValue::Array(items) => {
            let items: Vec<_> = items.iter().map(python_literal).collect();
            format!("[{}]", items.join(", "))
        }
        JsonValue::Object(map) => {
            let fields: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), python_literal(v)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
    }
}

// JSON string escaping is also a valid Python string literal.
fn quote(s: &str) -> String {
    JsonValue::String(s.to_string()).to_string()
}

/// Like [`to_mapping_literal`], rendering an absent list as `{}`.
pub fn optional_mapping_literal(pairs: Option<&[NameValue]>) -> String {
    pairs.map(to_mapping_literal).unwrap_or_else(|| "{}".to_string())
}
