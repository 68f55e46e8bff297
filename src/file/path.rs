//! Separator-delimited path queries against the aggregated document.

use std::collections::BTreeMap;

use serde_json::Value;

/// Looks up `key` inside the `scope` slot of `document`.
///
/// An empty `scope` addresses the document root (the default translations).
/// The key is split on `separator`; each segment selects an object member or,
/// when the current value is an array, an element by index.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use locale_translator::file::path::lookup;
///
/// let document = json!({ "en": { "page": { "title": "Home" } }, "hello": "Hi" });
///
/// assert_eq!(lookup(&document, "en", "page.title", "."), Some(&json!("Home")));
/// assert_eq!(lookup(&document, "", "hello", "."), Some(&json!("Hi")));
/// assert_eq!(lookup(&document, "fr", "hello", "."), None);
/// ```
#[must_use]
pub fn lookup<'a>(
    document: &'a Value,
    scope: &str,
    key: &str,
    separator: &str,
) -> Option<&'a Value> {
    let start = if scope.is_empty() { document } else { step(document, scope)? };

    key.split(separator).try_fold(start, step)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// String form of a found value.
///
/// Strings are returned verbatim, `null` becomes an empty string, everything
/// else is rendered as compact JSON text.
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Flatten nested JSON into separator-joined keys that [`lookup`] accepts.
///
/// Array elements are addressed by index segments (`items.0`), so every key
/// returned here resolves to its value again.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use locale_translator::file::path::flatten_json;
///
/// let json = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".");
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    flatten_json_value(json, separator, None, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, String>,
) {
    let join = |segment: &str| {
        prefix.map_or_else(|| segment.to_string(), |p| format!("{p}{separator}{segment}"))
    };

    match json {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_json_value(value, separator, Some(&join(key)), result);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_json_value(value, separator, Some(&join(&index.to_string())), result);
            }
        }
        leaf => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), value_to_string(leaf));
            }
        }
    }
}
