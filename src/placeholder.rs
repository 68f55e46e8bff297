//! `{name}` placeholder substitution.

use std::collections::HashMap;

/// Replace every `{name}` in `template` with `placeholders[name]`.
///
/// Replacement is literal: no escaping, and inserted text is never scanned
/// again, so a value containing `{other}` stays as written regardless of the
/// map's iteration order. Placeholders without an entry are left untouched.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use locale_translator::placeholder::substitute;
///
/// let placeholders = HashMap::from([("name".to_string(), "John".to_string())]);
/// assert_eq!(substitute("Hello {name}!", &placeholders), "Hello John!");
/// ```
#[must_use]
pub fn substitute(template: &str, placeholders: &HashMap<String, String>) -> String {
    if placeholders.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (before, from_open) = rest.split_at(open);
        result.push_str(before);

        let replacement = from_open
            .get(1..)
            .and_then(|after_open| after_open.find('}').map(|close| (after_open, close)))
            .and_then(|(after_open, close)| {
                let name = after_open.get(..close)?;
                placeholders.get(name).map(|value| (value, close))
            });

        match replacement {
            Some((value, close)) => {
                result.push_str(value);
                // "{" + name + "}"
                rest = from_open.get(close + 2..).unwrap_or_default();
            }
            None => {
                result.push('{');
                rest = from_open.get(1..).unwrap_or_default();
            }
        }
    }

    result.push_str(rest);
    result
}
