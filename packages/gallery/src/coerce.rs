use serde_json::{Map, Value};
use tracing::debug;

use crate::input::GalleryInput;

/// Object keys that may carry an image reference, in lookup priority order.
pub const DEFAULT_SYNONYM_KEYS: [&str; 5] = ["url", "path", "src", "href", "image"];

/// Ordered candidate keys tried when an image reference is an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymKeys(Vec<String>);

impl SynonymKeys {
    /// The default keys followed by `extra`, skipping any already present.
    pub fn extended(extra: &[&str]) -> Self {
        let mut keys = Self::default();
        for key in extra {
            if !keys.0.iter().any(|k| k == key) {
                keys.0.push((*key).to_string());
            }
        }
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for SynonymKeys {
    fn default() -> Self {
        Self(DEFAULT_SYNONYM_KEYS.iter().map(|k| k.to_string()).collect())
    }
}

/// Pull a raw path out of a single array element or object.
///
/// Strings are returned as-is. For objects the first key holding a non-blank
/// string wins. Anything else yields `None`.
pub fn extract_reference(value: &Value, keys: &SynonymKeys) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => lookup(map, keys),
        _ => None,
    }
}

fn lookup(map: &Map<String, Value>, keys: &SynonymKeys) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Turn any gallery input into an ordered list of raw path strings.
///
/// Never fails: malformed input degrades to a literal path or is dropped.
pub fn coerce(input: &GalleryInput, keys: &SynonymKeys) -> Vec<String> {
    match input {
        GalleryInput::Empty => Vec::new(),
        GalleryInput::RawArray(items) => coerce_items(items, keys),
        GalleryInput::RawObject(map) => lookup(map, keys).into_iter().collect(),
        GalleryInput::RawString(raw) => coerce_text(raw, keys),
    }
}

/// [`coerce`] applied directly to a borrowed record field.
///
/// Same result as `coerce(&GalleryInput::from_value(value), keys)` without
/// copying the field first.
pub fn coerce_value(value: &Value, keys: &SynonymKeys) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(raw) => coerce_text(raw, keys),
        Value::Array(items) => coerce_items(items, keys),
        Value::Object(map) => lookup(map, keys).into_iter().collect(),
        other => {
            debug!(value = %other, "Ignoring non-gallery scalar");
            Vec::new()
        }
    }
}

fn coerce_text(raw: &str, keys: &SynonymKeys) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => coerce_items(&items, keys),
        Ok(_) => vec![trimmed.to_string()],
        Err(e) => {
            debug!(error = %e, "Gallery string is not JSON, using it as a path");
            vec![trimmed.to_string()]
        }
    }
}

fn coerce_items(items: &[Value], keys: &SynonymKeys) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| {
            let extracted = extract_reference(item, keys);
            if extracted.is_none() {
                debug!(element = %item, "Dropping gallery element without a path");
            }
            extracted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn coerce_default(value: Value) -> Vec<String> {
        coerce(&GalleryInput::from_value(&value), &SynonymKeys::default())
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(coerce_default(json!(null)).is_empty());
        assert!(coerce_default(json!("")).is_empty());
        assert!(coerce_default(json!([])).is_empty());
        assert!(coerce(&GalleryInput::RawString("   ".into()), &SynonymKeys::default()).is_empty());
    }

    #[test]
    fn arrays_mix_strings_and_objects() {
        let out = coerce_default(json!(["a.jpg", {"url": "b.jpg"}, {"src": "c.jpg"}]));
        assert_eq!(out, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn first_synonym_key_wins() {
        let out = coerce_default(json!([{"image": "late.jpg", "path": "early.jpg"}]));
        assert_eq!(out, vec!["early.jpg"]);
    }

    #[test]
    fn blank_synonym_value_falls_through_to_next_key() {
        let out = coerce_default(json!([{"url": "", "href": "h.jpg"}]));
        assert_eq!(out, vec!["h.jpg"]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!(coerce_default(json!([{"URL": "a.jpg"}])).is_empty());
    }

    #[test]
    fn unusable_elements_are_dropped() {
        let out = coerce_default(json!([
            "",
            42,
            null,
            true,
            ["nested.jpg"],
            {"caption": "no path"},
            {"url": 7},
            "kept.jpg"
        ]));
        assert_eq!(out, vec!["kept.jpg"]);
    }

    #[test]
    fn json_encoded_array_is_decoded() {
        let out = coerce_default(json!(r#"["a.jpg", {"path": "b.jpg"}]"#));
        assert_eq!(out, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn malformed_json_is_a_literal_path() {
        assert_eq!(coerce_default(json!("not json")), vec!["not json"]);
        assert_eq!(coerce_default(json!("  [broken  ")), vec!["[broken"]);
    }

    #[test]
    fn non_array_json_is_a_literal_path() {
        assert_eq!(
            coerce_default(json!(r#"{"url": "a.jpg"}"#)),
            vec![r#"{"url": "a.jpg"}"#]
        );
        assert_eq!(coerce_default(json!("123")), vec!["123"]);
    }

    #[test]
    fn decoded_strings_are_not_parsed_twice() {
        let out = coerce_default(json!(r#"["[\"x.jpg\"]"]"#));
        assert_eq!(out, vec![r#"["x.jpg"]"#]);
    }

    #[test]
    fn single_object_yields_at_most_one_path() {
        assert_eq!(coerce_default(json!({"href": "a.jpg"})), vec!["a.jpg"]);
        assert!(coerce_default(json!({"alt": "a.jpg"})).is_empty());
    }

    #[test]
    fn borrowed_coercion_matches_owned_input() {
        let keys = SynonymKeys::default();
        for value in [
            json!(null),
            json!("  "),
            json!(7),
            json!("a.jpg"),
            json!("not json"),
            json!(r#"["a.jpg", {"src": "b.jpg"}]"#),
            json!(["a.jpg", {"url": "b.jpg"}, 3]),
            json!({"href": "c.jpg"}),
        ] {
            assert_eq!(
                coerce_value(&value, &keys),
                coerce(&GalleryInput::from_value(&value), &keys)
            );
        }
    }

    #[test]
    fn extended_keys_are_tried_after_defaults() {
        let keys = SynonymKeys::extended(&["thumbnail", "url"]);
        assert_eq!(
            keys.iter().collect::<Vec<_>>(),
            vec!["url", "path", "src", "href", "image", "thumbnail"]
        );
        let input = GalleryInput::from_value(&json!([{"thumbnail": "t.jpg"}]));
        assert_eq!(coerce(&input, &keys), vec!["t.jpg"]);
        assert!(coerce(&input, &SynonymKeys::default()).is_empty());
    }
}
