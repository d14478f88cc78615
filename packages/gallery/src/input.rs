use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

/// A raw gallery value exactly as found on a record field.
///
/// The persistence layer may hand over a native JSON array, TEXT holding
/// JSON, a single legacy path, or an object carrying the path under one of
/// several keys. Callers never need to know which.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryInput {
    #[default]
    Empty,
    /// A plain path or JSON-encoded array text.
    RawString(String),
    /// A sequence of strings and/or objects.
    RawArray(Vec<Value>),
    /// A single object carrying a synonym key.
    RawObject(Map<String, Value>),
}

impl GalleryInput {
    /// Classify a JSON value.
    ///
    /// Numbers and booleans are not gallery values; they are treated as empty.
    /// Arrays and objects are copied; use [`coerce_value`](crate::coerce::coerce_value)
    /// or `From<Value>` to avoid the copy.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) if s.trim().is_empty() => Self::Empty,
            Value::String(s) => Self::RawString(s.clone()),
            Value::Array(items) => Self::RawArray(items.clone()),
            Value::Object(map) => Self::RawObject(map.clone()),
            other => {
                debug!(value = %other, "Ignoring non-gallery scalar");
                Self::Empty
            }
        }
    }

    /// Read `key` from a record. Missing keys and non-object records are empty.
    pub fn from_field(record: &Value, key: &str) -> Self {
        record
            .get(key)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&Value> for GalleryInput {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Value> for GalleryInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::RawArray(items),
            Value::Object(map) => Self::RawObject(map),
            other => Self::from_value(&other),
        }
    }
}

impl From<&str> for GalleryInput {
    fn from(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Empty
        } else {
            Self::RawString(raw.to_string())
        }
    }
}

impl From<Vec<String>> for GalleryInput {
    fn from(paths: Vec<String>) -> Self {
        Self::RawArray(paths.into_iter().map(Value::String).collect())
    }
}

impl<'de> Deserialize<'de> for GalleryInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Value::deserialize(deserializer)?.into())
    }
}
