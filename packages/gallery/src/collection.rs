use std::collections::HashSet;

use serde::Serialize;

/// Ordered, duplicate-free list of canonical image URLs.
///
/// Order reflects source priority: the explicit gallery field first, then
/// legacy alias fields, then the legacy cover field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageCollection(Vec<String>);

impl ImageCollection {
    /// Build from resolved URLs, dropping empties and later duplicates.
    pub(crate) fn from_resolved<I>(urls: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let images = urls
            .into_iter()
            .filter(|url| !url.is_empty())
            .filter(|url| seen.insert(url.clone()))
            .collect();
        Self(images)
    }

    /// The cover image: the first entry, or an empty string.
    pub fn cover(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    /// Keep only the first `max` entries.
    pub fn truncated(mut self, max: usize) -> Self {
        self.0.truncate(max);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.0.iter().any(|u| u == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ImageCollection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(urls: &[&str]) -> ImageCollection {
        ImageCollection::from_resolved(urls.iter().map(|u| u.to_string()))
    }

    #[test]
    fn keeps_first_occurrence_and_drops_empties() {
        let c = collection(&["b", "", "a", "b", "c", "a"]);
        assert_eq!(c.as_slice(), ["b", "a", "c"]);
    }

    #[test]
    fn cover_is_first_entry_or_empty() {
        assert_eq!(collection(&["x", "y"]).cover(), "x");
        assert_eq!(ImageCollection::default().cover(), "");
    }

    #[test]
    fn truncated_keeps_prefix() {
        let c = collection(&["a", "b", "c"]).truncated(2);
        assert_eq!(c.into_vec(), vec!["a", "b"]);
        assert_eq!(collection(&["a"]).truncated(5).len(), 1);
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&collection(&["a", "b"])).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
