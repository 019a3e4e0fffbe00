//! Case-normalized header mapping
//!
//! Header keys fold to lowercase on every insert and lookup, so `Title`,
//! `TITLE` and `title` all address the same entry. Values stay free-form
//! strings; list-like keys (tags, authors) hold a single joined string.

use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from lowercase header key to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderMap {
    entries: BTreeMap<String, String>,
}

impl HeaderMap {
    /// Create a new empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the same key
    ///
    /// Returns the previous value if one existed.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(normalize(key.as_ref()), value.into())
    }

    /// Look up a value by key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize(key)).map(String::as_str)
    }

    /// Remove a key (case-insensitive), returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&normalize(key))
    }

    /// Check whether a key is present (case-insensitive)
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize(key))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_normalize_to_lowercase() {
        let mut headers = HeaderMap::new();
        headers.insert("Title", "Sample title");

        assert_eq!(headers.get("title"), Some("Sample title"));
        assert_eq!(headers.get("TITLE"), Some("Sample title"));
        assert!(headers.contains_key("Title"));
        assert_eq!(headers.keys().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn test_last_insert_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("slug", "first");
        let previous = headers.insert("Slug", "second");

        assert_eq!(previous.as_deref(), Some("first"));
        assert_eq!(headers.get("slug"), Some("second"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let headers: HeaderMap =
            [("Title", "Sample"), ("Tags", "one, two")].into_iter().collect();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("tags"), Some("one, two"));
    }

    #[test]
    fn test_remove() {
        let mut headers = HeaderMap::new();
        headers.insert("category", "Test");

        assert_eq!(headers.remove("Category").as_deref(), Some("Test"));
        assert!(headers.is_empty());
        assert_eq!(headers.remove("category"), None);
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let mut headers = HeaderMap::new();
        headers.insert("title", "Sample");

        let yaml = serde_yaml::to_string(&headers).unwrap();
        assert_eq!(yaml, "title: Sample\n");
    }
}
