//! Insertion-ordered unit metadata

use indexmap::IndexMap;
use serde::Serialize;

/// A primitive metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl MetaValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetaValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<usize> for MetaValue {
    fn from(value: usize) -> Self {
        MetaValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

/// Metadata keys used by the segmenter.
pub mod keys {
    pub const POSITION: &str = "position";
    pub const LENGTH: &str = "length";
    pub const LEMMA: &str = "lemma";
    pub const POS: &str = "pos";
    pub const TITLE: &str = "title";
}

/// String keys mapped to primitive values, iterated in insertion order.
///
/// Equality is order-sensitive so that two serializations of equal metadata
/// are byte-identical.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, MetaValue>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<MetaValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<MetaValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn position(&self) -> Option<usize> {
        self.get(keys::POSITION)
            .and_then(MetaValue::as_int)
            .and_then(|value| usize::try_from(value).ok())
    }

    pub fn length(&self) -> Option<usize> {
        self.get(keys::LENGTH)
            .and_then(MetaValue::as_int)
            .and_then(|value| usize::try_from(value).ok())
    }
}

impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Metadata {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let metadata = Metadata::new().with("position", 2usize).with("length", 8usize);
        let keys: Vec<_> = metadata.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["position", "length"]);
        assert_eq!(metadata.position(), Some(2));
        assert_eq!(metadata.length(), Some(8));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Metadata::new().with("position", 0usize).with("length", 3usize);
        let b = Metadata::new().with("length", 3usize).with("position", 0usize);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_json_shape() {
        let metadata = Metadata::new()
            .with("position", 1usize)
            .with("lemma", "voir")
            .with("proper", false);
        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"position":1,"lemma":"voir","proper":false}"#);
    }
}
