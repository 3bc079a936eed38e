use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A field name that compares and hashes ignoring case.
///
/// The spelling it was created with is kept for display and serialization.
#[derive(Debug, Clone)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for FieldKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for FieldKey {}

impl Hash for FieldKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded() {
            c.hash(state);
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Client-facing validation errors: field name to display messages.
///
/// Lookups ignore case. Fields iterate and serialize in insertion order,
/// e.g. `{"Name": ["Required"], "Age": ["must be a number"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    fields: IndexMap<FieldKey, Vec<String>>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add messages for a field.
    ///
    /// A key that matches an existing field ignoring case extends that field's
    /// list and keeps its original spelling. Returns `true` when that happened.
    pub fn append(&mut self, key: &str, messages: Vec<String>) -> bool {
        match self.fields.get_mut(&FieldKey::new(key)) {
            Some(existing) => {
                existing.extend(messages);
                true
            }
            None => {
                self.fields.insert(FieldKey::new(key), messages);
                false
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(&FieldKey::new(key)).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(&FieldKey::new(key))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(FieldKey::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Number of messages across all fields
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn into_json(self) -> serde_json::Value {
        serde_json::Value::Object(
            self.into_iter()
                .map(|(key, messages)| (key, serde_json::Value::from(messages)))
                .collect(),
        )
    }
}

fn into_pair((key, messages): (FieldKey, Vec<String>)) -> (String, Vec<String>) {
    (key.into_string(), messages)
}

impl IntoIterator for ErrorReport {
    type Item = (String, Vec<String>);
    type IntoIter = std::iter::Map<
        indexmap::map::IntoIter<FieldKey, Vec<String>>,
        fn((FieldKey, Vec<String>)) -> (String, Vec<String>),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.fields
            .into_iter()
            .map(into_pair as fn((FieldKey, Vec<String>)) -> (String, Vec<String>))
    }
}

impl Serialize for ErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, messages) in self.iter() {
            map.serialize_entry(key, messages)?;
        }
        map.end()
    }
}

struct ErrorReportVisitor;

impl<'de> Visitor<'de> for ErrorReportVisitor {
    type Value = ErrorReport;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to lists of messages")
    }

    // Repeated keys, exact or case-variant, go through `append` in order.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut report = ErrorReport::new();
        while let Some((key, messages)) = access.next_entry::<String, Vec<String>>()? {
            report.append(&key, messages);
        }
        Ok(report)
    }
}

impl<'de> Deserialize<'de> for ErrorReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ErrorReportVisitor)
    }
}
