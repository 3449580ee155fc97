//! Field/value documents.

use crate::value::Value;

/// An ordered field/value mapping.
///
/// Field names are unique; setting an existing field replaces its value in
/// place. Iteration follows the order in which fields were first set.
/// Equality ignores field order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: Vec<(String, Value)>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns this document with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Looks up a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v)
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((field, value));
                None
            }
        }
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let pos = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(pos).1)
    }

    /// Checks whether a field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .fields
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.strict_eq(o)))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.set(k, v);
        }
        doc
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut doc = Document::new().with("name", "Alex").with("age", 15);
        let old = doc.set("name", "Carl");

        assert_eq!(old, Some(Value::from("Alex")));
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(doc.get("name"), Some(&Value::from("Carl")));
    }

    #[test]
    fn remove_field() {
        let mut doc = Document::new().with("a", 1).with("b", 2);
        assert_eq!(doc.remove("a"), Some(Value::Integer(1)));
        assert_eq!(doc.remove("a"), None);
        assert_eq!(doc.len(), 1);
        assert!(!doc.contains("a"));
    }

    #[test]
    fn equality_ignores_field_order() {
        let a = Document::new().with("name", "Alex").with("age", 15);
        let b = Document::new().with("age", 15).with("name", "Alex");
        let c = Document::new().with("age", 15);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn collect_from_pairs() {
        let doc: Document = vec![("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("x"), Some(&Value::Integer(3)));
    }
}
