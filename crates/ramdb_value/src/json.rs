//! Conversion between values and `serde_json`.

use crate::document::Document;
use crate::error::{ValueError, ValueResult};
use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> ValueResult<Self> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n)?,
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<ValueResult<_>>()?,
            ),
            serde_json::Value::Object(map) => Value::Map(object_to_document(map)?),
        })
    }
}

fn number_to_value(n: &Number) -> ValueResult<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }
    // u64 values above i64::MAX would silently lose precision as floats
    if n.is_u64() {
        return Err(ValueError::unsupported_number(n.to_string()));
    }
    n.as_f64()
        .map(Value::Float)
        .ok_or_else(|| ValueError::unsupported_number(n.to_string()))
}

fn object_to_document(map: Map<String, serde_json::Value>) -> ValueResult<Document> {
    let mut doc = Document::with_capacity(map.len());
    for (k, v) in map {
        doc.set(k, Value::try_from(v)?);
    }
    Ok(doc)
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            // Non-finite floats have no JSON form
            Value::Float(f) => {
                Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Into::into).collect()),
            Value::Map(doc) => serde_json::Value::from(doc),
        }
    }
}

impl From<&Document> for serde_json::Value {
    fn from(doc: &Document) -> Self {
        serde_json::Value::Object(
            doc.iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                .collect(),
        )
    }
}

impl Document {
    /// Builds a document from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `NotAnObject` if `json` is not an object, or
    /// `UnsupportedNumber` for integers outside the i64 range.
    pub fn from_json(json: serde_json::Value) -> ValueResult<Self> {
        match json {
            serde_json::Value::Object(map) => object_to_document(map),
            other => Err(ValueError::not_an_object(json_kind(&other))),
        }
    }

    /// Converts this document to a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "text",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(json).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Document::from_json(json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_from_json_object() {
        let doc = Document::from_json(json!({ "name": "Stephen", "age": 16, "score": 1.5 }))
            .unwrap();

        assert_eq!(doc.get("name"), Some(&Value::from("Stephen")));
        assert_eq!(doc.get("age"), Some(&Value::Integer(16)));
        assert_eq!(doc.get("score"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn document_from_non_object_fails() {
        let err = Document::from_json(json!([1, 2])).unwrap_err();
        assert_eq!(err, ValueError::not_an_object("array"));
    }

    #[test]
    fn huge_unsigned_is_rejected() {
        let err = Value::try_from(json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, ValueError::UnsupportedNumber { .. }));
    }

    #[test]
    fn nested_values_convert_both_ways() {
        let original = json!({ "tags": ["a", "b"], "meta": { "ok": true, "n": null } });
        let doc = Document::from_json(original.clone()).unwrap();

        assert_eq!(
            doc.get("meta").and_then(|m| m.get("ok")),
            Some(&Value::Bool(true))
        );
        assert_eq!(doc.to_json(), original);
    }

    #[test]
    fn non_finite_float_serializes_as_null() {
        assert_eq!(
            serde_json::Value::from(&Value::Float(f64::INFINITY)),
            serde_json::Value::Null
        );
    }

    #[test]
    fn serde_through_value() {
        let value: Value = serde_json::from_str(r#"{"name":"Carl","age":22}"#).unwrap();
        assert_eq!(value.get("age"), Some(&Value::Integer(22)));
        assert_eq!(
            serde_json::to_string(&Value::from("x")).unwrap(),
            r#""x""#
        );
    }
}
