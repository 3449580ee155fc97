//! Single-field lookups.

use ramdb_value::Value;
use serde::{Deserialize, Serialize};

/// Finds the first record of a collection whose field equals a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lookup {
    /// Collection to search.
    pub collection: String,
    /// Field to compare.
    pub field: String,
    /// Value the field must strictly equal.
    pub value: Value,
}

impl Lookup {
    /// Creates a lookup.
    pub fn new(
        collection: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}
