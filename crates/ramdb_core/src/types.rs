//! Core type definitions for RamDB.

use ramdb_value::Value;
use std::fmt;

/// Identifier of a record within its collection.
///
/// Assigned identifiers start at zero and increase by one per insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Creates a new record ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next record ID.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Reads an identifier out of a field value.
    ///
    /// Only non-negative integers (or floats holding one exactly) qualify.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => u64::try_from(*n).ok().map(Self),
            Value::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f < i64::MAX as f64 => {
                Some(Self(*f as u64))
            }
            _ => None,
        }
    }

    /// Converts to a field value.
    ///
    /// `None` past `i64::MAX`, which no field value can hold.
    #[must_use]
    pub fn to_value(self) -> Option<Value> {
        i64::try_from(self.0).ok().map(Value::Integer)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
