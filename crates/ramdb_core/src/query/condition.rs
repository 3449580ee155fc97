//! Single-field conditions.

use crate::error::{CoreError, CoreResult};
use ramdb_value::{Document, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Strict equality.
    Equal,
    /// Field value orders before the reference value.
    LessThan,
    /// Field value orders after the reference value.
    GreaterThan,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Equal => "=",
            Op::LessThan => "<",
            Op::GreaterThan => ">",
        })
    }
}

/// A `(field, op, value)` triple tested against one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Field to read from the record.
    pub field: String,
    /// Comparison operator.
    pub op: Op,
    /// Reference value.
    pub value: Value,
}

impl Condition {
    /// Creates a condition.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Tests the condition against a record.
    ///
    /// A record without the field does not match.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCondition` when a relational operator is applied to
    /// values with no common ordering. Equality never fails: mismatched
    /// kinds are simply unequal.
    pub fn evaluate(&self, record: &Document) -> CoreResult<bool> {
        let Some(actual) = record.get(&self.field) else {
            return Ok(false);
        };

        let wanted = match self.op {
            Op::Equal => return Ok(actual.strict_eq(&self.value)),
            Op::LessThan => Ordering::Less,
            Op::GreaterThan => Ordering::Greater,
        };

        match actual.compare(&self.value) {
            Some(ord) => Ok(ord == wanted),
            None => Err(CoreError::invalid_condition(
                self.field.clone(),
                self.op,
                format!("cannot order {} against {}", actual.kind(), self.value.kind()),
            )),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}
