//! Error types for RamDB core.

use crate::query::Op;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in RamDB core operations.
///
/// None of these abort a scan: absence is reported per lookup and invalid
/// conditions evaluate to "no match" during `find`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Value conversion error.
    #[error("value error: {0}")]
    Value(#[from] ramdb_value::ValueError),

    /// No record matched a field lookup.
    #[error("no record in {collection} with matching {field}")]
    NotFound {
        /// The collection searched.
        collection: String,
        /// The field that was compared.
        field: String,
    },

    /// Collection not found.
    #[error("collection not found: {name}")]
    CollectionNotFound {
        /// Name of the collection.
        name: String,
    },

    /// A condition compared values that have no common ordering.
    #[error("invalid condition on {field} ({op}): {message}")]
    InvalidCondition {
        /// Field named by the condition.
        field: String,
        /// Comparison operator.
        op: Op,
        /// Description of the mismatch.
        message: String,
    },

    /// A record cannot be stored as given.
    #[error("invalid record: {message}")]
    InvalidRecord {
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates a not found error.
    pub fn not_found(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            field: field.into(),
        }
    }

    /// Creates a collection not found error.
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Self::CollectionNotFound { name: name.into() }
    }

    /// Creates an invalid condition error.
    pub fn invalid_condition(field: impl Into<String>, op: Op, message: impl Into<String>) -> Self {
        Self::InvalidCondition {
            field: field.into(),
            op,
            message: message.into(),
        }
    }

    /// Creates an invalid record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Whether this error only reports that something was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::CollectionNotFound { .. }
        )
    }
}
