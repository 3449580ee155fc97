//! Error types for the value crate.

use thiserror::Error;

/// Result type for value operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors that can occur while converting values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A document was expected but the input was another kind of value.
    #[error("expected an object, found {found}")]
    NotAnObject {
        /// Kind of value that was found instead.
        found: &'static str,
    },

    /// A number that cannot be represented as a field value.
    #[error("unsupported number: {number}")]
    UnsupportedNumber {
        /// Textual form of the rejected number.
        number: String,
    },
}

impl ValueError {
    /// Create a not-an-object error.
    pub fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }

    /// Create an unsupported number error.
    pub fn unsupported_number(number: impl Into<String>) -> Self {
        Self::UnsupportedNumber {
            number: number.into(),
        }
    }
}
