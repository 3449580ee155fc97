//! Error types for CLI commands.

use ramdb_core::CoreError;
use ramdb_value::ValueError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON, or did not have the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed file was valid JSON but not a seed set.
    #[error("invalid seed file: {message}")]
    InvalidSeed {
        /// What was wrong.
        message: String,
    },

    /// A JSON value has no record equivalent.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The engine rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid seed error.
    pub fn invalid_seed(message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            message: message.into(),
        }
    }
}
