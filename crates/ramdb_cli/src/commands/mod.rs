//! CLI command implementations.

pub mod demo;
pub mod find;
pub mod get;
pub mod seed;
pub mod stats;

use crate::error::CliResult;
use ramdb_core::Document;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One record per line.
    Text,
    /// A pretty-printed JSON document.
    Json,
}

/// Renders records, one compact JSON object per line in text mode.
pub fn render_records(records: &[Document], format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => records
            .iter()
            .map(|record| record.to_json().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
    })
}
