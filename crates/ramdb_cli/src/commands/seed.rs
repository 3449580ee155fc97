//! Seed file loading.
//!
//! A seed file is a JSON object mapping collection names to arrays of
//! records. Records are inserted in array order, so identifiers follow the
//! file. A record the store rejects is skipped; the rest still load.

use crate::error::{CliError, CliResult};
use ramdb_core::{Database, Document};
use std::path::Path;

/// Reads a file into a string.
pub fn read(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Loads a seed file into a fresh database.
pub fn load(path: &Path) -> CliResult<Database> {
    let text = read(path)?;
    let db = Database::new();
    let rejected = apply(&db, &text)?;
    if rejected > 0 {
        tracing::warn!(path = %path.display(), rejected, "some seed records were skipped");
    }
    tracing::debug!(path = %path.display(), collections = db.collection_names().len(), "loaded seed file");
    Ok(db)
}

/// Inserts every collection of a seed document into `db`.
///
/// Returns how many records were rejected. A seed that is not shaped as
/// collections of objects fails as a whole.
pub fn apply(db: &Database, text: &str) -> CliResult<usize> {
    let serde_json::Value::Object(collections) = serde_json::from_str::<serde_json::Value>(text)? else {
        return Err(CliError::invalid_seed(
            "top level must be an object of collection name to records",
        ));
    };

    let mut rejected = 0;
    for (name, records) in collections {
        let serde_json::Value::Array(records) = records else {
            return Err(CliError::invalid_seed(format!(
                "collection {name} must be an array of records"
            )));
        };

        let records = records
            .into_iter()
            .map(Document::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        db.ensure_collection(&name);
        rejected += db
            .insert_many(&name, records)
            .iter()
            .filter(|result| result.is_err())
            .count();
    }

    Ok(rejected)
}
