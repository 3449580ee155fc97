//! Stats command implementation.

use super::{seed, OutputFormat};
use crate::error::CliResult;
use ramdb_core::{Database, StatsSnapshot};
use serde::Serialize;
use std::path::Path;

/// Size of one collection.
#[derive(Debug, Serialize)]
pub struct CollectionStats {
    /// Collection name.
    pub name: String,
    /// Number of records.
    pub records: usize,
    /// Identifier the next assigning insert would use.
    pub next_id: u64,
}

/// Stats command result.
#[derive(Debug, Serialize)]
pub struct StatsResult {
    /// Seed file path.
    pub path: String,
    /// Per-collection sizes, sorted by name.
    pub collections: Vec<CollectionStats>,
    /// Operation counters accumulated while loading.
    pub operations: StatsSnapshot,
}

/// Collects stats for a loaded database.
pub fn collect(path: &Path, db: &Database) -> StatsResult {
    let collections = db
        .collection_names()
        .into_iter()
        .map(|name| CollectionStats {
            records: db.len(&name),
            next_id: db.next_id(&name).map_or(0, |id| id.as_u64()),
            name,
        })
        .collect();

    StatsResult {
        path: path.display().to_string(),
        collections,
        operations: db.stats(),
    }
}

/// Runs the stats command.
pub fn run(data: &Path, format: OutputFormat) -> CliResult<()> {
    let db = seed::load(data)?;
    let result = collect(data, &db);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            println!("Seed file: {}", result.path);
            println!("Collections: {}", result.collections.len());
            for c in &result.collections {
                println!("  {}: {} records (next id {})", c.name, c.records, c.next_id);
            }
            println!("Inserts: {}", result.operations.inserts);
            println!("Collections created: {}", result.operations.collections_created);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_sizes_per_collection() {
        let db = Database::new();
        seed::apply(
            &db,
            r#"{"people": [{"name": "Alex"}, {"name": "Carl"}], "pets": [{"id": 4}]}"#,
        )
        .unwrap();

        let result = collect(Path::new("seed.json"), &db);
        let sizes: Vec<_> = result
            .collections
            .iter()
            .map(|c| (c.name.as_str(), c.records, c.next_id))
            .collect();
        assert_eq!(sizes, vec![("people", 2, 2), ("pets", 1, 5)]);
        assert_eq!(result.operations.inserts, 3);
        assert_eq!(result.operations.collections_created, 2);
    }
}
