//! Get command implementation.

use super::{render_records, seed, OutputFormat};
use crate::error::CliResult;
use ramdb_core::{Database, Lookup, Value};
use std::path::Path;

/// Parses a lookup value given on the command line.
///
/// Valid JSON is taken as is; anything else is taken as text, so
/// `--value Stephen` works without quoting.
pub fn parse_value(raw: &str) -> CliResult<Value> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Ok(Value::try_from(json)?),
        Err(_) => Ok(Value::from(raw)),
    }
}

/// Looks up the first matching record.
pub fn lookup(db: &Database, collection: &str, key: &str, raw: &str) -> CliResult<Lookup> {
    let lookup = Lookup::new(collection, key, parse_value(raw)?);
    if !db.has_collection(collection) {
        tracing::info!(collection, "collection not present in seed file");
    }
    Ok(lookup)
}

/// Runs the get command.
pub fn run(
    data: &Path,
    collection: &str,
    key: &str,
    value: &str,
    format: OutputFormat,
) -> CliResult<()> {
    let db = seed::load(data)?;
    let lookup = lookup(&db, collection, key, value)?;

    let found: Vec<_> = db.get(&lookup).into_iter().collect();
    if found.is_empty() && format == OutputFormat::Text {
        println!("no record in {collection} with {key} = {}", lookup.value);
        return Ok(());
    }
    println!("{}", render_records(&found, format)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_values() {
        assert_eq!(parse_value("16").unwrap(), Value::Integer(16));
        assert_eq!(parse_value("\"16\"").unwrap(), Value::from("16"));
        assert_eq!(parse_value("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_value("null").unwrap(), Value::Null);
    }

    #[test]
    fn bare_words_are_text() {
        assert_eq!(parse_value("Stephen").unwrap(), Value::from("Stephen"));
    }

    #[test]
    fn lookup_finds_first_match() {
        let db = Database::new();
        seed::apply(
            &db,
            r#"{"people": [{"name": "Stephen", "age": 16}, {"name": "Stephen", "age": 12}]}"#,
        )
        .unwrap();

        let lookup = lookup(&db, "people", "name", "Stephen").unwrap();
        let found = db.get(&lookup).unwrap();
        assert_eq!(found.get("age"), Some(&Value::Integer(16)));
    }
}
