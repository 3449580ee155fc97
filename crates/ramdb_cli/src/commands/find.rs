//! Find command implementation.

use super::{render_records, seed, OutputFormat};
use crate::error::CliResult;
use ramdb_core::Query;
use std::path::Path;

/// Parses a query tree from JSON.
pub fn parse_query(text: &str) -> CliResult<Query> {
    Ok(serde_json::from_str(text)?)
}

/// Runs the find command.
pub fn run(data: &Path, query: &Path, format: OutputFormat) -> CliResult<()> {
    let db = seed::load(data)?;
    let query = parse_query(&seed::read(query)?)?;

    tracing::debug!(%query, "running query");
    if query.collection().is_none() {
        tracing::info!("query has no leaf, so it targets no collection");
    }

    let records = db.find(&query);
    let rendered = render_records(&records, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use ramdb_core::Database;

    #[test]
    fn runs_a_json_query() {
        let db = Database::new();
        seed::apply(
            &db,
            r#"{"people": [
                {"name": "Alex", "age": 15},
                {"name": "Stephen", "age": 16},
                {"name": "Carl", "age": 22}
            ]}"#,
        )
        .unwrap();

        let query = parse_query(
            r#"{
                "kind": "composite",
                "combinator": "or",
                "children": [
                    {"kind": "leaf", "collection": "people",
                     "conditions": [{"field": "name", "op": "equal", "value": "Carl"}]},
                    {"kind": "leaf", "collection": "people",
                     "conditions": [{"field": "age", "op": "less_than", "value": 16}]}
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<_> = db
            .find(&query)
            .iter()
            .filter_map(|r| r.get("name").and_then(|v| v.as_text()).map(str::to_string))
            .collect();
        assert_eq!(names, vec!["Alex", "Carl"]);
    }

    #[test]
    fn rejects_unknown_operator() {
        let err = parse_query(
            r#"{"kind": "leaf", "collection": "people",
                "conditions": [{"field": "age", "op": "between", "value": 1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
