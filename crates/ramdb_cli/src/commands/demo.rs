//! Demo command implementation.

use super::{render_records, OutputFormat};
use crate::error::CliResult;
use ramdb_core::{Database, Document, Query};
use serde::Serialize;

const PEOPLE: &str = "people";

/// One example query with its results.
#[derive(Debug, Serialize)]
pub struct DemoResult {
    /// Query in display form.
    pub query: String,
    /// Matching records, in insertion order.
    pub records: Vec<Document>,
}

/// Seeds the people set into `db`.
pub fn seed(db: &Database) -> CliResult<()> {
    for (name, age) in [
        ("Alex", 15),
        ("Stephen", 16),
        ("Stephen", 12),
        ("Stephen", 21),
        ("Carl", 22),
    ] {
        db.insert(PEOPLE, Document::new().with("name", name).with("age", age))?;
    }
    Ok(())
}

/// The example queries.
pub fn queries() -> Vec<Query> {
    let stephen = || Query::new(PEOPLE).equal_to("name", "Stephen");
    let young = || {
        Query::and([
            Query::new(PEOPLE).less_than("age", 17),
            Query::new(PEOPLE).greater_than("age", 11),
        ])
    };

    vec![
        stephen(),
        Query::and([stephen(), young()]),
        Query::or([stephen(), young()]),
    ]
}

/// Runs every example query against a freshly seeded database.
pub fn results() -> CliResult<Vec<DemoResult>> {
    let db = Database::new();
    seed(&db)?;

    Ok(queries()
        .into_iter()
        .map(|query| DemoResult {
            records: db.find(&query),
            query: query.to_string(),
        })
        .collect())
}

/// Runs the demo command.
pub fn run(format: OutputFormat) -> CliResult<()> {
    let results = results()?;

    match format {
        OutputFormat::Text => {
            for result in &results {
                println!("{}", result.query);
                let records = render_records(&result.records, format)?;
                if !records.is_empty() {
                    println!("{records}");
                }
                println!();
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_and_ages(records: &[Document]) -> Vec<(&str, i64)> {
        records
            .iter()
            .map(|r| {
                (
                    r.get("name").and_then(|v| v.as_text()).unwrap(),
                    r.get("age").and_then(|v| v.as_integer()).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn example_queries_match_expected_people() {
        let results = results().unwrap();
        assert_eq!(results.len(), 3);

        assert_eq!(
            names_and_ages(&results[0].records),
            vec![("Stephen", 16), ("Stephen", 12), ("Stephen", 21)]
        );
        assert_eq!(
            names_and_ages(&results[1].records),
            vec![("Stephen", 16), ("Stephen", 12)]
        );
        assert_eq!(
            names_and_ages(&results[2].records),
            vec![("Alex", 15), ("Stephen", 16), ("Stephen", 12), ("Stephen", 21)]
        );
    }

    #[test]
    fn queries_display_their_structure() {
        let rendered: Vec<_> = queries().iter().map(ToString::to_string).collect();
        assert_eq!(rendered[0], "name = \"Stephen\"");
        assert_eq!(rendered[2], "(name = \"Stephen\" or (age < 17 and age > 11))");
    }
}
