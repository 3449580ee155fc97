//! Test fixtures and database helpers.
//!
//! Provides the `people` seed set and convenience functions for setting up
//! test databases.

use ramdb_core::{Database, Document};

/// Collection name used by the people fixtures.
pub const PEOPLE: &str = "people";

/// The people seed set, in insertion order.
pub const PEOPLE_SEED: [(&str, i64); 5] = [
    ("Alex", 15),
    ("Stephen", 16),
    ("Stephen", 12),
    ("Stephen", 21),
    ("Carl", 22),
];

/// Builds a person record without an identifier.
pub fn person(name: &str, age: i64) -> Document {
    Document::new().with("name", name).with("age", age)
}

/// The people seed records, without identifiers.
pub fn people() -> Vec<Document> {
    PEOPLE_SEED
        .iter()
        .map(|&(name, age)| person(name, age))
        .collect()
}

/// Inserts the people seed set, returning the stored records.
pub fn seed_people(db: &Database) -> Vec<Document> {
    people()
        .into_iter()
        .map(|p| db.insert(PEOPLE, p).expect("Failed to insert person"))
        .collect()
}

/// Creates a database holding the people seed set.
pub fn people_database() -> Database {
    let db = Database::new();
    seed_people(&db);
    db
}

/// Runs a test with a fresh database seeded with people.
///
/// The closure also receives the stored records, so tests can compare
/// against them directly.
///
/// # Example
///
/// ```rust
/// use ramdb_testkit::with_people;
/// use ramdb_core::Query;
///
/// with_people(|db, people| {
///     let found = db.find(&Query::new("people").equal_to("name", "Alex"));
///     assert_eq!(found, vec![people[0].clone()]);
/// });
/// ```
pub fn with_people<F, R>(f: F) -> R
where
    F: FnOnce(&Database, &[Document]) -> R,
{
    let db = Database::new();
    let stored = seed_people(&db);
    f(&db, &stored)
}

/// Extracts `(name, age)` pairs, for compact assertions.
pub fn names_and_ages(records: &[Document]) -> Vec<(String, i64)> {
    records
        .iter()
        .map(|r| {
            (
                r.get("name")
                    .and_then(|v| v.as_text())
                    .unwrap_or_default()
                    .to_string(),
                r.get("age").and_then(|v| v.as_integer()).unwrap_or(-1),
            )
        })
        .collect()
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates a database with `record_count` records carrying an `index`
    /// field in a single collection named `test`.
    pub fn populated_database(record_count: usize) -> Database {
        let db = Database::new();

        for i in 0..record_count {
            let index = i64::try_from(i).expect("index fits in i64");
            db.insert("test", Document::new().with("index", index))
                .expect("Failed to insert record");
        }

        db
    }

    /// Creates a database with one record in each of `collection_count`
    /// collections.
    pub fn multi_collection_database(collection_count: usize) -> (Database, Vec<String>) {
        let db = Database::new();
        let mut names = Vec::with_capacity(collection_count);

        for i in 0..collection_count {
            let name = format!("collection_{}", i);
            db.insert(&name, Document::new().with("collection", name.as_str()))
                .expect("Failed to insert record");
            names.push(name);
        }

        (db, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_fixture_is_seeded_in_order() {
        let db = people_database();
        assert_eq!(db.len(PEOPLE), 5);
        assert_eq!(
            names_and_ages(&db.list(PEOPLE)),
            PEOPLE_SEED
                .iter()
                .map(|&(n, a)| (n.to_string(), a))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn with_people_passes_stored_records() {
        with_people(|db, people| {
            assert_eq!(people.len(), 5);
            assert_eq!(db.list(PEOPLE), people);
        });
    }

    #[test]
    fn populated_scenario() {
        let db = scenarios::populated_database(10);
        assert_eq!(db.len("test"), 10);
    }

    #[test]
    fn multi_collection_scenario() {
        let (db, names) = scenarios::multi_collection_database(3);
        assert_eq!(db.collection_names(), names);
    }
}
