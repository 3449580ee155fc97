//! Property tests for identifier assignment and predicate evaluation.

use proptest::prelude::*;
use ramdb_core::{Database, Document, Query, RecordId, Value};
use ramdb_testkit::{document_strategy, query_strategy, PropTestConfig};

const TARGET: &str = "people";

fn seeded(records: &[Document]) -> Database {
    let db = Database::new();
    for record in records {
        db.insert(TARGET, record.clone()).expect("generated records have no id");
    }
    db
}

fn ids(records: &[Document]) -> Vec<Value> {
    records
        .iter()
        .map(|r| r.get("id").cloned().unwrap_or(Value::Null))
        .collect()
}

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn find_equals_filtered_scan(
        records in prop::collection::vec(document_strategy(), 0..20),
        query in query_strategy(TARGET),
    ) {
        let db = seeded(&records);
        let expected: Vec<_> = if query.collection().is_some() {
            db.list(TARGET).into_iter().filter(|r| query.matches(r)).collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(db.find(&query), expected);
    }

    #[test]
    fn or_keeps_records_matching_either_side(
        records in prop::collection::vec(document_strategy(), 0..20),
        left in query_strategy(TARGET),
        right in query_strategy(TARGET),
    ) {
        let db = seeded(&records);
        let either = Query::or([left.clone(), right.clone()]);
        prop_assume!(either.collection().is_some());

        let found = ids(&db.find(&either));
        let expected = ids(
            &db.list(TARGET)
                .into_iter()
                .filter(|r| left.matches(r) || right.matches(r))
                .collect::<Vec<_>>(),
        );
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn and_is_associative(
        records in prop::collection::vec(document_strategy(), 0..20),
        a in query_strategy(TARGET),
        b in query_strategy(TARGET),
        c in query_strategy(TARGET),
    ) {
        let db = seeded(&records);
        let left = Query::and([Query::and([a.clone(), b.clone()]), c.clone()]);
        let right = Query::and([a, Query::and([b, c])]);
        prop_assert_eq!(ids(&db.find(&left)), ids(&db.find(&right)));
    }

    #[test]
    fn empty_leaf_matches_everything(records in prop::collection::vec(document_strategy(), 0..20)) {
        let db = seeded(&records);
        prop_assert_eq!(db.find(&Query::new(TARGET)), db.list(TARGET));
    }

    #[test]
    fn assigned_ids_strictly_increase(records in prop::collection::vec(document_strategy(), 1..30)) {
        let db = seeded(&records);
        let assigned: Vec<_> = db
            .list(TARGET)
            .iter()
            .filter_map(|r| r.get("id").and_then(RecordId::from_value))
            .collect();
        prop_assert_eq!(assigned.len(), records.len());
        prop_assert!(assigned.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(
            db.next_id(TARGET),
            Some(RecordId::new(records.len() as u64))
        );
    }

    #[test]
    fn ensure_collection_is_idempotent(
        records in prop::collection::vec(document_strategy(), 0..10),
        repeats in 1usize..4,
    ) {
        let db = seeded(&records);
        let before = db.list(TARGET);
        for _ in 0..repeats {
            db.ensure_collection(TARGET);
        }
        prop_assert_eq!(db.list(TARGET), before);
        prop_assert_eq!(db.collection_names(), vec![TARGET.to_string()]);
    }
}
