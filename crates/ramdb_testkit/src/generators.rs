//! Property-based test generators using proptest.
//!
//! Field names and values are drawn from small pools so that generated
//! queries actually hit generated records.

use proptest::prelude::*;
use ramdb_core::{Condition, Document, Op, Query, Value};

/// Field names generated records and conditions draw from.
pub const FIELDS: [&str; 3] = ["name", "age", "score"];

/// Strategy for generating valid collection names.
pub fn collection_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,31}").expect("Invalid regex")
}

/// Strategy for picking one of [`FIELDS`].
pub fn field_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(FIELDS.to_vec()).prop_map(str::to_string)
}

/// Strategy for generating scalar field values, mixing kinds so that some
/// comparisons are incompatible.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (-5i64..30).prop_map(Value::Integer),
        1 => (-5.0f64..30.0).prop_map(Value::Float),
        3 => prop::sample::select(vec!["Alex", "Carl", "Stephen", "Zed"]).prop_map(Value::from),
        1 => any::<bool>().prop_map(Value::Bool),
        1 => Just(Value::Null),
    ]
}

/// Strategy for generating records without identifiers.
pub fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec((field_strategy(), value_strategy()), 0..4)
        .prop_map(|pairs| pairs.into_iter().collect::<Document>())
}

/// Strategy for generating comparison operators.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Equal), Just(Op::LessThan), Just(Op::GreaterThan)]
}

/// Strategy for generating conditions.
pub fn condition_strategy() -> impl Strategy<Value = Condition> {
    (field_strategy(), op_strategy(), value_strategy())
        .prop_map(|(field, op, value)| Condition::new(field, op, value))
}

/// Strategy for generating leaves bound to `collection`.
pub fn leaf_strategy(collection: &str) -> impl Strategy<Value = Query> {
    let collection = collection.to_string();
    prop::collection::vec(condition_strategy(), 0..3).prop_map(move |conditions| {
        conditions
            .into_iter()
            .fold(Query::new(collection.clone()), Query::with_condition)
    })
}

/// Strategy for generating predicate trees up to a few levels deep.
pub fn query_strategy(collection: &str) -> impl Strategy<Value = Query> {
    leaf_strategy(collection).prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Query::and),
            prop::collection::vec(inner, 0..4).prop_map(Query::or),
        ]
    })
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn collection_name_is_valid(name in collection_name_strategy()) {
            let first = name.chars().next();
            prop_assert!(first.map_or(false, |c| c.is_ascii_alphabetic()));
        }

        #[test]
        fn documents_use_known_fields(doc in document_strategy()) {
            for key in doc.keys() {
                prop_assert!(FIELDS.contains(&key));
            }
        }

        #[test]
        fn leaf_strategy_yields_leaves(query in leaf_strategy("people")) {
            prop_assert!(query.is_leaf());
            prop_assert!(query.children().is_empty());
        }

        #[test]
        fn queries_target_their_collection(query in query_strategy("people")) {
            let target = query.collection();
            prop_assert!(target.is_none() || target == Some("people"));
        }
    }
}
