//! Composable predicate trees.

use crate::error::CoreError;
use crate::query::condition::{Condition, Op};
use ramdb_value::{Document, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean combinator of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// Every child must match. Empty is true.
    And,
    /// At least one child must match. Empty is false.
    Or,
}

/// A predicate over records of one collection.
///
/// A `Leaf` holds conditions that must all hold; a `Composite` combines
/// child trees with AND or OR. Builders consume `self` and return the
/// extended tree, so a tree handed to one query cannot be changed by
/// building another.
///
/// ```
/// use ramdb_core::Query;
///
/// let teen_stephens = Query::and([
///     Query::new("people").equal_to("name", "Stephen"),
///     Query::new("people").less_than("age", 20).greater_than("age", 12),
/// ]);
/// assert_eq!(teen_stephens.collection(), Some("people"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Implicitly conjoined conditions, bound to a target collection.
    Leaf {
        /// Collection the query runs against.
        collection: String,
        /// Conditions, all of which must hold.
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    /// Child trees under a combinator.
    Composite {
        /// How child results combine.
        combinator: Combinator,
        /// Children, evaluated in order.
        #[serde(default)]
        children: Vec<Query>,
    },
}

impl Query {
    /// Creates an empty leaf bound to `collection`. It matches every record.
    pub fn new(collection: impl Into<String>) -> Self {
        Query::Leaf {
            collection: collection.into(),
            conditions: Vec::new(),
        }
    }

    /// Combines trees so that all must match.
    pub fn and(children: impl IntoIterator<Item = Query>) -> Self {
        Query::Composite {
            combinator: Combinator::And,
            children: children.into_iter().collect(),
        }
    }

    /// Combines trees so that at least one must match.
    pub fn or(children: impl IntoIterator<Item = Query>) -> Self {
        Query::Composite {
            combinator: Combinator::Or,
            children: children.into_iter().collect(),
        }
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn equal_to(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_condition(Condition::new(field, Op::Equal, value))
    }

    /// Adds a less-than condition.
    #[must_use]
    pub fn less_than(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_condition(Condition::new(field, Op::LessThan, value))
    }

    /// Adds a greater-than condition.
    #[must_use]
    pub fn greater_than(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_condition(Condition::new(field, Op::GreaterThan, value))
    }

    /// Conjoins a condition with this tree.
    ///
    /// On a leaf the condition is appended. On a composite the condition is
    /// conjoined with the whole tree: an AND gains a new leaf child, an OR
    /// is wrapped in a new AND.
    #[must_use]
    pub fn with_condition(self, condition: Condition) -> Self {
        match self {
            Query::Leaf {
                collection,
                mut conditions,
            } => {
                conditions.push(condition);
                Query::Leaf {
                    collection,
                    conditions,
                }
            }
            composite => {
                let leaf = Query::Leaf {
                    collection: composite.collection().unwrap_or_default().to_string(),
                    conditions: vec![condition],
                };
                match composite {
                    Query::Composite {
                        combinator: Combinator::And,
                        mut children,
                    } => {
                        children.push(leaf);
                        Query::and(children)
                    }
                    other => Query::and([other, leaf]),
                }
            }
        }
    }

    /// Target collection: the leaf's own, or the first leaf's found
    /// depth-first. `None` for a tree without leaves.
    pub fn collection(&self) -> Option<&str> {
        match self {
            Query::Leaf { collection, .. } => Some(collection),
            Query::Composite { children, .. } => children.iter().find_map(Query::collection),
        }
    }

    /// Conditions of a leaf; empty for a composite.
    pub fn conditions(&self) -> &[Condition] {
        match self {
            Query::Leaf { conditions, .. } => conditions,
            Query::Composite { .. } => &[],
        }
    }

    /// Children of a composite; empty for a leaf.
    pub fn children(&self) -> &[Query] {
        match self {
            Query::Leaf { .. } => &[],
            Query::Composite { children, .. } => children,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Query::Leaf { .. })
    }

    /// Evaluates the tree against a record.
    ///
    /// Conditions that cannot be evaluated count as not matching.
    pub fn matches(&self, record: &Document) -> bool {
        self.matches_with(record, &mut |_| {})
    }

    /// Evaluates the tree, reporting each condition that could not be
    /// evaluated to `on_invalid` before treating it as not matching.
    ///
    /// Children are evaluated in order; AND stops at the first false child
    /// and OR at the first true one.
    pub fn matches_with<F>(&self, record: &Document, on_invalid: &mut F) -> bool
    where
        F: FnMut(&CoreError),
    {
        match self {
            Query::Leaf { conditions, .. } => {
                conditions
                    .iter()
                    .all(|condition| match condition.evaluate(record) {
                        Ok(matched) => matched,
                        Err(err) => {
                            on_invalid(&err);
                            false
                        }
                    })
            }
            Query::Composite {
                combinator: Combinator::And,
                children,
            } => children
                .iter()
                .all(|child| child.matches_with(record, on_invalid)),
            Query::Composite {
                combinator: Combinator::Or,
                children,
            } => children
                .iter()
                .any(|child| child.matches_with(record, on_invalid)),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Leaf { conditions, .. } if conditions.is_empty() => f.write_str("true"),
            Query::Leaf { conditions, .. } => {
                for (i, condition) in conditions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "{condition}")?;
                }
                Ok(())
            }
            Query::Composite {
                combinator,
                children,
            } if children.is_empty() => {
                f.write_str(if *combinator == Combinator::And {
                    "true"
                } else {
                    "false"
                })
            }
            Query::Composite {
                combinator,
                children,
            } => {
                let sep = match combinator {
                    Combinator::And => " and ",
                    Combinator::Or => " or ",
                };
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(sep)?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, age: i64) -> Document {
        Document::new().with("name", name).with("age", age)
    }

    #[test]
    fn empty_leaf_matches_everything() {
        assert!(Query::new("people").matches(&person("Alex", 15)));
        assert!(Query::new("people").matches(&Document::new()));
    }

    #[test]
    fn leaf_conditions_conjoin() {
        let q = Query::new("people")
            .equal_to("name", "Stephen")
            .less_than("age", 17);

        assert!(q.matches(&person("Stephen", 16)));
        assert!(!q.matches(&person("Stephen", 21)));
        assert!(!q.matches(&person("Alex", 15)));
        assert_eq!(q.conditions().len(), 2);
    }

    #[test]
    fn vacuous_composites() {
        let record = person("Alex", 15);
        assert!(Query::and([]).matches(&record));
        assert!(!Query::or([]).matches(&record));
    }

    #[test]
    fn or_matches_any_child() {
        let q = Query::or([
            Query::new("people").equal_to("name", "Carl"),
            Query::new("people").less_than("age", 13),
        ]);

        assert!(q.matches(&person("Carl", 22)));
        assert!(q.matches(&person("Stephen", 12)));
        assert!(!q.matches(&person("Alex", 15)));
    }

    #[test]
    fn nested_composites() {
        let q = Query::and([
            Query::new("people").equal_to("name", "Stephen"),
            Query::or([
                Query::new("people").less_than("age", 13),
                Query::new("people").greater_than("age", 20),
            ]),
        ]);

        assert!(q.matches(&person("Stephen", 12)));
        assert!(q.matches(&person("Stephen", 21)));
        assert!(!q.matches(&person("Stephen", 16)));
        assert!(!q.matches(&person("Carl", 22)));
    }

    #[test]
    fn and_is_associative() {
        let a = || Query::new("people").equal_to("name", "Stephen");
        let b = || Query::new("people").greater_than("age", 11);
        let c = || Query::new("people").less_than("age", 17);

        let left = Query::and([Query::and([a(), b()]), c()]);
        let right = Query::and([a(), Query::and([b(), c()])]);

        for record in [
            person("Stephen", 16),
            person("Stephen", 21),
            person("Alex", 15),
        ] {
            assert_eq!(left.matches(&record), right.matches(&record));
        }
    }

    #[test]
    fn invalid_condition_is_reported_and_false() {
        let q = Query::or([
            Query::new("people").less_than("name", 3),
            Query::new("people").equal_to("name", "Alex"),
        ]);
        let mut invalid = Vec::new();

        let matched = q.matches_with(&person("Alex", 15), &mut |err| invalid.push(err.clone()));

        assert!(matched);
        assert_eq!(invalid.len(), 1);
        assert!(matches!(invalid[0], CoreError::InvalidCondition { .. }));
    }

    #[test]
    fn and_short_circuits() {
        let q = Query::and([
            Query::new("people").equal_to("name", "Nobody"),
            Query::new("people").less_than("name", 3),
        ]);
        let mut reported = 0;

        assert!(!q.matches_with(&person("Alex", 15), &mut |_| reported += 1));
        assert_eq!(reported, 0);
    }

    #[test]
    fn collection_is_first_leaf_depth_first() {
        let q = Query::or([
            Query::and([]),
            Query::and([Query::new("people"), Query::new("pets")]),
        ]);
        assert_eq!(q.collection(), Some("people"));
        assert_eq!(Query::or([]).collection(), None);
    }

    #[test]
    fn condition_on_composite_is_conjoined() {
        let or = Query::or([
            Query::new("people").equal_to("name", "Carl"),
            Query::new("people").equal_to("name", "Alex"),
        ]);
        let q = or.less_than("age", 20);

        assert!(q.matches(&person("Alex", 15)));
        assert!(!q.matches(&person("Carl", 22)));
        assert!(!q.is_leaf());
        assert_eq!(q.children().len(), 2);
        assert!(!q.children()[0].is_leaf());
        assert!(q.children()[1].is_leaf());

        let and = Query::and([Query::new("people").equal_to("name", "Alex")]);
        let q = and.greater_than("age", 10);
        assert_eq!(q.children().len(), 2);
        assert_eq!(q.children()[1].collection(), Some("people"));
    }

    #[test]
    fn builders_do_not_alias() {
        let base = Query::new("people").equal_to("name", "Stephen");
        let young = base.clone().less_than("age", 13);
        let old = base.clone().greater_than("age", 20);

        assert_eq!(base.conditions().len(), 1);
        assert_eq!(young.conditions().len(), 2);
        assert_ne!(young, old);
    }

    #[test]
    fn display() {
        let q = Query::or([
            Query::new("people").equal_to("name", "Stephen"),
            Query::and([
                Query::new("people").less_than("age", 17),
                Query::new("people").greater_than("age", 11),
            ]),
        ]);
        assert_eq!(
            q.to_string(),
            r#"(name = "Stephen" or (age < 17 and age > 11))"#
        );
        assert_eq!(Query::or([]).to_string(), "false");
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "kind": "composite",
            "combinator": "or",
            "children": [
                { "kind": "leaf", "collection": "people",
                  "conditions": [{ "field": "name", "op": "equal", "value": "Carl" }] },
                { "kind": "leaf", "collection": "people" }
            ]
        }"#;
        let q: Query = serde_json::from_str(json).unwrap();

        assert_eq!(
            q,
            Query::or([
                Query::new("people").equal_to("name", "Carl"),
                Query::new("people"),
            ])
        );
    }
}
