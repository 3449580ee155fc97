//! Predicate trees over record fields.
//!
//! A query is built from leaves of field conditions and combined with
//! [`Query::and`] / [`Query::or`]. The database scans the target collection
//! once, in insertion order, and keeps each record the tree matches.

mod condition;
mod lookup;
mod tree;

pub use condition::{Condition, Op};
pub use lookup::Lookup;
pub use tree::{Combinator, Query};
