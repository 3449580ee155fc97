//! # RamDB Core
//!
//! Core engine for RamDB, an embedded in-memory record store.
//!
//! This crate provides:
//! - Named collections, created on first use
//! - Per-collection identifier assignment
//! - Single-field lookups
//! - Predicate tree queries with AND / OR composition
//!
//! Every query is a linear scan of one collection in insertion order.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod config;
mod database;
mod error;
mod query;
mod stats;
mod types;

pub use collection::{Collection, RecordMap};
pub use config::{Config, DEFAULT_ID_FIELD};
pub use database::Database;
pub use error::{CoreError, CoreResult};
pub use query::{Combinator, Condition, Lookup, Op, Query};
pub use stats::{DatabaseStats, StatsSnapshot};
pub use types::RecordId;

pub use ramdb_value::{Document, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
