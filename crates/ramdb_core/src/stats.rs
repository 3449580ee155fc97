//! Database statistics.
//!
//! Counters for the store's operations, readable while they run.
//!
//! # Usage
//!
//! ```rust
//! use ramdb_core::{Database, Query};
//! use ramdb_value::Document;
//!
//! let db = Database::new();
//! db.insert("people", Document::new().with("name", "Alex")).unwrap();
//! db.find(&Query::new("people").equal_to("name", "Alex"));
//!
//! let stats = db.stats();
//! assert_eq!(stats.inserts, 1);
//! assert_eq!(stats.scans, 1);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Store statistics.
///
/// All counters are atomic and monotonically increasing.
#[derive(Debug, Default)]
pub struct DatabaseStats {
    /// Records inserted through `insert`.
    inserts: AtomicU64,
    /// Records stored directly at their own key.
    puts: AtomicU64,
    /// Single-record lookups.
    lookups: AtomicU64,
    /// Full collection scans for `find`.
    scans: AtomicU64,
    /// Records visited by scans.
    records_scanned: AtomicU64,
    /// Conditions that could not be evaluated.
    invalid_conditions: AtomicU64,
    /// Collections created.
    collections_created: AtomicU64,
}

impl DatabaseStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_put(&self) {
        self.puts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan(&self, records: u64) {
        self.scans.fetch_add(1, Ordering::Relaxed);
        self.records_scanned.fetch_add(records, Ordering::Relaxed);
    }

    pub(crate) fn record_invalid_condition(&self) {
        self.invalid_conditions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_collection_created(&self) {
        self.collections_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of inserts.
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Returns the number of scans.
    ///
    /// Every `find` is a full scan of its collection.
    pub fn scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// Returns the number of conditions that could not be evaluated.
    pub fn invalid_conditions(&self) -> u64 {
        self.invalid_conditions.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts(),
            puts: self.puts.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            scans: self.scans(),
            records_scanned: self.records_scanned.load(Ordering::Relaxed),
            invalid_conditions: self.invalid_conditions(),
            collections_created: self.collections_created.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of store statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    /// Records inserted through `insert`.
    pub inserts: u64,
    /// Records stored directly at their own key.
    pub puts: u64,
    /// Single-record lookups.
    pub lookups: u64,
    /// Full collection scans.
    pub scans: u64,
    /// Records visited by scans.
    pub records_scanned: u64,
    /// Conditions that could not be evaluated.
    pub invalid_conditions: u64,
    /// Collections created.
    pub collections_created: u64,
}
