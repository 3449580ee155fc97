//! Stress tests for RamDB.
//!
//! These tests verify behavior under heavy load and concurrent access.

use parking_lot::Mutex;
use ramdb_core::{Database, Document, Query, RecordId, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of operations to perform.
    pub operations: usize,
    /// Number of concurrent threads (for concurrent tests).
    pub threads: usize,
    /// Number of records to seed before read-heavy runs.
    pub record_count: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            threads: 4,
            record_count: 1_000,
        }
    }
}

const COLLECTION: &str = "stress";

fn record(index: usize) -> Document {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    Document::new()
        .with("index", index)
        .with("bucket", index % 10)
}

fn seed(db: &Database, count: usize) {
    for i in 0..count {
        db.insert(COLLECTION, record(i))
            .expect("Failed to insert record");
    }
}

/// Run a sequential insert stress test.
pub fn stress_sequential_inserts(db: &Database, config: &StressConfig) -> StressTestResult {
    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        match db.insert(COLLECTION, record(i)) {
            Ok(_) => successful += 1,
            Err(_) => failed += 1,
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Run a sequential lookup stress test.
pub fn stress_sequential_lookups(db: &Database, config: &StressConfig) -> StressTestResult {
    seed(db, config.record_count);

    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        let id = RecordId::new((i % config.record_count.max(1)) as u64);
        match db.get_by_id(COLLECTION, id) {
            Some(_) => successful += 1,
            None => failed += 1,
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Run a mixed insert/lookup/scan stress test.
pub fn stress_mixed_operations(db: &Database, config: &StressConfig) -> StressTestResult {
    seed(db, config.record_count);
    let bucket_query = Query::new(COLLECTION).equal_to("bucket", 3);

    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        let ok = match i % 3 {
            0 => db.insert(COLLECTION, record(i)).is_ok(),
            1 => db
                .get_by_id(COLLECTION, RecordId::new((i % config.record_count.max(1)) as u64))
                .is_some(),
            _ => db.count(&bucket_query) > 0,
        };

        if ok {
            successful += 1;
        } else {
            failed += 1;
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Run a concurrent insert stress test.
///
/// Every thread inserts into the same collection; an insert only counts as
/// successful if it got an identifier nobody else got.
pub fn stress_concurrent_inserts(db: Arc<Database>, config: &StressConfig) -> StressTestResult {
    let seen = Arc::new(Mutex::new(HashSet::new()));
    let failed = Arc::new(AtomicUsize::new(0));
    let ops_per_thread = config.operations / config.threads.max(1);

    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let db = Arc::clone(&db);
            let seen = Arc::clone(&seen);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let fresh = db
                        .insert(COLLECTION, record(t * ops_per_thread + i))
                        .ok()
                        .and_then(|stored| stored.get("id").and_then(RecordId::from_value))
                        .map_or(false, |id| seen.lock().insert(id));
                    if !fresh {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let successful = seen.lock().len();
    StressTestResult::new(successful, failed.load(Ordering::Relaxed), start.elapsed())
}

/// Run scans concurrently with a single writer.
///
/// Each scan must observe a prefix of the writer's inserts: identifiers
/// `0..n` in order, with nothing missing.
pub fn stress_scans_during_inserts(db: Arc<Database>, config: &StressConfig) -> StressTestResult {
    db.ensure_collection(COLLECTION);
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let scans_per_thread = config.operations / config.threads.max(1);
    let everything = Query::new(COLLECTION);

    let start = Instant::now();

    let writer = {
        let db = Arc::clone(&db);
        let count = config.record_count;
        thread::spawn(move || seed(&db, count))
    };

    let readers: Vec<_> = (0..config.threads)
        .map(|_| {
            let db = Arc::clone(&db);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);
            let query = everything.clone();

            thread::spawn(move || {
                for _ in 0..scans_per_thread {
                    let snapshot = db.find(&query);
                    let contiguous = snapshot.iter().enumerate().all(|(i, doc)| {
                        doc.get("id") == Some(&Value::Integer(i64::try_from(i).unwrap_or(-1)))
                    });
                    if contiguous {
                        successful.fetch_add(1, Ordering::Relaxed);
                    } else {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    writer.join().expect("Writer panicked");
    for reader in readers {
        reader.join().expect("Reader panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_inserts() {
        let db = Database::new();
        let config = StressConfig {
            operations: 1_000,
            ..Default::default()
        };

        let result = stress_sequential_inserts(&db, &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(result.successful_ops, 1_000);
        assert_eq!(db.next_id(COLLECTION), Some(RecordId::new(1_000)));
    }

    #[test]
    fn test_sequential_lookups() {
        let db = Database::new();
        let config = StressConfig {
            operations: 1_000,
            record_count: 100,
            ..Default::default()
        };

        let result = stress_sequential_lookups(&db, &config);
        assert_eq!(result.failed_ops, 0);
    }

    #[test]
    fn test_mixed_operations() {
        let db = Database::new();
        let config = StressConfig {
            operations: 900,
            record_count: 100,
            ..Default::default()
        };

        let result = stress_mixed_operations(&db, &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(db.len(COLLECTION), 400);
    }

    #[test]
    fn test_concurrent_inserts() {
        let db = Arc::new(Database::new());
        let config = StressConfig {
            operations: 1_000,
            threads: 4,
            ..Default::default()
        };

        let result = stress_concurrent_inserts(Arc::clone(&db), &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(result.successful_ops, 1_000);
        assert_eq!(db.len(COLLECTION), 1_000);
    }

    #[test]
    fn test_scans_during_inserts() {
        let db = Arc::new(Database::new());
        let config = StressConfig {
            operations: 200,
            threads: 4,
            record_count: 500,
        };

        let result = stress_scans_during_inserts(Arc::clone(&db), &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(db.len(COLLECTION), 500);
    }
}
