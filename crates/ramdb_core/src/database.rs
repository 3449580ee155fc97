//! Database facade: the collection registry and its operations.

use crate::collection::Collection;
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::query::{Lookup, Query};
use crate::stats::{DatabaseStats, StatsSnapshot};
use crate::types::RecordId;
use parking_lot::RwLock;
use ramdb_value::Document;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

type CollectionHandle = Arc<RwLock<Collection>>;

/// The main database handle.
///
/// `Database` owns every collection. A collection is created the first time
/// its name is used for a write, and lives as long as the database.
/// Reading from a collection that was never created yields nothing.
///
/// # Locking
///
/// The registry and each collection sit behind their own `RwLock`.
/// Inserts take the collection's write lock, so two inserts never receive
/// the same identifier. Lookups and scans hold its read lock for their
/// whole duration and never observe an insert half way through.
///
/// # Example
///
/// ```rust
/// use ramdb_core::{Database, Lookup, Query};
/// use ramdb_value::Document;
///
/// let db = Database::new();
/// db.insert("people", Document::new().with("name", "Alex").with("age", 15))?;
/// db.insert("people", Document::new().with("name", "Carl").with("age", 22))?;
///
/// let carl = db.get(&Lookup::new("people", "name", "Carl")).unwrap();
/// assert_eq!(carl.get("id").and_then(|v| v.as_integer()), Some(1));
///
/// let adults = db.find(&db.query("people").greater_than("age", 17));
/// assert_eq!(adults, vec![carl]);
/// # Ok::<(), ramdb_core::CoreError>(())
/// ```
pub struct Database {
    /// Configuration.
    config: Config,
    /// Collections by name.
    collections: RwLock<HashMap<String, CollectionHandle>>,
    /// Operation counters.
    stats: DatabaseStats,
}

impl Database {
    /// Creates an empty database with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty database with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            collections: RwLock::new(HashMap::new()),
            stats: DatabaseStats::new(),
        }
    }

    /// Returns the process-wide database, creating it on first access.
    pub fn global() -> &'static Database {
        static GLOBAL: OnceLock<Database> = OnceLock::new();
        GLOBAL.get_or_init(Database::new)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn handle(&self, name: &str) -> Option<CollectionHandle> {
        self.collections.read().get(name).cloned()
    }

    fn ensure_handle(&self, name: &str) -> CollectionHandle {
        if let Some(handle) = self.handle(name) {
            return handle;
        }

        let mut collections = self.collections.write();
        // Another writer may have created it between the two locks
        Arc::clone(collections.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(collection = name, "creating collection");
            if self.config.collect_stats {
                self.stats.record_collection_created();
            }
            Arc::new(RwLock::new(Collection::new(
                name,
                self.config.initial_capacity,
            )))
        }))
    }

    /// Creates the collection if it does not exist yet.
    ///
    /// An existing collection keeps its records and its counter.
    pub fn ensure_collection(&self, name: &str) {
        self.ensure_handle(name);
    }

    /// Creates the collection if needed, then stores `record` at the key
    /// given by its own identifier field.
    ///
    /// The record is stored whether or not the collection already existed,
    /// replacing any record under the same key. The identifier counter is
    /// left alone.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if the record has no usable identifier.
    pub fn ensure_collection_with(&self, name: &str, record: Document) -> CoreResult<()> {
        let id_field = &self.config.id_field;
        let id = record
            .get(id_field)
            .and_then(RecordId::from_value)
            .ok_or_else(|| {
                CoreError::invalid_record(format!(
                    "{id_field} must be a non-negative integer to store a record at its key"
                ))
            })?;

        let handle = self.ensure_handle(name);
        handle.write().put(id, record);
        if self.config.collect_stats {
            self.stats.record_put();
        }
        Ok(())
    }

    /// Inserts a record, assigning the next identifier if it has none.
    ///
    /// Returns the stored record with its identifier populated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if the identifier field holds something other
    /// than a non-negative integer.
    pub fn insert(&self, name: &str, record: Document) -> CoreResult<Document> {
        let handle = self.ensure_handle(name);
        let stored = handle.write().insert(record, &self.config.id_field)?;
        if self.config.collect_stats {
            self.stats.record_insert();
        }
        Ok(stored)
    }

    /// Inserts records in order.
    ///
    /// A record that fails does not stop the batch; each outcome is
    /// reported in input order.
    pub fn insert_many(
        &self,
        name: &str,
        records: impl IntoIterator<Item = Document>,
    ) -> Vec<CoreResult<Document>> {
        records
            .into_iter()
            .map(|record| {
                let result = self.insert(name, record);
                if let Err(err) = &result {
                    tracing::warn!(collection = name, error = %err, "skipping record");
                }
                result
            })
            .collect()
    }

    /// Returns the first record, in insertion order, whose field equals the
    /// lookup value. `None` if nothing matches or the collection is absent.
    pub fn get(&self, lookup: &Lookup) -> Option<Document> {
        if self.config.collect_stats {
            self.stats.record_lookup();
        }
        let handle = self.handle(&lookup.collection)?;
        let collection = handle.read();
        collection
            .find_by_field(&lookup.field, &lookup.value)
            .cloned()
    }

    /// Like [`Database::get`], but reports absence as an error.
    ///
    /// # Errors
    ///
    /// Returns `CollectionNotFound` if the collection does not exist and
    /// `NotFound` if no record matches.
    pub fn try_get(&self, lookup: &Lookup) -> CoreResult<Document> {
        if !self.has_collection(&lookup.collection) {
            return Err(CoreError::collection_not_found(&lookup.collection));
        }
        self.get(lookup)
            .ok_or_else(|| CoreError::not_found(&lookup.collection, &lookup.field))
    }

    /// Gets a record by identifier.
    pub fn get_by_id(&self, name: &str, id: RecordId) -> Option<Document> {
        if self.config.collect_stats {
            self.stats.record_lookup();
        }
        let handle = self.handle(name)?;
        let collection = handle.read();
        collection.get(id).cloned()
    }

    /// Returns every record the query matches, in insertion order.
    ///
    /// The target collection is scanned once. An absent collection, or a
    /// query without a target, yields an empty result.
    pub fn find(&self, query: &Query) -> Vec<Document> {
        self.scan(query, |matches| matches.cloned().collect::<Vec<_>>())
            .unwrap_or_default()
    }

    /// Returns the first record the query matches.
    pub fn find_first(&self, query: &Query) -> Option<Document> {
        self.scan(query, |matches| matches.next().cloned()).flatten()
    }

    /// Counts the records the query matches.
    pub fn count(&self, query: &Query) -> usize {
        self.scan(query, |matches| matches.count()).unwrap_or(0)
    }

    fn scan<T>(
        &self,
        query: &Query,
        consume: impl FnOnce(&mut dyn Iterator<Item = &Document>) -> T,
    ) -> Option<T> {
        let name = query.collection()?;
        let handle = self.handle(name)?;
        let collection = handle.read();

        tracing::trace!(collection = name, %query, "scanning collection");
        let mut visited = 0u64;
        let mut invalid = 0u64;
        let mut matching = collection
            .iter()
            .inspect(|_| visited += 1)
            .filter(|record| {
                query.matches_with(record, &mut |err| {
                    invalid += 1;
                    tracing::trace!(collection = name, error = %err, "condition treated as false");
                })
            });
        let out = consume(&mut matching);
        drop(matching);

        if self.config.collect_stats {
            self.stats.record_scan(visited);
            for _ in 0..invalid {
                self.stats.record_invalid_condition();
            }
        }
        Some(out)
    }

    /// Returns a leaf query bound to `name`.
    pub fn query(&self, name: &str) -> Query {
        Query::new(name)
    }

    /// Whether a collection exists.
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.read().contains_key(name)
    }

    /// Names of all collections, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of records in a collection; zero if it does not exist.
    pub fn len(&self, name: &str) -> usize {
        self.handle(name).map_or(0, |handle| {
            let collection = handle.read();
            collection.len()
        })
    }

    /// Whether the database holds no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }

    /// All records of a collection, in insertion order.
    pub fn list(&self, name: &str) -> Vec<Document> {
        self.handle(name)
            .map(|handle| {
                let collection = handle.read();
                collection.iter().cloned().collect()
            })
            .unwrap_or_default()
    }

    /// The identifier the collection's next assigning insert starts from.
    pub fn next_id(&self, name: &str) -> Option<RecordId> {
        self.handle(name).map(|handle| {
            let collection = handle.read();
            collection.next_id()
        })
    }

    /// Removes every record of a collection and resets its counter.
    ///
    /// Returns `false` if the collection does not exist.
    pub fn clear(&self, name: &str) -> bool {
        match self.handle(name) {
            Some(handle) => {
                handle.write().clear();
                true
            }
            None => false,
        }
    }

    /// Removes a collection entirely.
    ///
    /// Returns `false` if the collection does not exist.
    pub fn drop_collection(&self, name: &str) -> bool {
        let removed = self.collections.write().remove(name).is_some();
        if removed {
            tracing::debug!(collection = name, "dropped collection");
        }
        removed
    }

    /// Returns a snapshot of operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("collections", &self.collection_names())
            .finish_non_exhaustive()
    }
}
