//! Insertion-ordered record storage.

use crate::types::RecordId;
use ramdb_value::Document;
use std::collections::HashMap;

/// Records keyed by identifier, iterated in insertion order.
///
/// Re-inserting an existing key replaces the record but keeps the key's
/// original position. Two maps are equal when they hold equal records under
/// the same keys in the same order.
#[derive(Debug, Clone, Default)]
pub struct RecordMap {
    /// Records in insertion order.
    entries: Vec<(RecordId, Document)>,
    /// Position of each key in `entries`.
    index: HashMap<RecordId, usize>,
}

impl RecordMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Stores a record, returning the one it replaced.
    pub fn insert(&mut self, id: RecordId, record: Document) -> Option<Document> {
        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, record)),
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push((id, record));
                None
            }
        }
    }

    /// Gets a record by key.
    pub fn get(&self, id: RecordId) -> Option<&Document> {
        self.index.get(&id).map(|&pos| &self.entries[pos].1)
    }

    /// Whether a key is present.
    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Document)> {
        self.entries.iter().map(|(id, doc)| (*id, doc))
    }

    /// Iterates over records without their keys.
    pub fn values(&self) -> impl Iterator<Item = &Document> {
        self.entries.iter().map(|(_, doc)| doc)
    }
}

impl PartialEq for RecordMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
