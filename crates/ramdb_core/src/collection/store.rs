//! A single named collection.

use crate::collection::records::RecordMap;
use crate::error::{CoreError, CoreResult};
use crate::types::RecordId;
use ramdb_value::{Document, Value};

/// A named group of records with its identifier counter.
///
/// The counter starts at zero and only `insert` moves it. Records stored
/// directly through [`Collection::put`] leave it untouched, so `insert`
/// skips over any key that is already occupied when it assigns one.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Collection name.
    name: String,
    /// Stored records.
    records: RecordMap,
    /// Next identifier to assign.
    next_id: RecordId,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            records: RecordMap::with_capacity(capacity),
            next_id: RecordId::new(0),
        }
    }

    /// Returns the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier the next assigning insert would try first.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Returns the stored records.
    pub fn records(&self) -> &RecordMap {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stores a record at `id` without touching the counter.
    pub fn put(&mut self, id: RecordId, record: Document) -> Option<Document> {
        self.records.insert(id, record)
    }

    /// Inserts a record, assigning an identifier when it has none.
    ///
    /// A missing or null `id_field` counts as "no identifier". Returns the
    /// stored record with its identifier populated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if `id_field` holds something other than a
    /// non-negative integer, or if the counter has run past `i64::MAX`.
    pub fn insert(&mut self, mut record: Document, id_field: &str) -> CoreResult<Document> {
        let id = match record.get(id_field) {
            None | Some(Value::Null) => {
                let (id, value) = self.assign_id()?;
                record.set(id_field, value);
                tracing::trace!(collection = %self.name, %id, "assigned record id");
                id
            }
            Some(value) => {
                let id = RecordId::from_value(value).ok_or_else(|| {
                    CoreError::invalid_record(format!(
                        "{id_field} must be a non-negative integer, found {}",
                        value.kind()
                    ))
                })?;
                if id >= self.next_id {
                    self.next_id = id.next();
                }
                id
            }
        };

        self.records.insert(id, record.clone());
        Ok(record)
    }

    fn assign_id(&mut self) -> CoreResult<(RecordId, Value)> {
        let mut id = self.next_id;
        while self.records.contains(id) {
            id = id.next();
        }
        let value = id.to_value().ok_or_else(|| {
            CoreError::invalid_record(format!(
                "identifier counter of {} is exhausted at {id}",
                self.name
            ))
        })?;
        self.next_id = id.next();
        Ok((id, value))
    }

    /// Gets a record by identifier.
    pub fn get(&self, id: RecordId) -> Option<&Document> {
        self.records.get(id)
    }

    /// First record, in insertion order, whose `field` equals `value`.
    pub fn find_by_field(&self, field: &str, value: &Value) -> Option<&Document> {
        self.records
            .values()
            .find(|doc| doc.get(field).is_some_and(|v| v.strict_eq(value)))
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.records.values()
    }

    /// Removes every record and resets the counter.
    pub fn clear(&mut self) {
        self.records.clear();
        self.next_id = RecordId::new(0);
    }
}
