//! RwLock-backed record collections.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};

/// A record that can live in a [`RecordStore`]
pub trait Record: Clone + Send + Sync {
    /// The record's immutable identifier
    fn id(&self) -> i64;
}

/// Record store trait
///
/// Abstracts storage of one resource collection. Implementations keep
/// insertion order and never hand out references into their storage;
/// every read returns an owned copy of the current state.
pub trait RecordStore<T: Record>: Send + Sync {
    /// All records, in insertion order
    fn list(&self) -> StoreResult<Vec<T>>;

    /// Find a record by id
    fn find_by_id(&self, id: i64) -> StoreResult<Option<T>>;

    /// Append a new record
    fn insert(&self, record: T) -> StoreResult<()>;

    /// Replace the record with the given id. Returns false if absent.
    fn replace(&self, id: i64, record: T) -> StoreResult<bool>;

    /// Mutate the record with the given id in place, under one write lock.
    /// Returns the updated record, or `None` if absent.
    fn update(&self, id: i64, apply: &mut dyn FnMut(&mut T)) -> StoreResult<Option<T>>;

    /// Remove the record with the given id. Returns false if absent.
    fn remove_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Remove every record
    fn clear(&self) -> StoreResult<()>;

    /// Number of stored records
    fn len(&self) -> StoreResult<usize>;

    /// Whether the collection is empty
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory record store
#[derive(Debug)]
pub struct InMemoryStore<T> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store. `name` identifies the collection in errors.
    pub fn new(name: &'static str) -> Self {
        Self::with_records(name, Vec::new())
    }

    /// Create a store pre-populated with `records`
    pub fn with_records(name: &'static str, records: Vec<T>) -> Self {
        Self {
            name,
            records: RwLock::new(records),
        }
    }

    /// Collection name
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned(self.name))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|_| StoreError::LockPoisoned(self.name))
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<T>> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, record: T) -> StoreResult<()> {
        self.write()?.push(record);
        Ok(())
    }

    fn replace(&self, id: i64, record: T) -> StoreResult<bool> {
        let mut records = self.write()?;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(existing) => {
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn update(&self, id: i64, apply: &mut dyn FnMut(&mut T)) -> StoreResult<Option<T>> {
        let mut records = self.write()?;
        Ok(records.iter_mut().find(|r| r.id() == id).map(|existing| {
            apply(existing);
            existing.clone()
        }))
    }

    fn remove_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut records = self.write()?;
        let len_before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() != len_before)
    }

    fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
