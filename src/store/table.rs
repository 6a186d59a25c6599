//! RecordStore implementation
//!
//! HashMap-based store with a single RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::WriteOutcome;
use crate::error::{Result, SodaError};
use crate::record::{now, NewRecord, Record};

/// Thread-safe record collection keyed by record id
#[derive(Default)]
pub struct RecordStore {
    records: RwLock<HashMap<u64, Record>>,
}

impl RecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared access (blocks while a writer holds the lock)
    pub fn read(&self) -> StoreReader<'_> {
        StoreReader {
            records: self.records.read(),
        }
    }

    /// Acquire exclusive access (blocks until all readers and writers leave)
    pub fn write(&self) -> StoreWriter<'_> {
        StoreWriter {
            records: self.records.write(),
        }
    }

    /// Create or fully replace a record
    ///
    /// Stamping, the existence check and the put share one critical section,
    /// so the outcome always describes the write that actually happened.
    pub fn upsert(&self, new_record: NewRecord) -> WriteOutcome {
        let mut writer = self.write();
        let record = new_record.stamp(now());
        let outcome = if writer.contains(record.id) {
            WriteOutcome::Replaced
        } else {
            WriteOutcome::Inserted
        };
        writer.put(record);
        outcome
    }

    /// Number of records (takes shared access)
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared access to the store; many may exist at once
///
/// Records returned by `get` borrow from the guard, so bind the guard to a
/// local before calling it: `store.read().get(id)` cannot outlive its
/// statement.
pub struct StoreReader<'a> {
    records: RwLockReadGuard<'a, HashMap<u64, Record>>,
}

impl StoreReader<'_> {
    /// All current keys, in no particular order
    pub fn list(&self) -> Vec<u64> {
        self.records.keys().copied().collect()
    }

    pub fn get(&self, id: u64) -> Result<&Record> {
        self.records.get(&id).ok_or(SodaError::RecordNotFound(id))
    }
}

/// Exclusive access to the store
///
/// As with [`StoreReader`], `get` borrows from the guard.
pub struct StoreWriter<'a> {
    records: RwLockWriteGuard<'a, HashMap<u64, Record>>,
}

impl StoreWriter<'_> {
    pub fn contains(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    /// Insert under `record.id`, dropping any previous record whole
    ///
    /// The timestamp is stored as given.
    pub fn put(&mut self, record: Record) {
        self.records.insert(record.id, record);
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(SodaError::RecordNotFound(id))
    }

    pub fn list(&self) -> Vec<u64> {
        self.records.keys().copied().collect()
    }

    pub fn get(&self, id: u64) -> Result<&Record> {
        self.records.get(&id).ok_or(SodaError::RecordNotFound(id))
    }
}
