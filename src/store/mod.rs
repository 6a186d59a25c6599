//! Store Module
//!
//! In-memory keyed collection of records.
//!
//! ## Responsibilities
//! - Create-or-replace, list-keys, get-by-key, delete-by-key
//! - Single-writer/multi-reader access pattern
//! - Stamp write timestamps inside the write critical section
//!
//! ## Data Structure Choice
//! One HashMap behind one parking_lot RwLock:
//! - Key order is never exposed, so no ordered map is needed
//! - Any write excludes every other operation on the whole map
//! - Callers take a guard first ([`RecordStore::read`] / [`RecordStore::write`]),
//!   so an operation cannot run without the access it needs

mod table;

pub use table::{RecordStore, StoreReader, StoreWriter};

/// What a create-or-update did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No record existed under the key
    Inserted,

    /// An existing record was overwritten in full
    Replaced,
}
