//! The live sorted table behind an in-memory store.
//!
//! The table holds the current key -> value mapping, ordered by
//! [`crate::bytes::compare`], together with the store's open/closed flag so that
//! both are always read and written under the same lock.

use std::collections::BTreeMap;

use crate::batch::{BatchOp, WriteBatch};
use crate::types::{Key, Value};

pub(crate) type Entries = BTreeMap<Key, Value>;

pub(crate) struct Table {
    entries: Entries,
    /// Current size in bytes (approximate).
    size_bytes: usize,
    closed: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::from_entries(BTreeMap::new())
    }

    /// A table seeded with existing contents, e.g. when a closed store is reopened.
    pub fn from_entries(entries: Entries) -> Self {
        let size_bytes = entries.iter().map(|(k, v)| entry_size(k, v)).sum();
        Self {
            entries,
            size_bytes,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Mark the table closed. Returns false if it already was.
    pub fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }

    pub fn put(&mut self, key: Key, value: Value) {
        match self.entries.get_mut(&key) {
            // Keep the stored key bytes; only the value changes.
            Some(slot) => {
                self.size_bytes = self.size_bytes + value.len() - slot.len();
                *slot = value;
            }
            None => {
                self.size_bytes += entry_size(&key, &value);
                self.entries.insert(key, value);
            }
        }
    }

    pub fn delete(&mut self, key: &Key) {
        if let Some((k, v)) = self.entries.remove_entry(key) {
            self.size_bytes -= entry_size(&k, &v);
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Apply batch records in order.
    pub fn apply(&mut self, batch: &WriteBatch) {
        for op in batch {
            match op {
                BatchOp::Put(key, value) => self.put(key.clone(), value.clone()),
                BatchOp::Delete(key) => self.delete(key),
            }
        }
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    /// A copy of the current contents.
    pub fn copy_entries(&self) -> Entries {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Approximate size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}

fn entry_size(key: &Key, value: &Value) -> usize {
    key.len() + value.len()
}
