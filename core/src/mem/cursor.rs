//! Bidirectional cursor over an in-memory store or one of its snapshots.
//!
//! The cursor copies the sorted key list when it is created and walks that list
//! by index. Values are looked up when asked for: through the store's table for
//! a live cursor, or in the frozen map for a snapshot cursor. Keys written after
//! the cursor was created never show up in its traversal and deleted keys never
//! drop out of it.

use std::sync::Arc;

use parking_lot::Mutex;

use super::table::{Entries, Table};
use crate::bytes;
use crate::error::{Error, Result};
use crate::traits::Cursor;
use crate::types::{Key, Value};

enum Source {
    Live(Arc<Mutex<Table>>),
    Frozen(Arc<Entries>),
}

/// Cursor returned by [`crate::MemStore`].
///
/// A fresh cursor is not positioned; call one of the seek methods first.
/// Not meant to be shared between threads without external synchronisation.
pub struct MemCursor {
    source: Source,
    keys: Vec<Key>,
    /// `-1` and `keys.len()` are the before-first and after-last positions.
    position: isize,
    closed: bool,
}

impl MemCursor {
    pub(crate) fn over_table(keys: Vec<Key>, table: Arc<Mutex<Table>>) -> Self {
        Self::with_source(keys, Source::Live(table))
    }

    pub(crate) fn over_snapshot(entries: Arc<Entries>) -> Self {
        let keys = entries.keys().cloned().collect();
        Self::with_source(keys, Source::Frozen(entries))
    }

    fn with_source(keys: Vec<Key>, source: Source) -> Self {
        Self {
            source,
            keys,
            position: -1,
            closed: false,
        }
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::Closed("cursor"));
        }
        Ok(())
    }

    fn valid(&self) -> bool {
        self.position >= 0 && (self.position as usize) < self.keys.len()
    }

    /// The key under the cursor, checked for both open and valid.
    fn current(&self) -> Result<&Key> {
        self.check_open()?;
        if !self.valid() {
            return Err(Error::NotValid);
        }
        Ok(&self.keys[self.position as usize])
    }

    /// The current key without copying it.
    pub fn key_bytes(&self) -> Result<&[u8]> {
        Ok(self.current()?.as_bytes())
    }

    /// Number of keys this cursor can visit.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Cursor for MemCursor {
    fn is_valid(&self) -> Result<bool> {
        self.check_open()?;
        Ok(self.valid())
    }

    fn seek_to_first(&mut self) -> Result<()> {
        self.check_open()?;
        self.position = 0;
        Ok(())
    }

    fn seek_to_last(&mut self) -> Result<()> {
        self.check_open()?;
        self.position = self.keys.len() as isize - 1;
        Ok(())
    }

    fn seek(&mut self, key: impl AsRef<[u8]>) -> Result<()> {
        self.check_open()?;
        self.position = bytes::lower_bound(&self.keys, key.as_ref()) as isize;
        Ok(())
    }

    fn next(&mut self) -> Result<()> {
        self.current()?;
        self.position += 1;
        Ok(())
    }

    fn previous(&mut self) -> Result<()> {
        self.current()?;
        self.position -= 1;
        Ok(())
    }

    fn key(&self) -> Result<Key> {
        self.current().cloned()
    }

    fn value(&self) -> Result<Option<Value>> {
        let key = self.current()?;
        let value = match &self.source {
            Source::Live(table) => table.lock().get(key).cloned(),
            Source::Frozen(entries) => entries.get(key).cloned(),
        };
        Ok(value)
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
