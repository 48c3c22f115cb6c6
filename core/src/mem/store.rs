//! In-memory store.
//!
//! All state lives in one [`Table`] guarded by a single mutex. Every mutation,
//! every read of the open/closed flag and every snapshot copy happens under that
//! lock, so no caller can observe a half-applied write or batch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use super::cursor::MemCursor;
use super::snapshot::MemSnapshot;
use super::table::Table;
use crate::batch::WriteBatch;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::traits::Store;
use crate::types::{Key, Value};

/// Path reported by stores that are not registered under a name.
pub const ANONYMOUS_PATH: &str = ":memory:";

/// State shared by every handle to one store instance. Its address is the
/// store's identity for snapshot ownership checks.
pub(crate) struct Shared {
    path: String,
    /// Set once the name is dropped from its environment.
    detached: AtomicBool,
    options: Options,
    table: Arc<Mutex<Table>>,
}

impl Shared {
    pub fn is_closed(&self) -> bool {
        self.table.lock().is_closed()
    }

    fn path(&self) -> &str {
        if self.detached.load(Ordering::Acquire) {
            ANONYMOUS_PATH
        } else {
            &self.path
        }
    }
}

/// An ordered key-value store held entirely in memory.
///
/// Cloning a `MemStore` yields another handle to the same store.
#[derive(Clone)]
pub struct MemStore {
    shared: Arc<Shared>,
}

impl MemStore {
    /// Create an anonymous, empty store.
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create an anonymous, empty store. Existence flags have nothing to act on
    /// for a store without a name and are ignored.
    pub fn with_options(options: &Options) -> Self {
        Self::build(ANONYMOUS_PATH, options, Table::new())
    }

    pub(crate) fn named(path: &str, options: &Options) -> Self {
        Self::build(path, options, Table::new())
    }

    /// A new, open instance carrying over the contents of `previous`.
    pub(crate) fn reopen(previous: &MemStore, options: &Options) -> Self {
        let entries = previous.shared.table.lock().copy_entries();
        Self::build(previous.path(), options, Table::from_entries(entries))
    }

    fn build(path: &str, options: &Options, table: Table) -> Self {
        tracing::debug!(
            "Opening in-memory store {} (cache_size={}, block_size={}, write_buffer_size={}, max_open_files={} are ignored)",
            path,
            options.cache_size,
            options.block_size,
            options.write_buffer_size,
            options.max_open_files
        );
        Self {
            shared: Arc::new(Shared {
                path: path.to_string(),
                detached: AtomicBool::new(false),
                options: options.clone(),
                table: Arc::new(Mutex::new(table)),
            }),
        }
    }

    /// Drop the registered name; this instance reports [`ANONYMOUS_PATH`] from now on.
    pub(crate) fn detach(&self) {
        self.shared.detached.store(true, Ordering::Release);
    }

    pub(crate) fn shared(&self) -> &Arc<Shared> {
        &self.shared
    }

    /// The options this instance was opened with.
    pub fn options(&self) -> &Options {
        &self.shared.options
    }

    /// Number of live keys.
    pub fn len(&self) -> Result<usize> {
        let table = self.lock_open()?;
        Ok(table.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Approximate bytes held by live keys and values.
    pub fn approximate_size(&self) -> Result<usize> {
        let table = self.lock_open()?;
        Ok(table.size_bytes())
    }

    /// Lock the table, failing if the store is closed.
    fn lock_open(&self) -> Result<parking_lot::MutexGuard<'_, Table>> {
        let table = self.shared.table.lock();
        if table.is_closed() {
            return Err(Error::Closed("store"));
        }
        Ok(table)
    }

    fn check_ownership(&self, snapshot: &MemSnapshot) -> Result<()> {
        if snapshot.check_ownership(&self.shared) {
            Ok(())
        } else {
            Err(Error::OwnershipViolation)
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemStore")
            .field("path", &self.path())
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Store for MemStore {
    type Snapshot = MemSnapshot;
    type Cursor = MemCursor;

    fn put<V: AsRef<[u8]>>(&self, key: impl AsRef<[u8]>, value: Option<V>, sync: bool) -> Result<()> {
        let Some(value) = value else {
            return self.delete(key, sync);
        };
        let (key, value) = (key.as_ref(), value.as_ref());
        let mut table = self.lock_open()?;
        tracing::trace!("put key_len={} value_len={} sync={}", key.len(), value.len(), sync);
        table.put(Key::from_slice(key), Value::from_slice(value));
        Ok(())
    }

    fn delete(&self, key: impl AsRef<[u8]>, sync: bool) -> Result<()> {
        let key = key.as_ref();
        let mut table = self.lock_open()?;
        tracing::trace!("delete key_len={} sync={}", key.len(), sync);
        table.delete(&Key::from_slice(key));
        Ok(())
    }

    fn get(&self, key: impl AsRef<[u8]>, snapshot: Option<&MemSnapshot>) -> Result<Option<Value>> {
        let key = Key::from_slice(key.as_ref());
        match snapshot {
            Some(snapshot) => {
                self.check_ownership(snapshot)?;
                drop(self.lock_open()?);
                let entries = snapshot
                    .entries()
                    .ok_or_else(|| Error::InvalidArgument("snapshot has been released".into()))?;
                Ok(entries.get(&key).cloned())
            }
            None => {
                let table = self.lock_open()?;
                Ok(table.get(&key).cloned())
            }
        }
    }

    fn write(&self, batch: &WriteBatch, sync: bool) -> Result<()> {
        let mut table = self.lock_open()?;
        tracing::trace!("write batch of {} records sync={}", batch.len(), sync);
        table.apply(batch);
        Ok(())
    }

    fn new_cursor(&self, fill_cache: bool, snapshot: Option<&MemSnapshot>) -> Result<MemCursor> {
        tracing::debug!(
            "New cursor on {} fill_cache={} from_snapshot={}",
            self.shared.path(),
            fill_cache,
            snapshot.is_some()
        );
        match snapshot {
            Some(snapshot) => {
                self.check_ownership(snapshot)?;
                drop(self.lock_open()?);
                let entries = snapshot
                    .entries()
                    .ok_or_else(|| Error::InvalidArgument("snapshot has been released".into()))?;
                Ok(MemCursor::over_snapshot(entries))
            }
            None => {
                let table = self.lock_open()?;
                let keys = table.keys();
                drop(table);
                Ok(MemCursor::over_table(keys, Arc::clone(&self.shared.table)))
            }
        }
    }

    fn obtain_snapshot(&self) -> Result<MemSnapshot> {
        let table = self.lock_open()?;
        let snapshot = MemSnapshot::new(&self.shared, table.copy_entries());
        tracing::debug!("Obtained snapshot of {} entries from {}", table.len(), self.shared.path());
        Ok(snapshot)
    }

    fn release_snapshot(&self, snapshot: &MemSnapshot) -> Result<()> {
        self.check_ownership(snapshot)?;
        let _table = self.lock_open()?;
        if snapshot.release() {
            tracing::debug!("Released snapshot of {}", self.shared.path());
        }
        Ok(())
    }

    fn get_property(&self, name: &[u8]) -> Result<Option<Value>> {
        drop(self.lock_open()?);
        Err(Error::Unsupported(format!(
            "in-memory store has no property {:?}",
            String::from_utf8_lossy(name)
        )))
    }

    fn close(&self) {
        let mut table = self.shared.table.lock();
        if table.close() {
            tracing::debug!("Closed store {}", self.shared.path());
        } else {
            tracing::info!("Trying to close store {} multiple times", self.shared.path());
        }
    }

    fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    fn path(&self) -> &str {
        self.shared.path()
    }
}
