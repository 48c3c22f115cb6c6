//! The store contract shared by every backend.
//!
//! A backend provides three cooperating types: the store itself, the snapshots it
//! mints and the cursors it mints. Backends are picked when the store is
//! constructed; callers written against these traits work with any of them.

use crate::batch::WriteBatch;
use crate::error::Result;
use crate::types::{Key, Value};

/// An ordered key-value store.
///
/// Every operation except [`Store::close`], [`Store::is_closed`] and
/// [`Store::path`] fails with [`crate::Error::Closed`] once the store is closed.
/// The `sync` flag asks a durable backend to flush before returning; backends
/// without durability accept and ignore it.
pub trait Store: Send + Sync {
    type Snapshot: Snapshot;
    type Cursor: Cursor;

    /// Insert or overwrite `key`. A `None` value deletes the key; spell it
    /// `None::<&[u8]>` when nothing else fixes the value type.
    fn put<V: AsRef<[u8]>>(&self, key: impl AsRef<[u8]>, value: Option<V>, sync: bool) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    fn delete(&self, key: impl AsRef<[u8]>, sync: bool) -> Result<()>;

    /// Read `key` from the live data, or from `snapshot` when one is given.
    /// A missing key is `Ok(None)`.
    fn get(&self, key: impl AsRef<[u8]>, snapshot: Option<&Self::Snapshot>) -> Result<Option<Value>>;

    /// Apply every record of `batch` in order as one step.
    fn write(&self, batch: &WriteBatch, sync: bool) -> Result<()>;

    /// Create a cursor over the live data or over `snapshot`. The set of keys the
    /// cursor visits is fixed when this returns.
    fn new_cursor(&self, fill_cache: bool, snapshot: Option<&Self::Snapshot>) -> Result<Self::Cursor>;

    fn obtain_snapshot(&self) -> Result<Self::Snapshot>;

    /// Release a snapshot minted by this store. Releasing twice is a no-op.
    fn release_snapshot(&self, snapshot: &Self::Snapshot) -> Result<()>;

    /// Engine introspection, e.g. statistics dumps.
    fn get_property(&self, name: &[u8]) -> Result<Option<Value>>;

    /// Close the store. Closing twice is a no-op.
    fn close(&self);

    fn is_closed(&self) -> bool;

    /// Where the store lives.
    fn path(&self) -> &str;

    /// An empty batch to be filled and written back to this store.
    fn write_batch(&self) -> WriteBatch {
        WriteBatch::new()
    }
}

/// A point-in-time view owned by the store that minted it.
pub trait Snapshot: Send + Sync {
    /// True once released, or once the owning store is closed or gone.
    fn is_released(&self) -> bool;
}

/// A bidirectional, positionable cursor.
///
/// Every method except [`Cursor::close`] and [`Cursor::is_closed`] fails with
/// [`crate::Error::Closed`] after the cursor is closed. `next`, `previous`,
/// `key` and `value` fail with [`crate::Error::NotValid`] unless the cursor is
/// positioned on an entry.
pub trait Cursor {
    fn is_valid(&self) -> Result<bool>;

    fn seek_to_first(&mut self) -> Result<()>;

    fn seek_to_last(&mut self) -> Result<()>;

    /// Position on the first key not less than `key`.
    fn seek(&mut self, key: impl AsRef<[u8]>) -> Result<()>;

    fn next(&mut self) -> Result<()>;

    fn previous(&mut self) -> Result<()>;

    fn key(&self) -> Result<Key>;

    /// The value currently stored under the cursor's key, or `None` if a live
    /// key was deleted after the cursor was created.
    fn value(&self) -> Result<Option<Value>>;

    /// Close the cursor. Closing twice is a no-op.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}
