//! Ordered key-value store with snapshots and bidirectional cursors.
//!
//! The [`Store`], [`Snapshot`] and [`Cursor`] traits describe the contract; the
//! [`mem`] module provides an in-memory implementation of it.

// Public API
pub mod batch;
pub mod bytes;
pub mod error;
pub mod mem;
pub mod options;
pub mod traits;
pub mod types;

pub use batch::{BatchOp, WriteBatch};
pub use error::{Error, Result};
pub use mem::{MemCursor, MemEnv, MemSnapshot, MemStore};
pub use options::Options;
pub use traits::{Cursor, Snapshot, Store};
pub use types::{Key, Value};
