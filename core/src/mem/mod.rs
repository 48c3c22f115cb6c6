//! In-memory backend.
//!
//! Architecture:
//! - Table: the live sorted map plus the open/closed flag, behind one mutex
//! - MemStore: the store handle; every write and lifecycle change locks the table
//! - MemSnapshot: a frozen copy of the table, weakly tied to its store
//! - MemCursor: a frozen key list walked by index
//! - MemEnv: named stores with create/exists semantics

mod cursor;
mod env;
mod snapshot;
mod store;
mod table;

pub use cursor::MemCursor;
pub use env::MemEnv;
pub use snapshot::MemSnapshot;
pub use store::{ANONYMOUS_PATH, MemStore};
