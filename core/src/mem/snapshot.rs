use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::store::Shared;
use super::table::Entries;
use crate::traits::Snapshot;

/// A frozen copy of an in-memory store's contents.
///
/// The snapshot only holds a weak reference to the store that minted it, so an
/// outstanding snapshot never keeps its store alive. Once that store is closed
/// or dropped the snapshot reports itself as released.
pub struct MemSnapshot {
    owner: Weak<Shared>,
    /// `None` once released.
    frozen: Mutex<Option<Arc<Entries>>>,
}

impl MemSnapshot {
    pub(crate) fn new(owner: &Arc<Shared>, frozen: Entries) -> Self {
        Self {
            owner: Arc::downgrade(owner),
            frozen: Mutex::new(Some(Arc::new(frozen))),
        }
    }

    /// Identity check against the store that minted this snapshot.
    pub(crate) fn check_ownership(&self, candidate: &Arc<Shared>) -> bool {
        std::ptr::eq(self.owner.as_ptr(), Arc::as_ptr(candidate))
    }

    /// The frozen contents, or `None` after an explicit release.
    pub(crate) fn entries(&self) -> Option<Arc<Entries>> {
        self.frozen.lock().clone()
    }

    /// Drop the frozen contents. Returns false if already released.
    pub(crate) fn release(&self) -> bool {
        self.frozen.lock().take().is_some()
    }
}

impl Snapshot for MemSnapshot {
    fn is_released(&self) -> bool {
        if self.frozen.lock().is_none() {
            return true;
        }
        match self.owner.upgrade() {
            Some(owner) => owner.is_closed(),
            None => true,
        }
    }
}

impl std::fmt::Debug for MemSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemSnapshot")
            .field("released", &self.is_released())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem::MemStore;
    use crate::traits::Store;

    #[test]
    fn test_release_is_idempotent() {
        let store = MemStore::new();
        let snapshot = store.obtain_snapshot().unwrap();
        assert!(!snapshot.is_released());

        assert!(snapshot.release());
        assert!(snapshot.is_released());
        assert!(!snapshot.release());
        assert!(snapshot.is_released());
        assert!(snapshot.entries().is_none());
    }

    #[test]
    fn test_released_when_owner_closed() {
        let store = MemStore::new();
        let snapshot = store.obtain_snapshot().unwrap();
        store.close();
        assert!(snapshot.is_released());
        // Contents are only dropped by an explicit release.
        assert!(snapshot.entries().is_some());
    }

    #[test]
    fn test_released_when_owner_dropped() {
        let store = MemStore::new();
        let snapshot = store.obtain_snapshot().unwrap();
        drop(store);
        assert!(snapshot.is_released());
    }

    #[test]
    fn test_ownership_is_identity() {
        let a = MemStore::new();
        let b = MemStore::new();
        let snapshot = a.obtain_snapshot().unwrap();

        assert!(snapshot.check_ownership(a.shared()));
        assert!(snapshot.check_ownership(a.clone().shared()));
        assert!(!snapshot.check_ownership(b.shared()));
    }

    #[test]
    fn test_frozen_contents() {
        let store = MemStore::new();
        store.put(b"k", Some(b"v"), false).unwrap();
        let snapshot = store.obtain_snapshot().unwrap();
        store.put(b"k", Some(b"changed"), false).unwrap();

        let entries = snapshot.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.values().next().unwrap().as_bytes(), b"v");
    }
}
