//! Named in-memory stores.
//!
//! `MemEnv` is the construction entry point for in-memory stores that need a
//! notion of "already exists", so `create_if_missing` and `error_if_exists`
//! behave the way they do against a directory on disk. An environment is an
//! ordinary value: create one, share it, drop it. Nothing is process-global.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::store::MemStore;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::traits::Store;

#[derive(Default)]
pub struct MemEnv {
    stores: DashMap<String, MemStore>,
}

impl MemEnv {
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }

    /// Open the store registered under `name`.
    ///
    /// An open store is shared: the returned handle refers to the same instance
    /// as every other open handle for `name`. A closed store is reopened as a new
    /// instance holding the closed one's contents; snapshots of the old instance
    /// are not accepted by the new one.
    pub fn open(&self, name: &str, options: &Options) -> Result<MemStore> {
        match self.stores.entry(name.to_string()) {
            Entry::Occupied(mut occupied) => {
                if options.error_if_exists {
                    return Err(Error::InvalidArgument(format!(
                        "{}: exists (error_if_exists is true)",
                        name
                    )));
                }
                if !occupied.get().is_closed() {
                    return Ok(occupied.get().clone());
                }
                tracing::debug!("Reopening closed store {}", name);
                let reopened = MemStore::reopen(occupied.get(), options);
                occupied.insert(reopened.clone());
                Ok(reopened)
            }
            Entry::Vacant(vacant) => {
                if !options.create_if_missing {
                    return Err(Error::InvalidArgument(format!(
                        "{}: does not exist (create_if_missing is false)",
                        name
                    )));
                }
                let store = MemStore::named(name, options);
                vacant.insert(store.clone());
                Ok(store)
            }
        }
    }

    /// Forget the store registered under `name`. Handles that are still held
    /// keep working as anonymous stores; the next `open` of `name` starts from
    /// an empty store.
    pub fn destroy(&self, name: &str) -> bool {
        match self.stores.remove(name) {
            Some((_, store)) => {
                store.detach();
                tracing::debug!("Destroyed store {}", name);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stores.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stores.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }
}
