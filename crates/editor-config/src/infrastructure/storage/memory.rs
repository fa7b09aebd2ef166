//! In-memory key-value storage.
//!
//! Holds values in a `Mutex<HashMap>` for the lifetime of the adapter.
//! Besides serving embedders that must not write to disk, it is the storage
//! used by the store's tests: values can be seeded with [`MemoryStorage::insert`]
//! and inspected with [`MemoryStorage::value`] without going through the
//! trait.
//!
//! # `failing` mode
//!
//! [`MemoryStorage::failing`] returns an adapter whose `get` and `set` always
//! fail with [`StorageError::Unavailable`].  Use it to check that storage
//! failures stay invisible to the store's callers.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::application::collaborators::{KeyValueStorage, StorageError};

/// Key-value storage that lives only in memory.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    should_fail: bool,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage whose every operation fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Stores a value directly, bypassing the failure flag.
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    /// Reads a value directly, bypassing the failure flag.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.should_fail {
            return Err(StorageError::Unavailable("mock failure".into()));
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.should_fail {
            return Err(StorageError::Unavailable("mock failure".into()));
        }
        self.insert(key, value);
        Ok(())
    }
}
