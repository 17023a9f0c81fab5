//! Key-value storage backends for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs read/write/remove of string records. In the
//! browser that is `localStorage`; natively (SSR, tests) it is either a no-op
//! backend or a shared in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Failures writing to a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled).
    #[error("local storage unavailable")]
    Unavailable,

    /// The backend rejected the write (quota, privacy mode).
    #[error("local storage write failed: {0}")]
    Write(String),
}

/// String key-value storage used for persisted client state.
pub trait SessionStorage {
    /// Read the raw record stored at `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` at `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend is unavailable or rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the record at `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend is unavailable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage` for the current origin.
///
/// Outside the `hydrate` build there is no browser, so reads return `None`
/// and writes succeed without effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-memory storage shared between clones.
///
/// Two stores built over clones of the same `MemoryStorage` see each other's
/// writes, which is how tests model "a new tab over the same origin".
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `write` calls across all clones.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    /// Insert a raw record without counting it as a write.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
