//! Persisted session for the current browser profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity is the only state that survives a reload. It is read once
//! after the app mounts, so the server render and the first client render both
//! see an unloaded store. It is written only through [`SessionStore::set`] and
//! [`SessionStore::clear`]. Route gating reads [`SessionStore::is_loaded`] and
//! [`SessionStore::is_authenticated`].
//!
//! ERROR HANDLING
//! ==============
//! An unreadable record is treated as "signed out", never as a failure.
//! Write failures are returned to the caller but the in-memory session still
//! reflects the latest `set`/`clear`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::router::{Screen, SectionRouter, screen_while_restoring};
use crate::net::types::Identity;
use crate::util::storage::{BrowserStorage, SessionStorage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Current identity mirrored to a storage backend under one key.
#[derive(Clone, Debug)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
    key: String,
    identity: Option<Identity>,
    loaded: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty store; call [`Self::load`] to pick up a persisted identity.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into(), identity: None, loaded: false }
    }

    /// Store with any persisted identity already loaded.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.load();
        store
    }

    /// Re-read the persisted identity, replacing the in-memory one.
    pub fn load(&mut self) -> Option<&Identity> {
        self.identity = read_identity(&self.storage, &self.key);
        self.loaded = true;
        self.identity.as_ref()
    }

    /// Whether the persisted record has been read since construction.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Screen for the router's active section under this session.
    pub fn screen(&self, router: &SectionRouter) -> Screen {
        if self.loaded { router.screen(self.is_authenticated()) } else { screen_while_restoring(router.active()) }
    }

    /// Make `identity` current and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if encoding or the storage write fails. The
    /// in-memory session is updated regardless.
    pub fn set(&mut self, identity: Identity) -> Result<(), SessionError> {
        log::info!("session started for {}", identity.id);
        let encoded = serde_json::to_string(&identity);
        self.identity = Some(identity);
        self.loaded = true;
        self.storage.write(&self.key, &encoded?)?;
        Ok(())
    }

    /// Drop the session and send the router back to `home`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the persisted record could not be
    /// removed. Memory and router are reset regardless.
    pub fn clear(&mut self, router: &mut SectionRouter) -> Result<(), SessionError> {
        if self.identity.take().is_some() {
            log::info!("session cleared");
        }
        router.reset();
        self.storage.remove(&self.key)?;
        Ok(())
    }
}

/// Read and decode the identity stored at `key`.
///
/// Absent and malformed records both yield `None`.
pub fn read_identity<S: SessionStorage>(storage: &S, key: &str) -> Option<Identity> {
    let raw = storage.read(key)?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            log::warn!("ignoring unreadable session record at {key}: {e}");
            None
        }
    }
}
