//! JSON persistence over a string backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Features never touch a backend directly. They read with a default and
//! write best-effort: UI availability wins over durability, so a failed write
//! leaves the in-memory state as the only copy and is only logged.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::StorageBackend;
use crate::error::StoreError;

/// Reads and writes JSON values under string keys.
#[derive(Clone, Debug, Default)]
pub struct PersistenceAdapter<B> {
    backend: B,
}

impl<B: StorageBackend> PersistenceAdapter<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether the underlying store can be used right now.
    #[must_use]
    pub fn is_storage_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Load the value stored under `key`, or `default` when absent,
    /// unreadable, or unavailable.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(StoreError::Unavailable) => default,
            Err(e) => {
                log::warn!("localstate: read of {key} failed, using default: {e}");
                default
            }
        }
    }

    /// Load the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage is missing, the
    /// backend's own error on read failure, or [`StoreError::Deserialize`]
    /// when the stored text does not parse as `T`.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        if !self.is_storage_available() {
            return Err(StoreError::Unavailable);
        }
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Deserialize { key: key.to_owned(), source })
    }

    /// Persist `value` under `key`. Failures are logged and dropped.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match self.try_write(key, value) {
            Ok(()) | Err(StoreError::Unavailable) => {}
            Err(e) => log::warn!("localstate: write of {key} dropped: {e}"),
        }
    }

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] when `value` cannot be encoded, and
    /// the backend's error (including quota exhaustion) when it rejects the
    /// write.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        if !self.is_storage_available() {
            return Err(StoreError::Unavailable);
        }
        let raw = serde_json::to_string(value)
            .map_err(|source| StoreError::Serialize { key: key.to_owned(), source })?;
        self.backend.set_item(key, &raw)
    }

    /// Delete the value under `key`. Failures are logged and dropped.
    pub fn remove(&self, key: &str) {
        if !self.is_storage_available() {
            return;
        }
        if let Err(e) = self.backend.remove_item(key) {
            log::warn!("localstate: remove of {key} failed: {e}");
        }
    }
}
