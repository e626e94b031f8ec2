//! Raw string key-value backends.
//!
//! DESIGN
//! ======
//! Backends speak strings only; JSON encoding lives in the adapter. The
//! browser backend is implemented in the client crate behind its `hydrate`
//! feature; this crate ships an in-memory backend for tests and native use,
//! and an always-unavailable backend for server-side rendering.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;

/// A durable string key-value store scoped to one client.
pub trait StorageBackend {
    /// Whether the store can be touched at all in the current environment.
    fn is_available(&self) -> bool {
        true
    }

    /// Fetch the raw value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend with an optional byte quota.
///
/// Clones share the same underlying map, so a test can hand one clone to a
/// store and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    items: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once keys plus values exceed `bytes`,
    /// mirroring the browser's per-origin `localStorage` limit.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { items: Arc::default(), quota_bytes: Some(bytes) }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |items| items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw stored text for `key`, bypassing the adapter.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().map(|items| items.get(key).cloned()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.items.lock().map_err(|_| StoreError::Unavailable)
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.lock()?;
        if let Some(quota) = self.quota_bytes {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let bytes = key.len() + value.len();
            if others + bytes > quota {
                return Err(StoreError::QuotaExceeded { key: key.to_owned(), bytes });
            }
        }
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Backend for environments without a durable store, e.g. server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableBackend;

impl StorageBackend for UnavailableBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}
