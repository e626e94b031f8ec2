//! Browser `localStorage` backend for persisted stores and UI drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserStorage`] is the only place that touches `web_sys::Storage`.
//! Without the `hydrate` feature (server rendering, native tests) it reports
//! itself unavailable, so every store falls back to its default and every
//! write becomes a no-op.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use localstate::{PersistenceAdapter, StorageBackend, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `window.localStorage`, when the page has one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

/// Map a thrown DOM exception onto the store error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn classify_js_error(key: &str, bytes: usize, message: &str) -> StoreError {
    if message.contains("QuotaExceeded") || message.contains("NS_ERROR_DOM_QUOTA_REACHED") {
        StoreError::QuotaExceeded { key: key.to_owned(), bytes }
    } else {
        StoreError::Backend(message.to_owned())
    }
}

impl StorageBackend for BrowserStorage {
    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            local_storage().is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| classify_js_error(key, 0, &format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| classify_js_error(key, key.len() + value.len(), &format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| classify_js_error(key, 0, &format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

/// Adapter over the browser store.
#[must_use]
pub fn browser_adapter() -> PersistenceAdapter<BrowserStorage> {
    PersistenceAdapter::new(BrowserStorage)
}

/// Load a JSON draft from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    browser_adapter().read(key, None)
}

/// Save a JSON draft to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    browser_adapter().write(key, value);
}

/// Forget the draft stored under `key`.
pub fn clear_json(key: &str) {
    browser_adapter().remove(key);
}
