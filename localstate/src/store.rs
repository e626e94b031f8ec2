//! Optimistic persisted store.
//!
//! DESIGN
//! ======
//! A store owns one feature's canonical state under one storage key.
//! `dispatch` runs the feature's pure reducer, swaps the in-memory state in
//! synchronously, then writes the new state through the adapter before
//! returning. Writes therefore land in mutation order and the last write
//! wins; there is no merge step.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::adapter::PersistenceAdapter;
use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::hydration::{HydrationGuard, HydrationPhase};

/// Pure state transition for a feature.
pub trait Reducer: Sized {
    type Action;

    /// Compute the next state. `None` rejects the action and leaves the
    /// current state (and storage) untouched.
    fn reduce(&self, action: Self::Action) -> Option<Self>;
}

/// In-memory state mirrored to durable storage under `key`.
#[derive(Clone, Debug)]
pub struct PersistedStore<T, B> {
    key: String,
    default: T,
    state: T,
    guard: HydrationGuard,
    adapter: PersistenceAdapter<B>,
}

impl<T, B> PersistedStore<T, B>
where
    T: Clone + Serialize + DeserializeOwned,
    B: StorageBackend,
{
    /// Build an unhydrated store holding `default`.
    pub fn new(key: impl Into<String>, default: T, backend: B) -> Self {
        Self {
            key: key.into(),
            state: default.clone(),
            default,
            guard: HydrationGuard::new(),
            adapter: PersistenceAdapter::new(backend),
        }
    }

    /// Build and immediately hydrate.
    pub fn open(key: impl Into<String>, default: T, backend: B) -> Self {
        let mut store = Self::new(key, default, backend);
        store.hydrate();
        store
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> HydrationPhase {
        self.guard.phase()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.guard.is_ready()
    }

    #[must_use]
    pub fn adapter(&self) -> &PersistenceAdapter<B> {
        &self.adapter
    }

    /// Load persisted state once. Later calls are no-ops.
    pub fn hydrate(&mut self) {
        if !self.guard.begin() {
            return;
        }
        if self.adapter.is_storage_available() {
            self.state = self.adapter.read(&self.key, self.default.clone());
            log::debug!("localstate: hydrated {}", self.key);
        } else {
            log::debug!("localstate: storage unavailable, {} uses default", self.key);
        }
        self.guard.finish();
    }

    /// Overwrite the whole state and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotReady`] before hydration finished.
    pub fn replace(&mut self, next: T) -> Result<(), StoreError> {
        self.guard.ensure_ready()?;
        self.state = next;
        self.adapter.write(&self.key, &self.state);
        Ok(())
    }

    /// Drop the persisted value and reset memory to the default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotReady`] before hydration finished.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.guard.ensure_ready()?;
        self.adapter.remove(&self.key);
        self.state = self.default.clone();
        Ok(())
    }
}

impl<T, B> PersistedStore<T, B>
where
    T: Reducer + Clone + Serialize + DeserializeOwned,
    B: StorageBackend,
{
    /// Apply `action` optimistically and persist the result.
    ///
    /// Returns `Ok(true)` when the state changed, `Ok(false)` when the
    /// reducer rejected the action.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotReady`] before hydration finished. Storage
    /// failures are logged, never returned.
    pub fn dispatch(&mut self, action: T::Action) -> Result<bool, StoreError> {
        self.guard.ensure_ready()?;
        let Some(next) = self.state.reduce(action) else {
            return Ok(false);
        };
        self.state = next;
        self.adapter.write(&self.key, &self.state);
        Ok(true)
    }
}
