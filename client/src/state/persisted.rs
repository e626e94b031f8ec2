//! Reactive wrapper around a `localstate` store.
//!
//! DESIGN
//! ======
//! Each feature gets its own `Persisted<T>` built once in `App` and handed out
//! through context. The store starts unhydrated; an effect hydrates it from
//! `localStorage`. Effects never run during server rendering, and in the
//! browser they run after the hydration pass, so storage is never read while
//! markup is being produced and SSR output always reflects the defaults.
//! Until that effect runs, `dispatch` is refused by the hydration guard.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use leptos::prelude::*;
use localstate::{HydrationPhase, PersistedStore, Reducer, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::ui_persistence::BrowserStorage;

pub type BrowserStore<T> = PersistedStore<T, BrowserStorage>;

/// Handle to one feature's persisted state. Cheap to copy.
pub struct Persisted<T: Send + Sync + 'static> {
    store: RwSignal<BrowserStore<T>>,
}

impl<T: Send + Sync + 'static> Clone for Persisted<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Persisted<T> {}

impl<T> Persisted<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Create the store and schedule its hydration. Call inside a component.
    pub fn new(key: &str, default: T) -> Self {
        let store = RwSignal::new(PersistedStore::new(key, default, BrowserStorage));
        Effect::new(move || store.update(PersistedStore::hydrate));
        Self { store }
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.store.with(|s| f(s.state()))
    }

    pub fn get(&self) -> T {
        self.with(Clone::clone)
    }

    pub fn phase(&self) -> HydrationPhase {
        self.store.with(PersistedStore::phase)
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == HydrationPhase::Ready
    }

    /// Remove the stored value and reset to the default.
    pub fn clear(&self) {
        self.store.update(|s| {
            let key = s.key().to_owned();
            log_refusal(&key, s.clear());
        });
    }
}

impl<T> Persisted<T>
where
    T: Reducer + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Apply `action` and persist. Returns whether the state changed.
    pub fn dispatch(&self, action: T::Action) -> bool {
        let mut changed = false;
        self.store.update(|s| {
            let key = s.key().to_owned();
            changed = log_refusal(&key, s.dispatch(action)).unwrap_or(false);
        });
        changed
    }
}

/// Log a refused mutation (store still hydrating) and pass the result on.
fn log_refusal<V>(key: &str, result: Result<V, StoreError>) -> Option<V> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("persisted: {key} mutation ignored: {e}");
            None
        }
    }
}
