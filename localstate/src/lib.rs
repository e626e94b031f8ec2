//! Local persisted state for the agora front-end.
//!
//! Every interactive feature (to-do list, messages, reactions, notification
//! dismissal, draft settings) keeps its canonical state in memory and mirrors
//! it to a durable client-side key-value store. This crate owns that pattern
//! and the feature models built on it. It is UI-framework agnostic so the
//! Leptos client and plain unit tests consume it the same way.
//!
//! LAYERS
//! ======
//! - [`backend`]: raw string key-value stores (`localStorage`, memory).
//! - [`adapter`]: JSON read/write over a backend, failures swallowed.
//! - [`hydration`]: availability check and load-before-mutate phases.
//! - [`store`]: optimistic mutator tying state, reducer, and adapter together.
//! - feature modules: reducers plus pure derived views.

pub mod adapter;
pub mod backend;
pub mod error;
pub mod hydration;
pub mod messages;
pub mod notifications;
pub mod poll;
pub mod reactions;
pub mod reputation;
pub mod settings;
pub mod store;
pub mod timestamp;
pub mod todo;

pub use adapter::PersistenceAdapter;
pub use backend::{MemoryBackend, StorageBackend, UnavailableBackend};
pub use error::StoreError;
pub use hydration::{HydrationGuard, HydrationPhase};
pub use store::{PersistedStore, Reducer};
