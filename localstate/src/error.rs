//! Error type shared by backends, the adapter, and stores.

use crate::hydration::HydrationPhase;

/// Failure surfaced by the storage layer.
///
/// The adapter's infallible entry points log and swallow these; only the
/// `try_*` variants and [`crate::PersistedStore::dispatch`] return them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No durable store exists in this environment (SSR, private mode).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write because it is full.
    #[error("storage quota exceeded writing {key} ({bytes} bytes)")]
    QuotaExceeded { key: String, bytes: usize },
    /// The backend reported an error of its own.
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The in-memory value could not be encoded as JSON.
    #[error("failed to serialize value for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The stored text is not valid JSON for the expected type.
    #[error("failed to parse stored value for {key}: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A mutation arrived before persisted state finished loading.
    #[error("store is not ready (phase: {0:?})")]
    NotReady(HydrationPhase),
}
