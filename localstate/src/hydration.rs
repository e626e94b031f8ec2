//! Load-before-mutate gating for persisted stores.
//!
//! A store starts `Uninitialized`, moves to `Hydrating` once when it is
//! mounted, and becomes `Ready` after its first read (or straight away when
//! storage is unavailable). Mutations are refused until `Ready` so initial
//! defaults never overwrite persisted data that has not been loaded yet.

#[cfg(test)]
#[path = "hydration_test.rs"]
mod hydration_test;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationPhase {
    #[default]
    Uninitialized,
    Hydrating,
    Ready,
}

/// Tracks one store's hydration phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HydrationGuard {
    phase: HydrationPhase,
}

impl HydrationGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> HydrationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == HydrationPhase::Ready
    }

    /// Enter `Hydrating`. Returns `false` when hydration already started.
    pub fn begin(&mut self) -> bool {
        if self.phase != HydrationPhase::Uninitialized {
            return false;
        }
        self.phase = HydrationPhase::Hydrating;
        true
    }

    /// Enter `Ready`. Only valid from `Hydrating`; other phases are left as is.
    pub fn finish(&mut self) {
        if self.phase == HydrationPhase::Hydrating {
            self.phase = HydrationPhase::Ready;
        }
    }

    /// Gate for mutations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotReady`] with the current phase until hydration
    /// has finished.
    pub fn ensure_ready(&self) -> Result<(), StoreError> {
        if self.is_ready() { Ok(()) } else { Err(StoreError::NotReady(self.phase)) }
    }
}
