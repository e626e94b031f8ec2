//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Persisted feature state lives in `localstate` models wrapped by
//! [`persisted::Persisted`]; `auth` and `ui` are plain in-memory signals.

pub mod auth;
pub mod persisted;
pub mod ui;
