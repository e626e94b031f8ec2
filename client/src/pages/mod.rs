//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin;
pub(crate) mod admin_registry;
pub mod community;
pub mod editor;
pub mod messages;
pub mod notifications;
pub mod settings;
pub mod todo;
