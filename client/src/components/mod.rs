//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and feature widgets while reading/writing
//! persisted stores from Leptos context providers.

pub mod leaderboard;
pub mod live_poll;
pub mod nav;
pub mod post_body;
pub mod reaction_bar;
