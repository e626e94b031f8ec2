//! Networking modules for the server's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls from the browser and `types` defines the shared
//! request/response schema, also used by the server crate.

pub mod api;
pub mod types;
