//! Shared DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Longest accepted project identifier.
pub const MAX_PROJECT_ID_LEN: usize = 64;

/// Body of `POST /api/editor` and query of `GET /api/editor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorRequest {
    pub project: String,
}

/// Embeddable editor location for a project workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorLink {
    pub project: String,
    pub url: String,
}

/// Project ids are 1..=64 chars of ASCII letters, digits, `_` and `-`, so they
/// are safe as a path segment and need no escaping in a query string.
#[must_use]
pub fn is_valid_project_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_PROJECT_ID_LEN
        && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
