//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EditorLink, is_valid_project_id};

#[cfg(any(test, feature = "hydrate"))]
fn editor_endpoint(project: &str) -> String {
    format!("/api/editor?project={project}")
}

#[cfg(any(test, feature = "hydrate"))]
fn editor_request_failed_message(status: u16) -> String {
    format!("editor request failed: {status}")
}

fn invalid_project_message(project: &str) -> String {
    format!("invalid project id: {project:?}")
}

/// Resolve the embeddable editor URL for `project` via `GET /api/editor`.
///
/// # Errors
///
/// Returns an error string for invalid ids, transport failures, and non-OK
/// responses.
pub async fn fetch_editor_link(project: &str) -> Result<EditorLink, String> {
    if !is_valid_project_id(project) {
        return Err(invalid_project_message(project));
    }
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&editor_endpoint(project))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(editor_request_failed_message(resp.status()));
        }
        resp.json::<EditorLink>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
