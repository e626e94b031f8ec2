//! Embedded code editor routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor itself is an external service. These handlers only map a
//! project id to the URL that opens its workspace folder, for the client to
//! put in an iframe. No authentication is enforced here.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use client::net::types::{EditorLink, EditorRequest, is_valid_project_id};
use url::Url;

use crate::config::ServerConfig;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("project id is required")]
    MissingProject,
    #[error("invalid project id {0:?}: expected 1-64 of [A-Za-z0-9_-]")]
    InvalidProject(String),
    #[error("editor base URL {url:?} is unusable: {source}")]
    BaseUrl { url: String, source: url::ParseError },
}

pub(crate) fn editor_error_to_status(err: &EditorError) -> StatusCode {
    match err {
        EditorError::MissingProject | EditorError::InvalidProject(_) => StatusCode::BAD_REQUEST,
        EditorError::BaseUrl { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct EditorQuery {
    pub project: Option<String>,
}

/// `GET /api/editor?project=<id>`: editor URL for a project workspace.
pub async fn get_editor(
    State(state): State<AppState>,
    Query(query): Query<EditorQuery>,
) -> Result<Json<EditorLink>, StatusCode> {
    respond(&state.config, query.project.as_deref())
}

/// `POST /api/editor` with `{ "project": "<id>" }`: same as the GET form.
pub async fn post_editor(
    State(state): State<AppState>,
    Json(body): Json<EditorRequest>,
) -> Result<Json<EditorLink>, StatusCode> {
    respond(&state.config, Some(&body.project))
}

fn respond(config: &ServerConfig, project: Option<&str>) -> Result<Json<EditorLink>, StatusCode> {
    match editor_link(config, project) {
        Ok(link) => {
            tracing::debug!(project = %link.project, "editor link resolved");
            Ok(Json(link))
        }
        Err(e) => {
            let status = editor_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "editor link failed");
            } else {
                tracing::debug!(error = %e, "editor link rejected");
            }
            Err(status)
        }
    }
}

/// Resolve `project` to `<base>/?folder=<workspace_root>/<project>`.
pub(crate) fn editor_link(config: &ServerConfig, project: Option<&str>) -> Result<EditorLink, EditorError> {
    let project = project.map(str::trim).filter(|p| !p.is_empty()).ok_or(EditorError::MissingProject)?;
    if !is_valid_project_id(project) {
        return Err(EditorError::InvalidProject(project.to_owned()));
    }

    let mut url = Url::parse(&format!("{}/", config.editor_base_url))
        .map_err(|source| EditorError::BaseUrl { url: config.editor_base_url.clone(), source })?;
    let folder = format!("{}/{project}", config.workspace_root);
    url.query_pairs_mut().append_pair("folder", &folder);

    Ok(EditorLink { project: project.to_owned(), url: url.into() })
}
