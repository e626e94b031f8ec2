//! Server configuration parsed from environment variables.
//!
//! Every setting has a default, so the server starts with an empty
//! environment. A value that is present but unusable is logged and replaced
//! by its default rather than aborting startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EDITOR_BASE_URL: &str = "http://localhost:8443";
pub const DEFAULT_WORKSPACE_ROOT: &str = "/workspaces";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the code editor service that renders the iframe, without a
    /// trailing `/`.
    pub editor_base_url: String,
    /// Absolute directory holding one folder per project, without a trailing `/`.
    pub workspace_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            editor_base_url: DEFAULT_EDITOR_BASE_URL.to_owned(),
            workspace_root: DEFAULT_WORKSPACE_ROOT.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `EDITOR_BASE_URL`: default `http://localhost:8443`
    /// - `WORKSPACE_ROOT`: default `/workspaces`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT").map_or(DEFAULT_PORT, |raw| parse_port(&raw));
        let editor_base_url =
            lookup("EDITOR_BASE_URL").map_or_else(|| DEFAULT_EDITOR_BASE_URL.to_owned(), |raw| parse_base_url(&raw));
        let workspace_root =
            lookup("WORKSPACE_ROOT").map_or_else(|| DEFAULT_WORKSPACE_ROOT.to_owned(), |raw| parse_workspace_root(&raw));
        Self { port, editor_base_url, workspace_root }
    }
}

fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            tracing::warn!(value = raw, default = DEFAULT_PORT, "invalid PORT; using default");
            DEFAULT_PORT
        }
    }
}

fn parse_base_url(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            url.as_str().trim_end_matches('/').to_owned()
        }
        _ => {
            tracing::warn!(value = raw, default = DEFAULT_EDITOR_BASE_URL, "invalid EDITOR_BASE_URL; using default");
            DEFAULT_EDITOR_BASE_URL.to_owned()
        }
    }
}

fn parse_workspace_root(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        tracing::warn!(value = raw, default = DEFAULT_WORKSPACE_ROOT, "WORKSPACE_ROOT must be absolute; using default");
        return DEFAULT_WORKSPACE_ROOT.to_owned();
    }
    trimmed.trim_end_matches('/').to_owned()
}
