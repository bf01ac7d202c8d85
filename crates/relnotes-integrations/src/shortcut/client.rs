//! Shortcut API client implementation

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::schema::{
    API_PATH_PREFIX, CUSTOM_FIELDS_ENDPOINT, EPICS_ENDPOINT, GROUPS_ENDPOINT,
    REQUEST_TIMEOUT_SECS, SEARCH_STORIES_ENDPOINT, SHORTCUT_BASE_URL,
};
use super::types::{CustomField, Epic, Group, StorySearchPage};
use crate::error::TrackerError;
use crate::http::{parse_body, ResponseExt};
use crate::traits::StoryTracker;

/// Shortcut API client
pub struct ShortcutClient {
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl ShortcutClient {
    /// Create a new Shortcut client
    ///
    /// # Arguments
    /// * `token` - Shortcut API token (Settings > API Tokens)
    /// * `base_url` - Optional API base URL, defaults to the public v3 API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(token: String, base_url: Option<String>) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url = base_url.unwrap_or_else(|| SHORTCUT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            token,
            base_url,
            client,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Make an authenticated GET request
    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TrackerError> {
        log::debug!("GET {url}");

        let body = self
            .client
            .get(url)
            .header("Shortcut-Token", &self.token)
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await?
            .ensure_success("Shortcut")
            .await?
            .text()
            .await?;

        parse_body(&body)
    }
}

#[async_trait]
impl StoryTracker for ShortcutClient {
    async fn search_stories(&self, query: &str) -> Result<StorySearchPage, TrackerError> {
        let url = self.build_url(SEARCH_STORIES_ENDPOINT);
        self.get(&url, &[("query", query)]).await
    }

    async fn next_page(&self, next: &str) -> Result<StorySearchPage, TrackerError> {
        let url = rebase_next_path(&self.base_url, next)?;
        self.get(&url, &[]).await
    }

    async fn list_epics(&self) -> Result<Vec<Epic>, TrackerError> {
        self.get(&self.build_url(EPICS_ENDPOINT), &[]).await
    }

    async fn list_custom_fields(&self) -> Result<Vec<CustomField>, TrackerError> {
        self.get(&self.build_url(CUSTOM_FIELDS_ENDPOINT), &[]).await
    }

    async fn list_groups(&self) -> Result<Vec<Group>, TrackerError> {
        self.get(&self.build_url(GROUPS_ENDPOINT), &[]).await
    }

    fn system_name(&self) -> &'static str {
        "Shortcut"
    }
}

/// Resolve a `next` cursor against the configured API base.
///
/// Shortcut hands back the next page as a path (`/api/v3/search/stories?...`).
/// The API prefix is stripped from the cursor and the remainder (with its
/// query) is appended to `base_url`, so a base behind a proxy path keeps its
/// prefix. Absolute cursors pointing at another host are rebased the same way.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidUrl`] if either part cannot be parsed
pub fn rebase_next_path(base_url: &str, next: &str) -> Result<String, TrackerError> {
    let base = Url::parse(base_url).map_err(|source| TrackerError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    let cursor = base.join(next).map_err(|source| TrackerError::InvalidUrl {
        url: next.to_string(),
        source,
    })?;

    let path = cursor.path();
    let rest = strip_path_prefix(path, base.path().trim_end_matches('/'))
        .or_else(|| strip_path_prefix(path, API_PATH_PREFIX))
        .unwrap_or(path);

    let mut rebased = format!("{}{rest}", base_url.trim_end_matches('/'));
    if let Some(query) = cursor.query() {
        rebased.push('?');
        rebased.push_str(query);
    }
    Ok(rebased)
}

/// `path` without `prefix`, only when the prefix ends on a segment boundary
fn strip_path_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    path.strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
}
