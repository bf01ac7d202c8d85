use async_trait::async_trait;

use crate::error::TrackerError;
use crate::shortcut::{CustomField, Epic, Group, StorySearchPage};

/// Read-only view of a project-tracking system, as used by the release-notes pipeline
#[async_trait]
pub trait StoryTracker: Send + Sync {
    /// Run a story search and return its first page
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    async fn search_stories(&self, query: &str) -> Result<StorySearchPage, TrackerError>;

    /// Follow a `next` cursor returned by a previous page
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    async fn next_page(&self, next: &str) -> Result<StorySearchPage, TrackerError>;

    /// List every epic in the workspace
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    async fn list_epics(&self) -> Result<Vec<Epic>, TrackerError>;

    /// List custom field definitions
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    async fn list_custom_fields(&self) -> Result<Vec<CustomField>, TrackerError>;

    /// List groups (teams)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    async fn list_groups(&self) -> Result<Vec<Group>, TrackerError>;

    /// Get the system name
    #[must_use]
    fn system_name(&self) -> &'static str;
}
