//! Shortcut (app.shortcut.com) REST API v3 integration
//!
//! This module provides the HTTP client used to search completed stories and
//! list the epics, custom fields and groups of a workspace.

mod client;
mod schema;
mod types;

pub use client::{rebase_next_path, ShortcutClient};
pub use schema::{
    CUSTOM_FIELDS_ENDPOINT, EPICS_ENDPOINT, GROUPS_ENDPOINT, REQUEST_TIMEOUT_SECS,
    SEARCH_STORIES_ENDPOINT, SHORTCUT_BASE_URL,
};
pub use types::{
    CustomField, CustomFieldEnumValue, CustomFieldValue, Epic, Group, RawStory, StorySearchPage,
};
