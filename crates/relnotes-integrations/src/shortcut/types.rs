//! Shortcut API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Stories
// ============================================================================

/// A custom field value attached to a story
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomFieldValue {
    pub field_id: String,
    pub value_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A story as returned by the search endpoint
///
/// Only the attributes the release-notes pipeline reads are modeled; unknown
/// attributes are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawStory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Story points
    #[serde(default)]
    pub estimate: Option<i64>,
    #[serde(default)]
    pub iteration_id: Option<i64>,
    #[serde(default)]
    pub epic_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldValue>,
}

impl RawStory {
    /// Find the custom field entry with the given field id
    #[must_use]
    pub fn custom_field(&self, field_id: &str) -> Option<&CustomFieldValue> {
        self.custom_fields.iter().find(|f| f.field_id == field_id)
    }
}

/// One page of story search results
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorySearchPage {
    /// `null` and a missing key both mean "no stories on this page"
    #[serde(default)]
    pub data: Option<Vec<RawStory>>,
    /// Relative path of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl StorySearchPage {
    /// Split the page into its stories and the next-page cursor
    #[must_use]
    pub fn into_parts(self) -> (Vec<RawStory>, Option<String>) {
        (self.data.unwrap_or_default(), self.next)
    }
}

// ============================================================================
// Workspace metadata
// ============================================================================

/// Shortcut epic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Epic {
    pub id: i64,
    pub name: String,
}

/// Enum value of a custom field definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomFieldEnumValue {
    pub id: String,
    pub value: String,
}

/// Custom field definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<CustomFieldEnumValue>,
}

/// Shortcut group (team)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}
