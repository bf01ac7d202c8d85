// ============================================================================
// Constants
// ============================================================================

/// Shortcut REST API base URL (v3)
pub const SHORTCUT_BASE_URL: &str = "https://api.app.shortcut.com/api/v3";

/// Path prefix Shortcut puts on `next` cursors
pub const API_PATH_PREFIX: &str = "/api/v3";

/// Story search endpoint, paginated through the `next` cursor
pub const SEARCH_STORIES_ENDPOINT: &str = "/search/stories";

/// Full epic listing (not paginated)
pub const EPICS_ENDPOINT: &str = "/epics";

pub const CUSTOM_FIELDS_ENDPOINT: &str = "/custom-fields";

/// Groups are called "teams" in the Shortcut UI
pub const GROUPS_ENDPOINT: &str = "/groups";

/// Per-request timeout for every Shortcut call
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
