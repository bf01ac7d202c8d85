//! Run configuration
//!
//! Loaded once at startup from an optional TOML file plus environment
//! overrides, then passed by reference to every component.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use relnotes_ai::AiConfig;
use relnotes_integrations::shortcut::SHORTCUT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::priority::Priority;

/// Story permalinks are `<permalink_base>/<story id>`
pub const DEFAULT_PERMALINK_BASE: &str = "https://app.shortcut.com/toursbylocals/story";

/// Custom field holding the story priority
pub const DEFAULT_PRIORITY_FIELD_ID: &str = "66a8f58d-cc9a-4416-8e0d-0aaf813696a5";

const DEFAULT_P0_VALUE_ID: &str = "66b9f58d-5129-4d3e-b8c4-12c01193a81a";
const PLACEHOLDER_GROUP_ID: &str = "66345678-1234-1234-1234-123456789012";

/// Full run configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub shortcut: ShortcutConfig,
    pub ai: AiConfig,
    pub priority: PriorityConfig,
    pub teams: TeamConfig,
    pub pipeline: PipelineSettings,
}

/// Shortcut API access
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub token: Option<String>,
    pub api_url: String,
    pub permalink_base: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: SHORTCUT_BASE_URL.to_string(),
            permalink_base: DEFAULT_PERMALINK_BASE.to_string(),
        }
    }
}

/// One entry of the priority value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriorityRule {
    pub label: Priority,
    pub include: bool,
}

/// Priority custom field and its value-id table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PriorityConfig {
    pub field_id: String,
    /// Value id -> (label, include)
    pub values: BTreeMap<String, PriorityRule>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(
            DEFAULT_P0_VALUE_ID.to_string(),
            PriorityRule {
                label: Priority::P0,
                include: true,
            },
        );
        Self {
            field_id: DEFAULT_PRIORITY_FIELD_ID.to_string(),
            values,
        }
    }
}

/// Team (group) filtering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamConfig {
    /// When false every story passes the group filter
    pub enabled: bool,
    /// Group id -> team name; the name is informational
    pub valid: BTreeMap<String, String>,
}

impl Default for TeamConfig {
    fn default() -> Self {
        let mut valid = BTreeMap::new();
        valid.insert(PLACEHOLDER_GROUP_ID.to_string(), "team name".to_string());
        Self {
            enabled: true,
            valid,
        }
    }
}

/// What to do when summarizing a single story fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFailurePolicy {
    /// Stop the run and report the error
    #[default]
    Abort,
    /// Leave the story out and keep going
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub on_summary_failure: SummaryFailurePolicy,
}

impl Config {
    /// Default config file location (`<config dir>/relnotes/config.toml`)
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("relnotes").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `SHORTCUT_TOKEN` and `OPENAI_API_KEY` from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var("SHORTCUT_TOKEN").ok(),
            std::env::var("OPENAI_API_KEY").ok(),
        )
    }

    /// Override credentials; blank values are ignored
    #[must_use]
    pub fn with_overrides(
        mut self,
        shortcut_token: Option<String>,
        openai_key: Option<String>,
    ) -> Self {
        if let Some(token) = shortcut_token.filter(|t| !t.trim().is_empty()) {
            self.shortcut.token = Some(token);
        }
        if let Some(key) = openai_key.filter(|k| !k.trim().is_empty()) {
            self.ai.api_key = Some(key);
        }
        self
    }

    /// Shortcut token, ignoring blank values
    #[must_use]
    pub fn shortcut_token(&self) -> Option<&str> {
        self.shortcut
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[shortcut]
token = "file-token"
permalink_base = "https://app.shortcut.com/acme/story"

[ai]
model = "gpt-4o-mini"
temperature = 0.1

[priority]
field_id = "f-priority"

[priority.values.v-p0]
label = "P0"
include = true

[priority.values.v-p05]
label = "P0.5"
include = true

[priority.values.v-p2]
label = "P2"
include = false

[teams]
enabled = false

[teams.valid]
g-web = "Web"

[pipeline]
on_summary_failure = "skip"
"#;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.shortcut.api_url, SHORTCUT_BASE_URL);
        assert_eq!(config.priority.field_id, DEFAULT_PRIORITY_FIELD_ID);
        assert_eq!(
            config.priority.values.get(DEFAULT_P0_VALUE_ID),
            Some(&PriorityRule {
                label: Priority::P0,
                include: true
            })
        );
        assert!(config.teams.enabled);
        assert_eq!(config.pipeline.on_summary_failure, SummaryFailurePolicy::Abort);
        assert!(config.shortcut_token().is_none());
    }

    #[test]
    fn test_parse_sample() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.shortcut_token(), Some("file-token"));
        // Unset keys keep their defaults
        assert_eq!(config.shortcut.api_url, SHORTCUT_BASE_URL);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.priority.values.len(), 3);
        assert_eq!(config.priority.values["v-p05"].label, Priority::P0Half);
        assert!(!config.priority.values["v-p2"].include);
        assert!(!config.teams.enabled);
        assert_eq!(config.teams.valid["g-web"], "Web");
        assert_eq!(config.pipeline.on_summary_failure, SummaryFailurePolicy::Skip);
    }

    #[test]
    fn test_unknown_priority_label_rejected() {
        let input = "[priority.values.v-x]\nlabel = \"P9\"\ninclude = true\n";
        assert!(toml::from_str::<Config>(input).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let config =
            config.with_overrides(Some("env-token".to_string()), Some("sk-env".to_string()));
        assert_eq!(config.shortcut_token(), Some("env-token"));
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_blank_env_overrides_ignored() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let config = config.with_overrides(Some(String::new()), Some("  ".to_string()));
        assert_eq!(config.shortcut_token(), Some("file-token"));
        assert!(config.ai.api_key.is_none());
    }

    #[test]
    fn test_blank_token_is_missing() {
        let mut config = Config::default();
        config.shortcut.token = Some(" ".to_string());
        assert!(config.shortcut_token().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.shortcut.permalink_base, "https://app.shortcut.com/acme/story");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[shortcut\n").unwrap();
        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
