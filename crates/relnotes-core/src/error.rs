use std::path::PathBuf;

use relnotes_ai::SummarizationError;
use relnotes_integrations::TrackerError;
use thiserror::Error;

/// Fatal failure of a release-notes run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Transport or parse failure while reading the tracker
    #[error(transparent)]
    Fetch(#[from] TrackerError),

    #[error("Failed to summarize story {story_id}: {source}")]
    Summarization {
        story_id: i64,
        #[source]
        source: SummarizationError,
    },
}

/// Failure while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
