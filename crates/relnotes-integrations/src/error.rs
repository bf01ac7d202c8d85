use thiserror::Error;

/// Errors raised while talking to the project-tracking API.
///
/// Every variant is fatal for a release-notes run.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The request never produced a response (DNS, TLS, timeout, connection reset)
    #[error("Request to tracker API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("{api} API error ({status}): {body}")]
    Http {
        api: String,
        status: u16,
        body: String,
    },

    /// The response body was not the JSON shape we expect
    #[error("Failed to parse tracker API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tracker URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
