//! HTTP utilities for API integrations.

use serde::de::DeserializeOwned;

use crate::error::TrackerError;

/// Extension trait for reqwest::Response to handle common error patterns.
#[async_trait::async_trait]
pub trait ResponseExt {
    /// Ensure the response status is successful, returning an error with details if not.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Http`] if the response status is not successful (2xx),
    /// including the status code and response body.
    async fn ensure_success(self, api_name: &str) -> Result<Self, TrackerError>
    where
        Self: Sized;
}

#[async_trait::async_trait]
impl ResponseExt for reqwest::Response {
    async fn ensure_success(self, api_name: &str) -> Result<Self, TrackerError> {
        if !self.status().is_success() {
            let status = self.status();
            let body = self.text().await.unwrap_or_default();
            return Err(TrackerError::Http {
                api: api_name.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(self)
    }
}

/// Decode a response body, keeping transport and parse failures apart.
///
/// # Errors
///
/// Returns [`TrackerError::Parse`] if the body is not valid JSON for `T`
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, TrackerError> {
    Ok(serde_json::from_str(body)?)
}
