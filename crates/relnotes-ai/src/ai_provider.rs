use async_trait::async_trait;
use serde::Serialize;

use crate::ai_config::AiConfig;
use crate::providers::openai::OpenAiProvider;
use crate::summarizer::SummarizationError;

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Trait for AI providers
#[async_trait]
pub trait AiProviderTrait: Send + Sync {
    /// Generate a reply for a chat conversation
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SummarizationError>;

    /// Get the model name being used
    fn model_name(&self) -> &str;
}

/// Create a provider instance based on configuration
///
/// Both backends speak the OpenAI chat-completions protocol; they differ in
/// base URL, model and whether a bearer token is sent.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created
pub fn create_provider(config: &AiConfig) -> Result<Box<dyn AiProviderTrait>, SummarizationError> {
    let base_url = config.effective_base_url();
    log::debug!(
        "Using {:?} backend at {base_url} with model {}",
        config.backend(),
        config.effective_model()
    );

    Ok(Box::new(OpenAiProvider::new(
        config.effective_api_key(),
        config.effective_model(),
        &base_url,
        config.temperature,
        config.timeout_secs,
    )?))
}
