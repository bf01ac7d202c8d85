//! Release-note summarizer
//!
//! Rewrites a story title and description into a single plain-language
//! sentence aimed at non-technical readers.

use async_trait::async_trait;
use thiserror::Error;

use crate::ai_config::AiConfig;
use crate::ai_provider::{create_provider, AiProviderTrait, ChatMessage};

/// Instructions sent as the system message for every story
const SYSTEM_PROMPT: &str = "You are a product manager who turns engineering tickets into release \
notes that less technical readers can follow. The ticket may be long and technical; explain \
concisely what was fixed, added, improved or changed. The description often states the expected \
fix or solution, so use it as context. Reply with exactly one sentence containing only the \
rewritten note. Do not add greetings, explanations or introductory phrases such as 'Here is a \
concise version' or 'Here's a single sentence explaining the changes:'.";

/// Failure while producing a summary
#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("Request to language model failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Failed to extract text from {provider} response")]
    MalformedResponse { provider: String },

    #[error("Language model returned an empty summary")]
    EmptyResponse,
}

/// Turns a story into one sentence of prose
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the backend fails or produces no usable text
    async fn summarize(&self, title: &str, description: &str)
        -> Result<String, SummarizationError>;
}

/// [`Summarizer`] backed by a chat-completions model
pub struct AiSummarizer {
    provider: Box<dyn AiProviderTrait>,
}

impl AiSummarizer {
    /// Create a summarizer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be created
    pub fn new(config: &AiConfig) -> Result<Self, SummarizationError> {
        Ok(Self::with_provider(create_provider(config)?))
    }

    #[must_use]
    pub fn with_provider(provider: Box<dyn AiProviderTrait>) -> Self {
        Self { provider }
    }

    /// Get the model name in use
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    fn build_messages(title: &str, description: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("Title: {title}\nDescription: {description}")),
        ]
    }
}

#[async_trait]
impl Summarizer for AiSummarizer {
    async fn summarize(
        &self,
        title: &str,
        description: &str,
    ) -> Result<String, SummarizationError> {
        let messages = Self::build_messages(title, description);
        let reply = self.provider.generate(&messages).await?;
        clean_summary(&reply).ok_or(SummarizationError::EmptyResponse)
    }
}

/// Normalize a model reply into a single line.
///
/// Collapses whitespace runs (including line breaks) and strips one pair of
/// wrapping double quotes. Returns `None` when nothing is left.
#[must_use]
pub fn clean_summary(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let unquoted = collapsed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map_or(collapsed.as_str(), str::trim);

    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}
