use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

use crate::ai_provider::{AiProviderTrait, ChatMessage};
use crate::summarizer::SummarizationError;

/// OpenAI API Provider (also compatible with LM Studio and other OpenAI-compatible servers)
pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiProvider {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(
        api_key: Option<&str>,
        model: &str,
        base_url: &str,
        temperature: f32,
        timeout_secs: u64,
    ) -> Result<Self, SummarizationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_string),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            temperature,
        })
    }
}

/// Extract text from: choices[0].message.content
fn extract_content(json: &serde_json::Value) -> Option<String> {
    json["choices"][0]["message"]["content"]
        .as_str()
        .map(ToString::to_string)
}

#[async_trait]
impl AiProviderTrait for OpenAiProvider {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, SummarizationError> {
        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("POST {url}");

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
        });

        let mut request = self.client.post(&url).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizationError::Api {
                provider: "OpenAI".to_string(),
                status,
                body,
            });
        }

        let json: serde_json::Value = response.json().await?;

        extract_content(&json).ok_or_else(|| SummarizationError::MalformedResponse {
            provider: "OpenAI".to_string(),
        })
    }
}
