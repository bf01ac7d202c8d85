use serde::{Deserialize, Serialize};

/// Default cloud model
pub const OPENAI_MODEL: &str = "gpt-4o";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI-compatible local server (LM Studio)
pub const LOCAL_URL: &str = "http://localhost:1234";
pub const LOCAL_MODEL: &str = "mlx-community/llama-3.2-3b-instruct";

/// Which backend a configuration resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiBackend {
    /// OpenAI cloud, selected whenever an API key is configured
    OpenAi,
    /// OpenAI-compatible local endpoint, no key
    Local,
}

/// Language-model settings for the summarizer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub local_url: String,
    pub local_model: String,
    /// Sampling temperature; low values keep the rewrite close to the source text
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: OPENAI_MODEL.to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
            local_url: LOCAL_URL.to_string(),
            local_model: LOCAL_MODEL.to_string(),
            temperature: 0.2,
            timeout_secs: 120,
        }
    }
}

impl AiConfig {
    /// API key, ignoring blank values
    #[must_use]
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    #[must_use]
    pub fn backend(&self) -> AiBackend {
        if self.effective_api_key().is_some() {
            AiBackend::OpenAi
        } else {
            AiBackend::Local
        }
    }

    #[must_use]
    pub fn effective_model(&self) -> &str {
        match self.backend() {
            AiBackend::OpenAi => &self.model,
            AiBackend::Local => &self.local_model,
        }
    }

    /// Base URL of the chat-completions API for the selected backend
    #[must_use]
    pub fn effective_base_url(&self) -> String {
        match self.backend() {
            AiBackend::OpenAi => self.base_url.trim_end_matches('/').to_string(),
            AiBackend::Local => format!("{}/v1", self.local_url.trim_end_matches('/')),
        }
    }
}
