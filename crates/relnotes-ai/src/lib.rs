pub mod ai_config;
pub mod ai_provider;
pub mod providers;
pub mod summarizer;

pub use ai_config::{AiBackend, AiConfig};
pub use ai_provider::{create_provider, AiProviderTrait, ChatMessage};
pub use summarizer::{AiSummarizer, SummarizationError, Summarizer};
