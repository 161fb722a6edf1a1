use async_trait::async_trait;
use crate::error::Result;

/// Information about a language model backend
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Human-readable name
    pub name: &'static str,
}

/// A single chat-style completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction
    pub system: String,
    /// User prompt
    pub prompt: String,
    pub temperature: f32,
    /// Output cap in tokens
    pub max_tokens: u32,
}

/// Trait for language model backends.
///
/// Implementations must be safe to call concurrently from independent
/// translation runs.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Get information about this backend
    fn info(&self) -> ModelInfo;

    /// Get the backend name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Run one completion. An empty string means the model produced no content.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
