mod openai;
mod prompt;
mod traits;

pub use openai::OpenAiClient;
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use traits::{CompletionRequest, LanguageModel, ModelInfo};

use crate::config::{Lang, TranslatorConfig};
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Placeholder stored when the model answers with nothing
pub const UNAVAILABLE_PLACEHOLDER: &str = "[Translation unavailable]";

/// Create a language model client from configuration
pub fn create_model(config: &TranslatorConfig) -> Result<Arc<dyn LanguageModel>> {
    Ok(Arc::new(OpenAiClient::new(config)?))
}

/// Outcome of translating one page.
///
/// Only `Translated` carries model output; the other two are soft failures
/// that still produce visible text for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    /// The model returned no content
    Unavailable,
    /// The model call failed; holds the error detail
    Failed(String),
}

impl Translation {
    pub const fn is_failure(&self) -> bool {
        !matches!(self, Self::Translated(_))
    }

    /// Text to show for the page: the translation or a placeholder.
    pub fn into_text(self) -> String {
        match self {
            Self::Translated(text) => text,
            Self::Unavailable => UNAVAILABLE_PLACEHOLDER.to_string(),
            Self::Failed(detail) => format!("[Translation error: {detail}]"),
        }
    }
}

/// Turns one page plus accumulated context into a translation.
///
/// Never fails: model errors become [`Translation::Failed`].
#[derive(Clone)]
pub struct ContextualTranslator {
    model: Arc<dyn LanguageModel>,
    temperature: f32,
    max_tokens: u32,
}

impl ContextualTranslator {
    pub fn new(model: Arc<dyn LanguageModel>, config: &TranslatorConfig) -> Self {
        Self {
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn model_info(&self) -> ModelInfo {
        self.model.info()
    }

    /// Build the request for one page without sending it
    pub fn request_for(
        &self,
        text: &str,
        source: &Lang,
        target: &Lang,
        context: &str,
    ) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: build_prompt(text, source, target, context),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        source: &Lang,
        target: &Lang,
        context: &str,
    ) -> Translation {
        let request = self.request_for(text, source, target, context);
        debug!(
            "Sending {} chars ({} chars of context) to {}",
            text.len(),
            context.len(),
            self.model.name()
        );

        match self.model.complete(&request).await {
            Ok(content) => {
                let content = content.trim();
                if content.is_empty() {
                    warn!("Model returned no content");
                    Translation::Unavailable
                } else {
                    Translation::Translated(content.to_string())
                }
            }
            Err(e) => {
                warn!("Translation call failed: {}", e);
                Translation::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;

    struct Scripted(std::result::Result<&'static str, &'static str>);

    #[async_trait]
    impl LanguageModel for Scripted {
        fn info(&self) -> ModelInfo {
            ModelInfo { name: "scripted" }
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            self.0
                .map(str::to_string)
                .map_err(|e| Error::ModelRequest(e.to_string()))
        }
    }

    fn translator(reply: std::result::Result<&'static str, &'static str>) -> ContextualTranslator {
        ContextualTranslator::new(Arc::new(Scripted(reply)), &TranslatorConfig::default())
    }

    #[tokio::test]
    async fn test_success_is_trimmed() {
        let t = translator(Ok("  Olá mundo \n"));
        let out = t.translate("Hello world", &"en".into(), &"pt".into(), "").await;
        assert_eq!(out, Translation::Translated("Olá mundo".to_string()));
        assert!(!out.is_failure());
    }

    #[tokio::test]
    async fn test_empty_reply_is_unavailable() {
        let t = translator(Ok("   "));
        let out = t.translate("Hello", &"en".into(), &"pt".into(), "").await;
        assert_eq!(out, Translation::Unavailable);
        assert_eq!(out.into_text(), UNAVAILABLE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_failure_becomes_placeholder() {
        let t = translator(Err("connection reset"));
        let out = t.translate("Hello", &"en".into(), &"pt".into(), "").await;
        assert!(out.is_failure());
        let text = out.into_text();
        assert!(text.starts_with("[Translation error:"));
        assert!(text.contains("connection reset"));
    }

    #[test]
    fn test_request_uses_configured_sampling() {
        let t = translator(Ok("x"));
        let req = t.request_for("Hi", &"en".into(), &"xx".into(), "ctx");
        assert_eq!(req.system, SYSTEM_PROMPT);
        assert!((req.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(req.max_tokens, 2000);
        assert!(req.prompt.contains("TRANSLATION (xx):"));
        assert!(req.prompt.contains("ctx"));
    }
}
