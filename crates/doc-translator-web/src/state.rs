use anyhow::Result;
use doc_translator_core::{AppConfig, DocumentTranslator};

/// Global application state.
///
/// Holds nothing per request: each upload gets its own translation context
/// inside [`DocumentTranslator`], so concurrent uploads share only the
/// model client.
pub struct AppState {
    pub translator: DocumentTranslator,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let translator = DocumentTranslator::new(config)
            .map_err(|e| anyhow::anyhow!("Failed to create translator: {e}"))?;
        Ok(Self { translator })
    }

    /// State backed by a caller-supplied model
    #[cfg(test)]
    pub fn with_model(
        model: std::sync::Arc<dyn doc_translator_core::LanguageModel>,
        config: AppConfig,
    ) -> Self {
        Self {
            translator: DocumentTranslator::with_model(model, config),
        }
    }

    pub const fn config(&self) -> &AppConfig {
        self.translator.config()
    }
}
