//! Doc Translator Core Library
//!
//! This library provides the core functionality for translating documents:
//! - Word-aligned page splitting
//! - Page-by-page translation through OpenAI-compatible APIs, with the
//!   pages translated so far sent along as context
//! - Plain-text extraction from uploads
//! - Report assembly and plain-text export

pub mod chunker;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod report;
pub mod translator;
pub mod util;

pub use chunker::{DEFAULT_CHARS_PER_PAGE, MAX_PAGES, chunk, chunk_with_limit};
pub use config::{
    AppConfig, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, Lang, LanguageOption, PagingConfig,
    TranslatorConfig, flag_for_lang, language_name, languages,
};
pub use context::TranslationContext;
pub use error::{Error, Result};
pub use extract::{DocumentExtractor, DocumentFormat, PlaceholderExtractor};
pub use report::{PageResult, TranslationReport};
pub use translator::{
    ContextualTranslator, LanguageModel, OpenAiClient, Translation, create_model,
};

use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

/// Callback invoked after each page with `(pages_done, pages_total)`
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// High-level document translator that combines all components
pub struct DocumentTranslator {
    translator: ContextualTranslator,
    extractor: Arc<dyn DocumentExtractor>,
    config: AppConfig,
}

impl DocumentTranslator {
    /// Create a new document translator with the given configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let model = create_model(&config.translator)?;
        Ok(Self::with_model(model, config))
    }

    /// Create with a custom language model
    pub fn with_model(model: Arc<dyn LanguageModel>, config: AppConfig) -> Self {
        Self {
            translator: ContextualTranslator::new(model, &config.translator),
            extractor: Arc::new(PlaceholderExtractor),
            config,
        }
    }

    /// Replace the extraction collaborator
    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Translate an uploaded document.
    ///
    /// Fails only when there is nothing to translate or the document cannot
    /// be read. Pages whose model call fails still appear in the report,
    /// carrying a placeholder in place of the translation.
    pub async fn translate_document(
        &self,
        content: &[u8],
        filename: &str,
        source: &Lang,
        target: &Lang,
        progress: Option<ProgressCallback>,
    ) -> Result<TranslationReport> {
        if content.is_empty() {
            return Err(Error::Validation("no file provided".to_string()));
        }

        let text = self.extractor.extract(content, filename)?;
        debug!("Extracted {} chars from {}", text.len(), filename);

        self.translate_text(&text, filename, source, target, progress)
            .await
    }

    /// Translate already-extracted text.
    ///
    /// Pages are translated strictly in order: each request carries every
    /// translation produced before it.
    pub async fn translate_text(
        &self,
        text: &str,
        filename: &str,
        source: &Lang,
        target: &Lang,
        progress: Option<ProgressCallback>,
    ) -> Result<TranslationReport> {
        let run_id = uuid::Uuid::new_v4();
        let span = info_span!("translate", run = %run_id, file = %filename);

        async move {
            let paging = self.config.paging;
            let max_pages = paging.max_pages.min(MAX_PAGES);
            let chunks = chunk_with_limit(text, paging.chars_per_page, max_pages);
            let total = chunks.len();

            info!(
                "Translating {} page(s) from {} to {} with {}",
                total,
                source,
                target,
                self.translator.model_info().name
            );

            let mut context = TranslationContext::new();
            let mut pages = Vec::with_capacity(total);
            let mut failed = 0;

            for (index, original) in chunks.into_iter().enumerate() {
                let page_number = index + 1;
                let translation = self
                    .translator
                    .translate(&original, source, target, context.current())
                    .await;

                if translation.is_failure() {
                    failed += 1;
                    warn!("Page {} was not translated", page_number);
                }

                let translated = translation.into_text();
                context.append(page_number, &translated);
                pages.push(PageResult {
                    page_number,
                    original,
                    translated,
                });

                if let Some(ref callback) = progress {
                    callback(page_number, total);
                }
            }

            info!("Finished {} page(s), {} failed", pages.len(), failed);

            Ok(TranslationReport {
                filename: filename.to_string(),
                total_pages: pages.len(),
                pages,
                source_lang: source.clone(),
                target_lang: target.clone(),
            })
        }
        .instrument(span)
        .await
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}
