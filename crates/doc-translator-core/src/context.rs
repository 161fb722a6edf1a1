//! Running record of what has been translated so far in one document.

/// Accumulated translated pages, fed back to the model as context.
///
/// Grows by one labelled entry per page and is never trimmed: every request
/// carries the full history. With pages capped per document the cost stays
/// bounded.
#[derive(Debug, Default, Clone)]
pub struct TranslationContext {
    buffer: String,
    entries: usize,
}

impl TranslationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a translated page under its 1-based number.
    pub fn append(&mut self, page_number: usize, translated: &str) {
        self.buffer
            .push_str(&format!("\n--- Page {page_number} ---\n{translated}\n"));
        self.entries += 1;
    }

    /// The whole buffer, as sent to the model.
    pub fn current(&self) -> &str {
        &self.buffer
    }

    /// Number of pages recorded.
    pub const fn len(&self) -> usize {
        self.entries
    }

    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
