//! Prompt text sent to the model for each page.

use crate::config::Lang;

/// System instruction for every page.
pub const SYSTEM_PROMPT: &str =
    "You are a professional translator specializing in accurate, contextual document translation.";

/// Build the user prompt for one page.
///
/// The context block is always present, even when empty, so the model sees
/// the same layout for the first page as for the rest.
pub fn build_prompt(text: &str, source: &Lang, target: &Lang, context: &str) -> String {
    let source_name = source.display_name();
    let target_name = target.display_name();

    format!(
        "You are a professional translator specializing in document translation.

PREVIOUS CONTEXT (for consistency):
{context}

ORIGINAL TEXT ({source_name}):
{text}

INSTRUCTIONS:
1. Translate faithfully from {source_name} to {target_name}
2. Keep technical terms, proper nouns and formatting
3. Use natural, fluent language
4. Preserve the original meaning
5. Stay consistent with the context provided

TRANSLATION ({target_name}):"
    )
    .trim()
    .to_string()
}
