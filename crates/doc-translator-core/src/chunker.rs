//! Word-aligned page splitting.
//!
//! Text is cut into pages of at most `max_chars` characters without ever
//! breaking a word. Whitespace runs collapse to single spaces. A word longer
//! than the budget gets a page of its own rather than being split.
//!
//! Only the first [`MAX_PAGES`] pages are kept; anything after that is
//! dropped on purpose.

/// Default character budget per page
pub const DEFAULT_CHARS_PER_PAGE: usize = 1500;

/// Pages kept per document
pub const MAX_PAGES: usize = 10;

/// Split `text` into at most [`MAX_PAGES`] pages of up to `max_chars` characters.
pub fn chunk(text: &str, max_chars: usize) -> Vec<String> {
    chunk_with_limit(text, max_chars, MAX_PAGES)
}

/// Split `text` into at most `max_chunks` pages of up to `max_chars` characters.
///
/// Lengths are counted in `char`s. Stops reading as soon as the last kept
/// page is closed.
pub fn chunk_with_limit(text: &str, max_chars: usize, max_chunks: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    if max_chunks == 0 {
        return chunks;
    }

    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if !current.is_empty() && current_len + 1 + word_len > max_chars {
            chunks.push(current.join(" "));
            if chunks.len() == max_chunks {
                return chunks;
            }
            current.clear();
            current_len = 0;
        }

        if !current.is_empty() {
            current_len += 1;
        }
        current.push(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
