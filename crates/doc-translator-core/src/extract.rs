//! Document text extraction.
//!
//! Only plain-text formats are actually read. Binary formats such as PDF and
//! DOCX get a marker string in place of their content, so callers can tell
//! an unparsed upload from real text. Plug in another [`DocumentExtractor`]
//! to support them.

use crate::error::{Error, Result};

/// Document formats recognised by filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Any `text/*` type (txt, md, csv, ...)
    PlainText,
    Pdf,
    Other,
}

impl DocumentFormat {
    /// Infer the format from the filename extension.
    pub fn from_filename(filename: &str) -> Self {
        let Some(mime) = mime_guess::from_path(filename).first() else {
            return Self::Other;
        };

        if mime.type_() == mime_guess::mime::TEXT {
            Self::PlainText
        } else if mime.subtype() == mime_guess::mime::PDF {
            Self::Pdf
        } else {
            Self::Other
        }
    }
}

/// Turns uploaded bytes into a single ordered text.
pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String>;
}

/// Reads plain text and stands in a marker for everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderExtractor;

impl DocumentExtractor for PlaceholderExtractor {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String> {
        match DocumentFormat::from_filename(filename) {
            DocumentFormat::PlainText => decode_text(bytes, filename),
            DocumentFormat::Pdf => Ok(format!(
                "[Content of PDF {filename} - PDF text extraction not implemented]"
            )),
            DocumentFormat::Other => Ok(format!("[Content of file {filename}]")),
        }
    }
}

fn decode_text(bytes: &[u8], filename: &str) -> Result<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::Extraction {
        filename: filename.to_string(),
        reason: format!("not valid UTF-8 text ({e})"),
    })
}
