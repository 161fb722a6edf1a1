//! Upload handling - reads the multipart translation form.

use axum_extra::extract::Multipart;
use bytes::Bytes;
use doc_translator_core::{AppConfig, Lang};
use tracing::debug;

use crate::helpers::RouteResult;

/// Fields of a translation request
pub struct UploadForm {
    pub filename: String,
    pub content: Bytes,
    pub source_lang: Lang,
    pub target_lang: Lang,
}

/// Read `file`, `source_lang` and `target_lang` from the form.
///
/// A missing file yields empty content, which the pipeline rejects as a
/// validation error. Missing or blank languages fall back to the configured
/// defaults. Unknown fields are skipped.
pub async fn read_upload(
    mut multipart: Multipart,
    config: &AppConfig,
) -> RouteResult<UploadForm> {
    let mut form = UploadForm {
        filename: String::new(),
        content: Bytes::new(),
        source_lang: config.source_lang.clone(),
        target_lang: config.target_lang.clone(),
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                form.filename = field.file_name().unwrap_or("document.txt").to_string();
                form.content = field.bytes().await?;
            }
            "source_lang" | "target_lang" => {
                let value = field.text().await?;
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                if name == "source_lang" {
                    form.source_lang = Lang::new(value);
                } else {
                    form.target_lang = Lang::new(value);
                }
            }
            other => debug!("Ignoring form field {:?}", other),
        }
    }

    Ok(form)
}
