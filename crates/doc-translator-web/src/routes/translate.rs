//! Translation routes - JSON API and HTML result page.

use axum::{Json, extract::State};
use axum_extra::extract::Multipart;
use doc_translator_core::TranslationReport;
use std::sync::Arc;
use tracing::info;

use super::upload::{UploadForm, read_upload};
use crate::helpers::RouteResult;
use crate::state::AppState;
use crate::templates::ResultTemplate;

/// Run the pipeline for one uploaded form.
pub(super) async fn run_translation(
    state: &AppState,
    form: UploadForm,
) -> RouteResult<TranslationReport> {
    info!(
        "Translating {} ({} bytes) {} -> {}",
        form.filename,
        form.content.len(),
        form.source_lang,
        form.target_lang
    );

    let report = state
        .translator
        .translate_document(
            &form.content,
            &form.filename,
            &form.source_lang,
            &form.target_lang,
            None,
        )
        .await?;

    Ok(report)
}

/// Translate an uploaded document - returns the JSON report.
pub async fn translate_api(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> RouteResult<Json<TranslationReport>> {
    let form = read_upload(multipart, state.config()).await?;
    let report = run_translation(&state, form).await?;
    Ok(Json(report))
}

/// Translate an uploaded document - renders the side-by-side result page.
///
/// Plain form POST target, so the UI works without JavaScript.
pub async fn translate_view(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> RouteResult<ResultTemplate> {
    let form = read_upload(multipart, state.config()).await?;
    let report = run_translation(&state, form).await?;
    Ok(ResultTemplate::from_report(report))
}
