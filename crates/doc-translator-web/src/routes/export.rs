//! Export route - plain-text download of a translation.

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::Response,
};
use axum_extra::extract::Multipart;
use std::sync::Arc;

use super::translate::run_translation;
use super::upload::read_upload;
use crate::helpers::{ResultExt, RouteResult};
use crate::state::AppState;

/// Translate an uploaded document and return the text export as an attachment.
pub async fn export_text(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> RouteResult<Response> {
    let form = read_upload(multipart, state.config()).await?;
    let report = run_translation(&state, form).await?;

    let download_name = report.export_filename().replace('"', "'");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{download_name}\""),
        )
        .body(Body::from(report.to_plain_text()))
        .or_internal_error()
}

#[cfg(test)]
mod tests {
    use crate::test_support::{multipart_request, recording_app};
    use axum::http::{StatusCode, header};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_export_is_attachment() {
        let (app, _) = recording_app();
        let request = multipart_request(
            "/api/translate/export",
            Some(("notes.txt", "Good morning".as_bytes())),
            &[("target_lang", "de")],
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"translated_notes.txt.txt\""
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("PAGE 1\n\nORIGINAL (en):\nGood morning\n\nTRANSLATED (de):\n"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(50))));
    }
}
