//! Shared fixtures for in-process route tests.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use doc_translator_core::{
    AppConfig, Error, LanguageModel, Result,
    translator::{CompletionRequest, ModelInfo},
};
use std::sync::{Arc, Mutex};

use crate::state::AppState;

const BOUNDARY: &str = "doc-translator-test-boundary";

/// Answers every page with "translated N" and keeps the prompts.
#[derive(Default)]
pub struct RecordingModel {
    prompts: Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LanguageModel for RecordingModel {
    fn info(&self) -> ModelInfo {
        ModelInfo { name: "recording" }
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(request.prompt.clone());
            prompts.len()
        };
        Ok(format!("translated {count}"))
    }
}

struct FailingModel;

#[async_trait]
impl LanguageModel for FailingModel {
    fn info(&self) -> ModelInfo {
        ModelInfo { name: "failing" }
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        Err(Error::ModelRequest("upstream unavailable".to_string()))
    }
}

pub fn recording_app() -> (Router, Arc<RecordingModel>) {
    recording_app_with_limit(10 * 1024 * 1024)
}

pub fn recording_app_with_limit(body_limit: usize) -> (Router, Arc<RecordingModel>) {
    let model = Arc::new(RecordingModel::default());
    let state = AppState::with_model(model.clone(), AppConfig::default());
    (crate::build_router(Arc::new(state), body_limit), model)
}

pub fn failing_app() -> Router {
    let state = AppState::with_model(Arc::new(FailingModel), AppConfig::default());
    crate::build_router(Arc::new(state), 10 * 1024 * 1024)
}

/// Build a multipart POST with an optional file part and plain text fields.
pub fn multipart_request(
    uri: &str,
    file: Option<(&str, &[u8])>,
    fields: &[(&str, &str)],
) -> Request<Body> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, content)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn response_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
