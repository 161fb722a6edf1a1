use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

use super::traits::{CompletionRequest, LanguageModel, ModelInfo};
use crate::config::TranslatorConfig;
use crate::error::{Error, Result};

/// Wait used for a 429 that carries no usable `Retry-After`
const DEFAULT_RATE_LIMIT_WAIT_SECS: u64 = 5;

/// OpenAI-compatible chat completions client
/// Works with: OpenAI, llama.cpp server, Ollama, DeepSeek, etc.
pub struct OpenAiClient {
    client: Client,
    /// Base URL for the API (e.g., "https://api.openai.com/v1")
    pub api_base: String,
    /// Optional API key for authentication
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Number of attempts per completion
    pub retry_count: u32,
    /// Delay between retries in milliseconds
    pub retry_delay_ms: u64,
    /// Longest wait honoured from a `Retry-After` header
    pub max_retry_wait: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, or empty when the model returned nothing.
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

impl OpenAiClient {
    /// Create a client from translator configuration.
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            retry_count: config.retry_count.max(1),
            retry_delay_ms: config.retry_delay_ms,
            max_retry_wait: Duration::from_secs(config.max_retry_wait_secs),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    /// Make API request with retry logic
    async fn request_with_retry(&self, request: &CompletionRequest) -> Result<String> {
        let url = self.endpoint();
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message { role: "system", content: &request.system },
                Message { role: "user", content: &request.prompt },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut attempt = 1;
        loop {
            debug!(
                "Completion request attempt {}/{} to {}",
                attempt, self.retry_count, url
            );

            let failure = match self.send_once(&url, &body).await {
                Ok(content) => return Ok(content),
                Err(failure) => failure,
            };

            match failure {
                Failure::Fatal(error) => return Err(error),
                Failure::Retry { error, wait } => {
                    if attempt >= self.retry_count {
                        error!("Completion failed after {} attempts: {}", attempt, error);
                        return Err(Error::ModelMaxRetriesExceeded {
                            attempts: attempt,
                            last: error.to_string(),
                        });
                    }
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One round trip to the API, classified for the retry loop
    async fn send_once(
        &self,
        url: &str,
        body: &ChatRequest<'_>,
    ) -> std::result::Result<String, Failure> {
        let retry_delay = Duration::from_millis(self.retry_delay_ms);

        let mut req = self.client.post(url).json(body);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request failed: {}", e);
                let error = if e.is_timeout() {
                    Error::ModelTimeout
                } else {
                    Error::ModelRequest(e.to_string())
                };
                return Err(Failure::Retry { error, wait: retry_delay });
            }
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<ChatResponse>().await {
                Ok(chat_response) => Ok(chat_response.into_content()),
                Err(e) => {
                    warn!("Failed to parse response: {}", e);
                    Err(Failure::Retry {
                        error: Error::ModelInvalidResponse(e.to_string()),
                        wait: retry_delay,
                    })
                }
            };
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());

            warn!("Rate limited, retry after {:?}s", retry_after);
            return Err(Failure::Retry {
                error: Error::ModelRateLimited { retry_after },
                wait: self.rate_limit_wait(retry_after),
            });
        }

        let body = response.text().await.unwrap_or_default();
        warn!("API error: {} - {}", status, body);
        let error = Error::ModelRequest(format!("HTTP {status}: {body}"));

        if status.is_client_error() {
            Err(Failure::Fatal(error))
        } else {
            Err(Failure::Retry { error, wait: retry_delay })
        }
    }

    /// Wait before retrying a 429, capped at `max_retry_wait`
    fn rate_limit_wait(&self, retry_after: Option<u64>) -> Duration {
        let requested = retry_after.unwrap_or(DEFAULT_RATE_LIMIT_WAIT_SECS);
        Duration::from_secs(requested).min(self.max_retry_wait)
    }
}

/// Outcome of a failed round trip
enum Failure {
    /// Worth another attempt after `wait`
    Retry { error: Error, wait: Duration },
    /// The request itself is wrong; retrying cannot help
    Fatal(Error),
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    fn info(&self) -> ModelInfo {
        ModelInfo { name: "OpenAI Compatible" }
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.request_with_retry(request).await
    }
}
