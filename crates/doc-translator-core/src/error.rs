use thiserror::Error;

/// Unified error type for doc-translator-core
///
/// These are the fatal errors: each one aborts the operation that raised it.
/// A single page that fails to translate is *not* an error at this level;
/// it is recovered by the translator into a placeholder
/// (see [`crate::translator::Translation`]).
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Input Errors
    // ==========================================================================
    /// No document (or an empty one) was supplied
    #[error("validation failed: {0}")]
    Validation(String),

    /// The extraction collaborator could not read the document
    #[error("failed to extract text from '{filename}': {reason}")]
    Extraction { filename: String, reason: String },

    // ==========================================================================
    // Language Model Errors
    // ==========================================================================
    /// Model API request failed
    #[error("model API request failed: {0}")]
    ModelRequest(String),

    /// Invalid response from model API
    #[error("invalid model API response: {0}")]
    ModelInvalidResponse(String),

    /// Rate limited by model API
    #[error("model API rate limited{}", retry_after.map(|s| format!(", retry after {s} seconds")).unwrap_or_default())]
    ModelRateLimited { retry_after: Option<u64> },

    /// Model request timed out
    #[error("model request timed out")]
    ModelTimeout,

    /// Every attempt failed with a retryable error
    #[error("model request failed after {attempts} attempt(s): {last}")]
    ModelMaxRetriesExceeded { attempts: u32, last: String },

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Invalid configuration value
    #[error("invalid config value for '{field}': {reason}")]
    ConfigInvalid { field: String, reason: String },
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the service.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Extraction { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
