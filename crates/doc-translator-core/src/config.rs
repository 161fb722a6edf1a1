use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Language codes following ISO 639-1
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(pub String);

impl Lang {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name used in prompts.
    ///
    /// Unknown codes are returned verbatim, so the model still sees whatever
    /// the caller asked for.
    pub fn display_name(&self) -> &str {
        language_name(&self.0)
    }
}

fn default_source_lang() -> Lang {
    Lang::new(DEFAULT_SOURCE_LANG)
}

fn default_target_lang() -> Lang {
    Lang::new(DEFAULT_TARGET_LANG)
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Lang {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Lang {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Model backend configuration for OpenAI-compatible APIs.
///
/// Works with OpenAI, llama.cpp server, Ollama, DeepSeek and anything else
/// that speaks `/chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; kept low so translations stay literal
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output cap per page, in tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Longest wait honoured from a `Retry-After` header
    #[serde(default = "default_max_retry_wait_secs")]
    pub max_retry_wait_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TranslatorConfig {
    /// Create a new translator config with default sampling and retry settings
    pub fn new(
        api_base: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            api_key,
            model: model.into(),
            ..Self::default()
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

const fn default_temperature() -> f32 {
    0.3
}

const fn default_max_tokens() -> u32 {
    2000
}

const fn default_retry_count() -> u32 {
    3
}

const fn default_retry_delay_ms() -> u64 {
    1000
}

const fn default_max_retry_wait_secs() -> u64 {
    60
}

const fn default_timeout_secs() -> u64 {
    60
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay_ms(),
            max_retry_wait_secs: default_max_retry_wait_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How documents are cut into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Character budget per page
    #[serde(default = "default_chars_per_page")]
    pub chars_per_page: usize,

    /// Pages kept per document; the rest of the text is dropped
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

const fn default_chars_per_page() -> usize {
    crate::chunker::DEFAULT_CHARS_PER_PAGE
}

const fn default_max_pages() -> usize {
    crate::chunker::MAX_PAGES
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            chars_per_page: default_chars_per_page(),
            max_pages: default_max_pages(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source language used when a request does not name one
    #[serde(default = "default_source_lang")]
    pub source_lang: Lang,

    /// Target language used when a request does not name one
    #[serde(default = "default_target_lang")]
    pub target_lang: Lang,

    /// Model backend configuration
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Page splitting
    #[serde(default)]
    pub paging: PagingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            translator: TranslatorConfig::default(),
            paging: PagingConfig::default(),
        }
    }
}

/// Prefix for environment overrides, e.g. `DOC_TRANSLATOR_TRANSLATOR__MODEL`
pub const ENV_PREFIX: &str = "DOC_TRANSLATOR";

impl AppConfig {
    /// Load configuration from a single TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Layer the given files (later ones win) and `DOC_TRANSLATOR_*` env vars.
    ///
    /// Missing files are skipped.
    pub fn load_layered(files: &[PathBuf]) -> Result<Self> {
        let mut builder = config::Config::builder();
        for file in files {
            builder = builder.add_source(config::File::from(file.as_path()).required(false));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| Error::ConfigLoad(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from default locations (~/.config/doc-translator/config.toml, ./config.toml)
    pub fn load() -> Self {
        let mut files = Vec::with_capacity(2);
        if let Some(config_dir) = crate::util::config_dir() {
            files.push(config_dir.join("doc-translator").join("config.toml"));
        }
        files.push(PathBuf::from("config.toml"));

        match Self::load_layered(&files) {
            Ok(config) => {
                tracing::debug!("Loaded layered config from {:?}", files);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Reject values that would make the pipeline produce nothing or exceed the page cap
    pub fn validate(&self) -> Result<()> {
        if self.paging.chars_per_page == 0 {
            return Err(Error::ConfigInvalid {
                field: "paging.chars_per_page".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.paging.max_pages == 0 || self.paging.max_pages > crate::chunker::MAX_PAGES {
            return Err(Error::ConfigInvalid {
                field: "paging.max_pages".to_string(),
                reason: format!("must be between 1 and {}", crate::chunker::MAX_PAGES),
            });
        }
        if self.translator.api_base.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                field: "translator.api_base".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A language option for UI dropdowns
#[derive(Debug, Clone)]
pub struct LanguageOption {
    /// ISO language code (e.g., "en", "pt")
    pub code: &'static str,
    /// Display name (e.g., "English", "Portuguese")
    pub name: &'static str,
    /// Flag emoji
    pub flag: &'static str,
}

/// The languages the translator knows by name.
pub static LANGUAGES: [LanguageOption; 10] = [
    LanguageOption { code: "en", name: "English", flag: "🇬🇧" },
    LanguageOption { code: "es", name: "Spanish", flag: "🇪🇸" },
    LanguageOption { code: "fr", name: "French", flag: "🇫🇷" },
    LanguageOption { code: "de", name: "German", flag: "🇩🇪" },
    LanguageOption { code: "it", name: "Italian", flag: "🇮🇹" },
    LanguageOption { code: "pt", name: "Portuguese", flag: "🇵🇹" },
    LanguageOption { code: "ja", name: "Japanese", flag: "🇯🇵" },
    LanguageOption { code: "ko", name: "Korean", flag: "🇰🇷" },
    LanguageOption { code: "zh", name: "Chinese", flag: "🇨🇳" },
    LanguageOption { code: "ru", name: "Russian", flag: "🇷🇺" },
];

/// Languages offered in UI dropdowns.
pub fn languages() -> Vec<LanguageOption> {
    LANGUAGES.to_vec()
}

/// Default source language code
pub const DEFAULT_SOURCE_LANG: &str = "en";
/// Default target language code
pub const DEFAULT_TARGET_LANG: &str = "pt";
/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Convert a language code to its English name, falling back to the code itself.
pub fn language_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map_or(code, |lang| lang.name)
}

/// Get flag emoji for a language code.
///
/// Returns a globe emoji for unknown language codes.
pub fn flag_for_lang(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map_or("🌐", |lang| lang.flag)
}
