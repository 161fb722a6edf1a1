//! Doc Translator CLI - Command line tool for translating documents.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use doc_translator_core::{AppConfig, DocumentTranslator, Lang, TranslationReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Original and translation per page, separated by rules
    Text,
    /// The full translation report
    Json,
}

impl OutputFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "doc-translate")]
#[command(
    author,
    version,
    about = "Translate documents page by page with context",
    long_about = None
)]
struct Args {
    /// Input document (.txt and other text formats are read; others get a placeholder)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: <input>-<target>.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source language code (default from config, else "en")
    #[arg(short = 's', long)]
    source: Option<String>,

    /// Target language code (default from config, else "pt")
    #[arg(short = 't', long)]
    target: Option<String>,

    /// OpenAI API base URL
    #[arg(long, env = "OPENAI_API_BASE")]
    api_base: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// Model name for OpenAI-compatible API
    #[arg(long, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// Character budget per page
    #[arg(long)]
    chars_per_page: Option<usize>,

    /// Maximum number of pages to translate
    #[arg(long)]
    max_pages: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Apply command line overrides on top of the loaded config
    fn apply(&self, config: &mut AppConfig) {
        if let Some(ref source) = self.source {
            config.source_lang = Lang::new(source);
        }
        if let Some(ref target) = self.target {
            config.target_lang = Lang::new(target);
        }
        if let Some(ref api_base) = self.api_base {
            config.translator.api_base.clone_from(api_base);
        }
        if self.api_key.is_some() {
            config.translator.api_key.clone_from(&self.api_key);
        }
        if let Some(ref model) = self.model {
            config.translator.model.clone_from(model);
        }
        if let Some(chars) = self.chars_per_page {
            config.paging.chars_per_page = chars;
        }
        if let Some(pages) = self.max_pages {
            config.paging.max_pages = pages;
        }
    }
}

fn default_output_path(input: &Path, target: &Lang, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}-{}.{}", stem, target, format.extension()))
}

fn render(report: &TranslationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_plain_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };
    args.apply(&mut config);

    info!("Loading document: {}", args.input.display());
    let content = std::fs::read(&args.input)
        .context(format!("Failed to read input: {}", args.input.display()))?;
    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.txt")
        .to_string();

    let source = config.source_lang.clone();
    let target = config.target_lang.clone();

    let translator =
        DocumentTranslator::new(config).context("Failed to initialize translator")?;

    let pb = ProgressBar::new(0);
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages")
            .unwrap()
            .progress_chars("#>-"),
    );

    let progress_bar = pb.clone();
    let report = translator
        .translate_document(
            &content,
            &filename,
            &source,
            &target,
            Some(Box::new(move |done, total| {
                progress_bar.set_length(total as u64);
                progress_bar.set_position(done as u64);
            })),
        )
        .await
        .context(format!("Failed to translate {}", args.input.display()))?;

    pb.finish_and_clear();

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, &target, args.format));

    std::fs::write(&output_path, render(&report, args.format)?)
        .context(format!("Failed to write output: {}", output_path.display()))?;

    // CLI output is intentional
    #[allow(clippy::print_stdout)]
    {
        println!(
            "Translated {} page(s) saved to: {}",
            report.total_pages,
            output_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(
            Path::new("/tmp/report.txt"),
            &Lang::new("pt"),
            OutputFormat::Text,
        );
        assert_eq!(path, PathBuf::from("/tmp/report-pt.txt"));

        let json = default_output_path(Path::new("notes"), &Lang::new("de"), OutputFormat::Json);
        assert_eq!(json, PathBuf::from("notes-de.json"));
    }

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let args = Args::parse_from([
            "doc-translate",
            "in.txt",
            "-t",
            "ja",
            "--model",
            "llama3",
            "--max-pages",
            "3",
        ]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.source_lang.as_str(), "en");
        assert_eq!(config.target_lang.as_str(), "ja");
        assert_eq!(config.translator.model, "llama3");
        assert_eq!(config.paging.max_pages, 3);
        assert_eq!(config.paging.chars_per_page, 1500);
    }
}
