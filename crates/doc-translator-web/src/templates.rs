//! Askama templates for server-rendered pages.
//!
//! ## Template Structure
//!
//! - `base.html` - Common layout with inline CSS
//! - `index.html` - Landing page with upload form
//! - `result.html` - Side-by-side original/translation view with export link

use askama::Template;
use askama_web::WebTemplate;
use doc_translator_core::{
    DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, LanguageOption, PageResult, TranslationReport,
    flag_for_lang, language_name, languages,
};

/// Landing page with upload form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub languages: Vec<LanguageOption>,
    pub default_source: &'static str,
    pub default_target: &'static str,
    pub chars_per_page: usize,
    pub max_pages: usize,
}

impl IndexTemplate {
    pub fn new(chars_per_page: usize, max_pages: usize) -> Self {
        Self {
            languages: languages(),
            default_source: DEFAULT_SOURCE_LANG,
            default_target: DEFAULT_TARGET_LANG,
            chars_per_page,
            max_pages,
        }
    }
}

/// Translation result page.
///
/// The export is embedded as a `data:` URI so the download needs no
/// second round trip to the model.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub filename: String,
    pub total_pages: usize,
    pub pages: Vec<PageResult>,
    pub source_label: String,
    pub target_label: String,
    pub export_href: String,
    pub export_filename: String,
}

impl ResultTemplate {
    pub fn from_report(report: TranslationReport) -> Self {
        let export_href = format!(
            "data:text/plain;charset=utf-8,{}",
            urlencoding::encode(&report.to_plain_text())
        );
        let export_filename = report.export_filename();

        Self {
            source_label: language_label(report.source_lang.as_str()),
            target_label: language_label(report.target_lang.as_str()),
            filename: report.filename,
            total_pages: report.total_pages,
            pages: report.pages,
            export_href,
            export_filename,
        }
    }
}

/// "🇬🇧 English", or the bare code for unknown languages
fn language_label(code: &str) -> String {
    format!("{} {}", flag_for_lang(code), language_name(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_translator_core::Lang;

    fn report() -> TranslationReport {
        TranslationReport {
            filename: "a <b>.txt".to_string(),
            total_pages: 1,
            pages: vec![PageResult {
                page_number: 1,
                original: "Hello & bye".to_string(),
                translated: "Olá & tchau".to_string(),
            }],
            source_lang: Lang::new("en"),
            target_lang: Lang::new("xx"),
        }
    }

    #[test]
    fn test_result_template_renders_pages() {
        let html = ResultTemplate::from_report(report()).render().unwrap();
        assert!(html.contains("Hello &amp; bye") || html.contains("Hello &#38; bye"));
        assert!(html.contains("Page 1"));
        assert!(html.contains("🇬🇧 English"));
        assert!(html.contains("🌐 xx"));
        assert!(!html.contains("<b>.txt"), "filename must be escaped");
    }

    #[test]
    fn test_export_href_is_percent_encoded() {
        let template = ResultTemplate::from_report(report());
        assert!(template.export_href.starts_with("data:text/plain;charset=utf-8,PAGE%201"));
        assert!(!template.export_href.contains('\n'));
        assert_eq!(template.export_filename, "translated_a <b>.txt.txt");
    }

    #[test]
    fn test_index_lists_languages() {
        let html = IndexTemplate::new(1500, 10).render().unwrap();
        assert!(html.contains("value=\"ko\""));
        assert!(html.contains("Russian"));
        assert!(html.contains("1500"));
    }
}
