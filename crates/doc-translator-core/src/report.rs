use serde::{Deserialize, Serialize};

use crate::config::Lang;

/// One translated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based
    pub page_number: usize,
    pub original: String,
    pub translated: String,
}

/// Result of translating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationReport {
    pub filename: String,
    pub total_pages: usize,
    pub pages: Vec<PageResult>,
    pub source_lang: Lang,
    pub target_lang: Lang,
}

/// Width of the rule between pages in the text export
const SEPARATOR_WIDTH: usize = 50;

impl TranslationReport {
    /// Render the report as a downloadable text file.
    ///
    /// Each page lists the original and the translation, followed by a rule.
    pub fn to_plain_text(&self) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        self.pages
            .iter()
            .map(|page| {
                format!(
                    "PAGE {}\n\nORIGINAL ({}):\n{}\n\nTRANSLATED ({}):\n{}\n\n{}\n",
                    page.page_number,
                    self.source_lang,
                    page.original,
                    self.target_lang,
                    page.translated,
                    separator
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Suggested filename for the text export
    pub fn export_filename(&self) -> String {
        format!("translated_{}.txt", crate::util::base_name(&self.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationReport {
        TranslationReport {
            filename: "doc.txt".to_string(),
            total_pages: 2,
            pages: vec![
                PageResult {
                    page_number: 1,
                    original: "Hello".to_string(),
                    translated: "Olá".to_string(),
                },
                PageResult {
                    page_number: 2,
                    original: "World".to_string(),
                    translated: "Mundo".to_string(),
                },
            ],
            source_lang: Lang::new("en"),
            target_lang: Lang::new("pt"),
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["filename"], "doc.txt");
        assert_eq!(json["total_pages"], 2);
        assert_eq!(json["source_lang"], "en");
        assert_eq!(json["target_lang"], "pt");
        assert_eq!(json["pages"][1]["page_number"], 2);
        assert_eq!(json["pages"][1]["original"], "World");
        assert_eq!(json["pages"][1]["translated"], "Mundo");
    }

    #[test]
    fn test_plain_text_export() {
        let text = sample().to_plain_text();
        let rule = "=".repeat(50);
        let expected = format!(
            "PAGE 1\n\nORIGINAL (en):\nHello\n\nTRANSLATED (pt):\nOlá\n\n{rule}\n\
             \nPAGE 2\n\nORIGINAL (en):\nWorld\n\nTRANSLATED (pt):\nMundo\n\n{rule}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_export_of_empty_report() {
        let mut report = sample();
        report.pages.clear();
        report.total_pages = 0;
        assert_eq!(report.to_plain_text(), "");
    }

    #[test]
    fn test_export_filename() {
        let mut report = sample();
        assert_eq!(report.export_filename(), "translated_doc.txt.txt");
        report.filename = "../secret/notes.md".to_string();
        assert_eq!(report.export_filename(), "translated_notes.md.txt");
    }
}
