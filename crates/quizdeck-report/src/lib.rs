//! quizdeck-report — printable question-set reports.
//!
//! A question set is paginated once by [`layout::paginate`] and then
//! rendered as print-ready HTML or plain text.

pub mod html;
pub mod layout;
pub mod text;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;

use quizdeck_core::model::Question;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Text,
}

impl ReportFormat {
    /// Default output file name for this format.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Html => "quiz_questions.html",
            ReportFormat::Text => "quiz_questions.txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(ReportFormat::Html),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Paginate `questions` and write the report in `format` to `path`.
pub fn write_report(
    title: &str,
    questions: &[Question],
    format: ReportFormat,
    path: &Path,
) -> Result<()> {
    let layout = layout::paginate(title, questions);
    match format {
        ReportFormat::Html => html::write_html_report(&layout, path),
        ReportFormat::Text => text::write_text_report(&layout, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_display_and_parse() {
        assert_eq!(ReportFormat::Html.to_string(), "html");
        assert_eq!("TXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(
            ReportFormat::Text.default_file_name(),
            "quiz_questions.txt"
        );
    }

    #[test]
    fn write_report_dispatches_on_format() {
        let dir = tempfile::tempdir().unwrap();
        let questions = layout::sample_questions(2);

        let html_path = dir.path().join("r.html");
        write_report("T", &questions, ReportFormat::Html, &html_path).unwrap();
        assert!(std::fs::read_to_string(&html_path).unwrap().contains("<html"));

        let text_path = dir.path().join("r.txt");
        write_report("T", &questions, ReportFormat::Text, &text_path).unwrap();
        assert!(std::fs::read_to_string(&text_path).unwrap().starts_with("T\n"));
    }
}
