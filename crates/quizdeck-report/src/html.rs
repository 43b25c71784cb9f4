//! Print-ready HTML report.
//!
//! Produces a self-contained HTML file with all CSS inlined; each layout
//! page becomes one printed sheet.

use anyhow::{Context, Result};
use std::path::Path;

use crate::layout::{ReportEntry, ReportLayout};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape, then keep multi-line answers on separate lines.
fn html_lines(s: &str) -> String {
    html_escape(s).replace('\n', "<br>")
}

/// Generate an HTML document from a report layout.
pub fn generate_html(layout: &ReportLayout) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape(&layout.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    for page in &layout.pages {
        html.push_str(&format!(
            "<section class=\"page\" data-page=\"{}\">\n",
            page.number
        ));
        if page.number == 1 {
            html.push_str(&format!("<h1>{}</h1>\n", html_escape(&layout.title)));
            html.push_str(&format!(
                "<p class=\"meta\">{} questions | generated {}</p>\n",
                layout.question_count,
                layout.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        for entry in &page.entries {
            push_entry(&mut html, entry);
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

fn push_entry(html: &mut String, entry: &ReportEntry) {
    html.push_str("<div class=\"entry\">\n");
    html.push_str(&format!(
        "<p class=\"question\">{}</p>\n",
        html_lines(&entry.question_line())
    ));
    html.push_str(&format!(
        "<p class=\"answer\">{}</p>\n",
        html_lines(&entry.answer_line())
    ));
    html.push_str(&format!(
        "<p class=\"points\">{}</p>\n",
        html_escape(&entry.points_line())
    ));
    html.push_str("</div>\n");
}

/// Write an HTML report to a file.
pub fn write_html_report(layout: &ReportLayout, path: &Path) -> Result<()> {
    let html = generate_html(layout);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
@page { size: A4; margin: 20mm 10mm 27mm 10mm; }
body { font-family: Helvetica, Arial, sans-serif; font-size: 12pt; margin: 0; color: #000; }
h1 { font-size: 18pt; text-align: center; margin: 0 0 8mm 0; }
.meta { text-align: center; color: #555; font-size: 9pt; }
.page { break-after: page; page-break-after: always; }
.page:last-child { break-after: auto; page-break-after: auto; }
.entry { margin-bottom: 3mm; break-inside: avoid; }
.entry p { margin: 0; line-height: 7mm; }
.question { font-weight: bold; }
@media screen {
  body { background: #e5e7eb; padding: 1rem; }
  .page { background: #fff; width: 190mm; min-height: 250mm; margin: 0 auto 1rem; padding: 10mm; box-shadow: 0 1px 4px rgba(0,0,0,.2); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{paginate, sample_questions};
    use quizdeck_core::model::{Points, Question, QuestionId};

    #[test]
    fn html_report_contains_required_elements() {
        let layout = paginate("Friday Quiz", &sample_questions(3));
        let html = generate_html(&layout);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<h1>Friday Quiz</h1>"));
        assert!(html.contains("Q1: Question 0?"));
        assert!(html.contains("Answer: Answer 2"));
        assert!(html.contains("Points: 1"));
    }

    #[test]
    fn html_report_one_section_per_page() {
        let layout = paginate("Quiz", &sample_questions(25));
        let html = generate_html(&layout);
        assert_eq!(html.matches("<section class=\"page\"").count(), 3);
        assert_eq!(html.matches("<h1>").count(), 1);
    }

    #[test]
    fn html_report_escapes_content() {
        let q = Question {
            id: QuestionId(1),
            question: "Is <b> & \"quoted\"?".into(),
            answer: "line one\nline two".into(),
            points: Points::from("1"),
        };
        let html = generate_html(&paginate("A & B", &[q]));
        assert!(html.contains("Is &lt;b&gt; &amp; &quot;quoted&quot;?"));
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn html_report_write_to_file() {
        let layout = paginate("Quiz", &sample_questions(2));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&layout, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
