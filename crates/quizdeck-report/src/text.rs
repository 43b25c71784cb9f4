//! Plain-text report: one form feed between pages, so `lp` and most
//! printers break pages where the layout does.

use anyhow::{Context, Result};
use std::path::Path;

use crate::layout::ReportLayout;

const FORM_FEED: char = '\x0c';

/// Render a layout as plain text.
pub fn generate_text(layout: &ReportLayout) -> String {
    let mut out = String::new();

    for page in &layout.pages {
        if page.number > 1 {
            out.push(FORM_FEED);
        }
        if page.number == 1 {
            out.push_str(&layout.title);
            out.push('\n');
            out.push_str(&"=".repeat(layout.title.chars().count()));
            out.push_str("\n\n");
        }
        for entry in &page.entries {
            for line in [
                entry.question_line(),
                entry.answer_line(),
                entry.points_line(),
            ] {
                // Continuation lines of multi-line answers are indented.
                out.push_str(&line.replace('\n', "\n    "));
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}

/// Write a plain-text report to a file.
pub fn write_text_report(layout: &ReportLayout, path: &Path) -> Result<()> {
    let text = generate_text(layout);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}
