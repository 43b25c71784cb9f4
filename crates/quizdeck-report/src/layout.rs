//! Page layout shared by all report renderers.
//!
//! Geometry follows an A4 sheet in millimetres: the cursor starts 20mm from
//! the top, each question block advances it by 7 + 7 + 10mm, and a new page
//! begins before any block whose cursor is past 270mm.

use chrono::{DateTime, Utc};

use quizdeck_core::model::Question;

pub const PAGE_TOP: u32 = 20;
pub const PAGE_LIMIT: u32 = 270;
pub const LINE_HEIGHT: u32 = 7;
pub const BLOCK_GAP: u32 = 10;

/// One question as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// 1-based position in the question set.
    pub number: usize,
    pub question: String,
    pub answer: String,
    pub points: String,
}

impl ReportEntry {
    pub fn question_line(&self) -> String {
        format!("Q{}: {}", self.number, self.question)
    }

    pub fn answer_line(&self) -> String {
        format!("Answer: {}", self.answer)
    }

    pub fn points_line(&self) -> String {
        format!("Points: {}", self.points)
    }

    /// Vertical space consumed by this block.
    pub fn height() -> u32 {
        2 * LINE_HEIGHT + BLOCK_GAP
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub entries: Vec<ReportEntry>,
}

/// A paginated question report, ready to render.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub question_count: usize,
    pub pages: Vec<Page>,
}

/// Lay out `questions` in store order. An empty set yields a single page
/// carrying only the title.
pub fn paginate(title: &str, questions: &[Question]) -> ReportLayout {
    let mut pages = Vec::new();
    let mut entries = Vec::new();
    let mut cursor = PAGE_TOP;

    for (i, q) in questions.iter().enumerate() {
        if cursor > PAGE_LIMIT {
            pages.push(Page {
                number: pages.len() + 1,
                entries: std::mem::take(&mut entries),
            });
            cursor = PAGE_TOP;
        }
        entries.push(ReportEntry {
            number: i + 1,
            question: q.question.clone(),
            answer: q.answer.clone(),
            points: q.points.to_string(),
        });
        cursor += ReportEntry::height();
    }
    pages.push(Page {
        number: pages.len() + 1,
        entries,
    });

    ReportLayout {
        title: title.to_string(),
        generated_at: Utc::now(),
        question_count: questions.len(),
        pages,
    }
}

#[cfg(test)]
pub(crate) fn sample_questions(n: usize) -> Vec<Question> {
    use quizdeck_core::model::{Points, QuestionId};
    (0..n)
        .map(|i| Question {
            id: QuestionId(i as i64),
            question: format!("Question {i}?"),
            answer: format!("Answer {i}"),
            points: Points::from(i as i64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_blocks_fit_on_a_page() {
        let layout = paginate("Quiz", &sample_questions(11));
        assert_eq!(layout.pages.len(), 1);

        let layout = paginate("Quiz", &sample_questions(12));
        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[1].entries[0].number, 12);
    }

    #[test]
    fn order_and_numbering_follow_store() {
        let layout = paginate("Quiz", &sample_questions(30));
        let numbers: Vec<usize> = layout
            .pages
            .iter()
            .flat_map(|p| p.entries.iter().map(|e| e.number))
            .collect();
        assert_eq!(numbers, (1..=30).collect::<Vec<_>>());
        assert_eq!(layout.pages.len(), 3);
        assert_eq!(layout.question_count, 30);
    }

    #[test]
    fn empty_set_has_title_page() {
        let layout = paginate("Empty", &[]);
        assert_eq!(layout.pages.len(), 1);
        assert!(layout.pages[0].entries.is_empty());
    }

    #[test]
    fn entry_lines() {
        let layout = paginate("Quiz", &sample_questions(1));
        let entry = &layout.pages[0].entries[0];
        assert_eq!(entry.question_line(), "Q1: Question 0?");
        assert_eq!(entry.answer_line(), "Answer: Answer 0");
        assert_eq!(entry.points_line(), "Points: 0");
    }
}
