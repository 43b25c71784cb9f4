//! Core data model types for quizdeck.
//!
//! A question set is an ordered `Vec<Question>`; the order is the playback
//! order and the export order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a question, derived from its creation time in
/// milliseconds since the Unix epoch.
///
/// Any JSON number with an integral value is accepted on input (`1.7e12`
/// included); ids are always written back as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Number", into = "i64")]
pub struct QuestionId(pub i64);

impl TryFrom<serde_json::Number> for QuestionId {
    type Error = String;

    fn try_from(n: serde_json::Number) -> Result<Self, Self::Error> {
        if let Some(id) = n.as_i64() {
            return Ok(QuestionId(id));
        }
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(QuestionId(f as i64))
            }
            _ => Err(format!("question id must be a whole number, got {n}")),
        }
    }
}

impl From<QuestionId> for i64 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(QuestionId)
    }
}

/// Point value of a question.
///
/// Points are numeric-as-text: the authoring form produces strings, while
/// hand-written files often carry bare numbers. Whichever form was read is
/// the form written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Points {
    Number(serde_json::Number),
    Text(String),
}

impl Points {
    pub fn is_empty(&self) -> bool {
        match self {
            Points::Number(_) => false,
            Points::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Points::Number(n) => write!(f, "{n}"),
            Points::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Points {
    fn from(s: &str) -> Self {
        Points::Text(s.to_string())
    }
}

impl From<String> for Points {
    fn from(s: String) -> Self {
        Points::Text(s)
    }
}

impl From<i64> for Points {
    fn from(n: i64) -> Self {
        Points::Number(n.into())
    }
}

/// A single quiz entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub points: Points,
}

/// The editable content of a question, as entered in the authoring form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub points: Option<Points>,
}

impl QuestionDraft {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        points: impl Into<Points>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            points: Some(points.into()),
        }
    }

    /// Pre-fill a draft from an existing question, as the edit form does.
    pub fn from_question(q: &Question) -> Self {
        Self {
            question: q.question.clone(),
            answer: q.answer.clone(),
            points: Some(q.points.clone()),
        }
    }

    /// All three fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty()
            && !self.answer.is_empty()
            && self.points.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Consume the draft into a record with the given id, if it is complete.
    pub(crate) fn into_question(self, id: QuestionId) -> Option<Question> {
        if !self.is_complete() {
            return None;
        }
        Some(Question {
            id,
            question: self.question,
            answer: self.answer,
            points: self.points?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_keep_their_wire_form() {
        let text: Points = serde_json::from_str("\"10\"").unwrap();
        let number: Points = serde_json::from_str("10").unwrap();
        assert_eq!(text, Points::Text("10".into()));
        assert_eq!(number, Points::from(10));
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"10\"");
        assert_eq!(serde_json::to_string(&number).unwrap(), "10");
        assert_eq!(text.to_string(), number.to_string());
    }

    #[test]
    fn zero_and_negative_points_are_accepted() {
        assert!(QuestionDraft::new("q", "a", "0").is_complete());
        assert!(QuestionDraft::new("q", "a", "-5").is_complete());
        assert!(QuestionDraft::new("q", "a", 0).is_complete());
    }

    #[test]
    fn incomplete_drafts() {
        assert!(!QuestionDraft::new("", "a", "1").is_complete());
        assert!(!QuestionDraft::new("q", "", "1").is_complete());
        assert!(!QuestionDraft::new("q", "a", "").is_complete());
        assert!(!QuestionDraft::default().is_complete());
    }

    #[test]
    fn question_parses_original_file_shape() {
        let json = r#"{"id": 1718000000000, "question": "2+2?", "answer": "4", "points": "1"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, QuestionId(1_718_000_000_000));
        assert_eq!(q.points.to_string(), "1");
    }

    #[test]
    fn integral_float_ids_are_accepted() {
        let q: Question = serde_json::from_str(
            r#"{"id": 1.7e12, "question": "q", "answer": "a", "points": 1}"#,
        )
        .unwrap();
        assert_eq!(q.id, QuestionId(1_700_000_000_000));
        assert!(serde_json::to_string(&q).unwrap().contains(r#""id":1700000000000"#));

        let id: QuestionId = serde_json::from_str("42.0").unwrap();
        assert_eq!(id, QuestionId(42));
    }

    #[test]
    fn fractional_ids_are_rejected() {
        assert!(serde_json::from_str::<QuestionId>("1.5").is_err());
        assert!(serde_json::from_str::<QuestionId>("\"7\"").is_err());
        assert!(serde_json::from_str::<QuestionId>("1e300").is_err());
    }

    #[test]
    fn question_id_parse() {
        assert_eq!("42".parse::<QuestionId>().unwrap(), QuestionId(42));
        assert!("abc".parse::<QuestionId>().is_err());
    }
}
