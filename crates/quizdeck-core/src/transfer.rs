//! JSON export and import of question sets.
//!
//! The file format is a bare JSON array of question records in store order,
//! with no version field.

use std::path::Path;

use serde_json::Value;

use crate::error::{QuizError, Result};
use crate::model::Question;

/// Default file name for exports.
pub const EXPORT_FILE_NAME: &str = "quiz_questions.json";

/// Serialize questions as a pretty-printed JSON array.
pub fn export_json(questions: &[Question]) -> Result<String> {
    Ok(serde_json::to_string_pretty(questions)?)
}

/// Write an export file, creating parent directories as needed.
pub fn write_export(questions: &[Question], path: &Path) -> Result<()> {
    let json = export_json(questions)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// Parse an import payload. Only a top-level array of well-formed records
/// with distinct ids is accepted.
pub fn import_json(bytes: &[u8]) -> Result<Vec<Question>> {
    let value: Value = serde_json::from_slice(bytes).map_err(QuizError::InvalidJson)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(QuizError::NotAnArray {
                found: kind_of(&other),
            })
        }
    };

    let mut questions = Vec::with_capacity(items.len());
    let mut seen = std::collections::HashSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let q: Question = serde_json::from_value(item).map_err(|e| QuizError::InvalidRecord {
            index,
            message: e.to_string(),
        })?;
        if !seen.insert(q.id) {
            return Err(QuizError::DuplicateId(q.id.0));
        }
        questions.push(q);
    }
    Ok(questions)
}

/// Read and parse an import file.
pub fn read_import(path: &Path) -> Result<Vec<Question>> {
    let bytes = std::fs::read(path)?;
    import_json(&bytes)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Points, QuestionId};

    fn sample() -> Vec<Question> {
        vec![
            Question {
                id: QuestionId(1_700_000_000_000),
                question: "2+2?".into(),
                answer: "4".into(),
                points: Points::from("1"),
            },
            Question {
                id: QuestionId(1_700_000_000_001),
                question: "Capital of \"France\"?".into(),
                answer: "Paris\nnot Lyon".into(),
                points: Points::from(-3),
            },
        ]
    }

    #[test]
    fn export_then_import_is_identity() {
        let questions = sample();
        let json = export_json(&questions).unwrap();
        assert_eq!(import_json(json.as_bytes()).unwrap(), questions);
    }

    #[test]
    fn export_is_two_space_indented_array() {
        let json = export_json(&sample()).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": 1700000000000"));
    }

    #[test]
    fn object_payload_is_rejected() {
        let err = import_json(br#"{"foo":"bar"}"#).unwrap_err();
        assert!(matches!(err, QuizError::NotAnArray { found: "an object" }));
        assert!(err.is_import_rejection());
    }

    #[test]
    fn garbage_is_rejected() {
        let err = import_json(b"not json at all").unwrap_err();
        assert!(matches!(err, QuizError::InvalidJson(_)));
    }

    #[test]
    fn malformed_record_is_rejected() {
        let err = import_json(br#"[{"id": 1, "question": "q"}]"#).unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn whole_number_float_ids_import() {
        let payload = br#"[
            {"id": 1.718e12, "question": "a", "answer": "b", "points": 1},
            {"id": 2.0, "question": "c", "answer": "d", "points": "2"}
        ]"#;
        let questions = import_json(payload).unwrap();
        assert_eq!(questions[0].id, QuestionId(1_718_000_000_000));
        assert_eq!(questions[1].id, QuestionId(2));
        assert!(export_json(&questions).unwrap().contains("\"id\": 2,"));
    }

    #[test]
    fn fractional_id_is_rejected() {
        let payload = br#"[
            {"id": 1, "question": "a", "answer": "b", "points": 1},
            {"id": 1.5, "question": "c", "answer": "d", "points": 1}
        ]"#;
        assert!(matches!(
            import_json(payload).unwrap_err(),
            QuizError::InvalidRecord { index: 1, .. }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let payload = br#"[
            {"id": 1, "question": "a", "answer": "b", "points": 1},
            {"id": 1, "question": "c", "answer": "d", "points": "2"}
        ]"#;
        assert!(matches!(
            import_json(payload).unwrap_err(),
            QuizError::DuplicateId(1)
        ));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(import_json(b"[]").unwrap().is_empty());
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join(EXPORT_FILE_NAME);
        write_export(&sample(), &path).unwrap();
        assert_eq!(read_import(&path).unwrap(), sample());
    }
}
