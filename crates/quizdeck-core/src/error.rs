//! Error types for quizdeck.
//!
//! Validation failures on add/edit and out-of-range navigation are not
//! errors at all (they are guarded no-ops); everything that must reach the
//! user ends up here.

use thiserror::Error;

/// Errors surfaced by the question store, transfers, and the host gate.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The import payload is not valid JSON.
    #[error("invalid JSON file: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The import payload parsed, but its top level is not an array.
    #[error("invalid JSON format: expected an array of questions, found {found}")]
    NotAnArray { found: &'static str },

    /// An array element is not shaped like a question record.
    #[error("invalid question record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// Two records in one payload share an id.
    #[error("duplicate question id {0}")]
    DuplicateId(i64),

    /// The persisted question list could not be read back.
    #[error("stored question data under '{key}' is corrupt: {source}")]
    CorruptStore {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The entered host code did not match.
    #[error("wrong host code")]
    WrongHostCode,

    /// A write operation was attempted outside host mode.
    #[error("host mode required; run `quizdeck host unlock <code>` first")]
    NotHost,

    /// A store mutation was attempted while a quiz is being played.
    #[error("a quiz is in progress; exit playback before editing")]
    PlaybackActive,

    /// Playback was requested for an empty question set.
    #[error("cannot start a quiz without questions")]
    EmptyQuiz,

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuizError {
    /// Returns `true` for errors caused by a bad import payload.
    pub fn is_import_rejection(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidJson(_)
                | QuizError::NotAnArray { .. }
                | QuizError::InvalidRecord { .. }
                | QuizError::DuplicateId(_)
        )
    }
}

pub type Result<T, E = QuizError> = std::result::Result<T, E>;
