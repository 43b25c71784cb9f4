//! The question store and its list-editing operations.
//!
//! Every mutation mirrors the full list to durable storage under
//! [`QA_DATA_KEY`]. Writes are fire-and-forget: a failed write is logged and
//! the in-memory list stays authoritative.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionDraft, QuestionId};
use crate::storage::{Storage, QA_DATA_KEY};

/// Answer to the "clear all questions?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Ordered list of questions, mirrored to storage.
pub struct QuestionStore<S: Storage> {
    questions: Vec<Question>,
    locked: bool,
    storage: S,
}

impl<S: Storage> QuestionStore<S> {
    /// Hydrate the store from `storage`. A missing key means an empty store.
    pub fn load(storage: S) -> Result<Self> {
        let questions = match storage.get(QA_DATA_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| QuizError::CorruptStore {
                key: QA_DATA_KEY,
                source,
            })?,
            None => Vec::new(),
        };
        let store = Self {
            questions,
            locked: false,
            storage,
        };
        tracing::debug!("loaded {} questions", store.questions.len());
        Ok(store)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Whether reorder and randomize are disabled.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Append a new question. Returns `None` (and changes nothing) when any
    /// field of the draft is empty.
    pub fn add(&mut self, draft: QuestionDraft) -> Option<QuestionId> {
        let id = self.next_id();
        let question = draft.into_question(id)?;
        self.questions.push(question);
        tracing::debug!("added question {id}");
        self.persist();
        Some(id)
    }

    /// Replace the content of question `id` in place. Returns `false` when
    /// the draft is incomplete or the id is unknown.
    pub fn update(&mut self, id: QuestionId, draft: QuestionDraft) -> bool {
        let Some(slot) = self.questions.iter_mut().find(|q| q.id == id) else {
            return false;
        };
        let Some(updated) = draft.into_question(id) else {
            return false;
        };
        *slot = updated;
        tracing::debug!("updated question {id}");
        self.persist();
        true
    }

    /// Remove question `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: QuestionId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        if self.questions.len() == before {
            return false;
        }
        tracing::debug!("removed question {id}");
        self.persist();
        true
    }

    /// Move the question at `from` so it ends up at index `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if self.locked || from >= self.questions.len() || to >= self.questions.len() {
            return false;
        }
        let moved = self.questions.remove(from);
        self.questions.insert(to, moved);
        tracing::debug!("moved question from {from} to {to}");
        self.persist();
        true
    }

    /// Shuffle the whole list.
    pub fn randomize(&mut self) -> bool {
        self.randomize_with(&mut rand::thread_rng())
    }

    /// Shuffle the whole list with a caller-provided RNG.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.locked {
            return false;
        }
        self.questions.shuffle(rng);
        tracing::debug!("shuffled {} questions", self.questions.len());
        self.persist();
        true
    }

    /// Wipe every question once the caller has confirmed.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> bool {
        if confirmation != Confirmation::Confirmed {
            return false;
        }
        self.questions.clear();
        tracing::info!("cleared all questions");
        self.persist();
        true
    }

    /// Replace the whole list, as an import does. Rejects duplicate ids and
    /// leaves the store untouched in that case.
    pub fn replace_all(&mut self, questions: Vec<Question>) -> Result<()> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(QuizError::DuplicateId(q.id.0));
            }
        }
        self.questions = questions;
        tracing::info!("replaced store with {} questions", self.questions.len());
        self.persist();
        Ok(())
    }

    fn next_id(&self) -> QuestionId {
        let now = chrono::Utc::now().timestamp_millis();
        let max = self.questions.iter().map(|q| q.id.0).max();
        match max {
            Some(max) if now <= max => QuestionId(max + 1),
            _ => QuestionId(now),
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.questions) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize questions: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(QA_DATA_KEY, &json) {
            tracing::warn!("failed to persist questions: {e}");
        }
    }
}
