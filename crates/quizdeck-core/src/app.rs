//! Application facade tying the store, host gate, settings and playback
//! together.
//!
//! `QuizApp` is the single writer of the question store. It is either in
//! edit mode (no playback session) or playing; store edits are refused while
//! playing, and every edit requires host mode.

use crate::error::{QuizError, Result};
use crate::gate::HostGate;
use crate::model::Question;
use crate::playback::{PlaybackController, PlaybackEvent};
use crate::settings::Settings;
use crate::storage::Storage;
use crate::store::{Confirmation, QuestionStore};
use crate::transfer;

pub struct QuizApp<S: Storage> {
    store: QuestionStore<S>,
    gate: HostGate,
    settings: Settings,
    playback: Option<PlaybackController>,
}

impl<S: Storage> QuizApp<S> {
    /// Hydrate the store and host flag from `storage`.
    pub fn open(storage: S, settings: Settings) -> Result<Self> {
        let gate = HostGate::load(&storage)?;
        let mut store = QuestionStore::load(storage)?;
        store.set_locked(settings.lock_order);
        Ok(Self {
            store,
            gate,
            settings,
            playback: None,
        })
    }

    pub fn questions(&self) -> &[Question] {
        self.store.questions()
    }

    pub fn store(&self) -> &QuestionStore<S> {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_host(&self) -> bool {
        self.gate.is_host()
    }

    pub fn unlock_host(&mut self, input: &mut String) -> Result<()> {
        self.gate.unlock(self.store.storage_mut(), input)
    }

    pub fn lock_host(&mut self) -> Result<()> {
        self.gate.lock(self.store.storage_mut())
    }

    /// Replace the settings. Host only; a running quiz keeps the settings
    /// it started with.
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        self.gate.require_host()?;
        self.store.set_locked(settings.lock_order);
        self.settings = settings;
        Ok(())
    }

    /// Mutable access to the list editor: host mode, no quiz running.
    pub fn editor(&mut self) -> Result<&mut QuestionStore<S>> {
        self.gate.require_host()?;
        if self.playback.is_some() {
            return Err(QuizError::PlaybackActive);
        }
        Ok(&mut self.store)
    }

    /// Replace the question set from a JSON payload. On any error the store
    /// is left unchanged. Returns the number of imported questions.
    pub fn import_json(&mut self, bytes: &[u8]) -> Result<usize> {
        let editor = self.editor()?;
        let questions = transfer::import_json(bytes)?;
        let count = questions.len();
        editor.replace_all(questions)?;
        Ok(count)
    }

    pub fn export_json(&self) -> Result<String> {
        transfer::export_json(self.store.questions())
    }

    /// Wipe the question set and end any running quiz. Returns `false` when
    /// the caller declined.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> Result<bool> {
        self.gate.require_host()?;
        if !self.store.clear_all(confirmation) {
            return Ok(false);
        }
        if let Some(session) = self.playback.take() {
            session.exit();
        }
        Ok(true)
    }

    /// Enter playback with a snapshot of the current question order.
    pub fn start_quiz(&mut self) -> Result<&mut PlaybackController> {
        if let Some(old) = self.playback.take() {
            old.exit();
        }
        let session = PlaybackController::start(self.store.questions().to_vec(), &self.settings)?;
        Ok(self.playback.insert(session))
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    pub fn playback(&self) -> Option<&PlaybackController> {
        self.playback.as_ref()
    }

    pub fn playback_mut(&mut self) -> Option<&mut PlaybackController> {
        self.playback.as_mut()
    }

    /// Forward one elapsed second to the running quiz, if any.
    pub fn tick(&mut self) -> Vec<PlaybackEvent> {
        match self.playback.as_mut() {
            Some(session) => session.tick(),
            None => Vec::new(),
        }
    }

    /// Leave playback. Returns `false` if no quiz was running.
    pub fn exit_quiz(&mut self) -> bool {
        match self.playback.take() {
            Some(session) => {
                session.exit();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::HOST_CODE;
    use crate::model::QuestionDraft;
    use crate::storage::MemoryStorage;

    fn host_app() -> QuizApp<MemoryStorage> {
        let mut app = QuizApp::open(MemoryStorage::new(), Settings::default()).unwrap();
        app.unlock_host(&mut HOST_CODE.to_string()).unwrap();
        app
    }

    #[test]
    fn editing_requires_host() {
        let mut app = QuizApp::open(MemoryStorage::new(), Settings::default()).unwrap();
        assert!(matches!(app.editor().err(), Some(QuizError::NotHost)));
        assert!(matches!(
            app.update_settings(Settings::default()),
            Err(QuizError::NotHost)
        ));
    }

    #[test]
    fn editing_is_refused_during_playback() {
        let mut app = host_app();
        app.editor()
            .unwrap()
            .add(QuestionDraft::new("q", "a", "1"))
            .unwrap();
        app.start_quiz().unwrap();
        assert!(matches!(app.editor().err(), Some(QuizError::PlaybackActive)));
        assert!(app.exit_quiz());
        assert!(app.editor().is_ok());
    }

    #[test]
    fn empty_store_cannot_start() {
        let mut app = host_app();
        assert!(matches!(app.start_quiz().err(), Some(QuizError::EmptyQuiz)));
        assert!(!app.is_playing());
    }

    #[test]
    fn bad_import_leaves_store_unchanged() {
        let mut app = host_app();
        app.editor()
            .unwrap()
            .add(QuestionDraft::new("q", "a", "1"))
            .unwrap();
        let before = app.questions().to_vec();
        let err = app.import_json(br#"{"foo":"bar"}"#).unwrap_err();
        assert!(err.is_import_rejection());
        assert_eq!(app.questions(), before.as_slice());
    }

    #[test]
    fn import_export_roundtrip() {
        let mut app = host_app();
        for i in 0..3 {
            app.editor()
                .unwrap()
                .add(QuestionDraft::new(format!("q{i}"), "a", "2"))
                .unwrap();
        }
        let before = app.questions().to_vec();
        let json = app.export_json().unwrap();
        assert_eq!(app.import_json(json.as_bytes()).unwrap(), 3);
        assert_eq!(app.questions(), before.as_slice());
    }

    #[test]
    fn clear_all_ends_playback() {
        let mut app = host_app();
        app.editor()
            .unwrap()
            .add(QuestionDraft::new("q", "a", "1"))
            .unwrap();
        app.start_quiz().unwrap();
        assert!(!app.clear_all(Confirmation::Declined).unwrap());
        assert!(app.is_playing());
        assert!(app.clear_all(Confirmation::Confirmed).unwrap());
        assert!(!app.is_playing());
        assert!(app.questions().is_empty());
    }

    #[test]
    fn lock_order_setting_locks_store() {
        let settings = Settings {
            lock_order: true,
            ..Settings::default()
        };
        let app = QuizApp::open(MemoryStorage::new(), settings).unwrap();
        assert!(app.store().is_locked());
    }

    #[test]
    fn host_flag_shares_storage_with_questions() {
        let mut app = host_app();
        app.editor()
            .unwrap()
            .add(QuestionDraft::new("q", "a", "1"))
            .unwrap();
        let storage = app.store().storage().clone();
        let reopened = QuizApp::open(storage, Settings::default()).unwrap();
        assert!(reopened.is_host());
        assert_eq!(reopened.questions().len(), 1);
    }
}
