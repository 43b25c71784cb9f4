//! Quiz playback: what is on screen and how user actions and timer ticks
//! change it.

use crate::clock::{Clock, Metronome};
use crate::error::{QuizError, Result};
use crate::model::Question;
use crate::settings::Settings;
use crate::timer::{Phase, TimerConfig, TimerEngine, TimerEvent};

/// Something that changed the screen during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    AnswerShown,
    AnswerHidden,
    /// Moved to the question at this index.
    Advanced(usize),
    Paused,
    Resumed,
}

/// Read-only snapshot of the playback screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackView<'a> {
    /// 1-based position of the current question.
    pub number: usize,
    pub total: usize,
    pub question: &'a str,
    /// Present only while the answer is visible.
    pub answer: Option<&'a str>,
    pub points: String,
    pub phase: Phase,
    pub paused: bool,
    pub is_last: bool,
}

/// A running quiz.
///
/// Holds its own copy of the questions so edits to the store cannot affect
/// a quiz in progress. Dropping the controller ends the session; nothing
/// scheduled by it can fire afterwards.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    questions: Vec<Question>,
    current: usize,
    answer_visible: bool,
    engine: TimerEngine,
}

impl PlaybackController {
    /// Start a session at the first question.
    pub fn start(questions: Vec<Question>, settings: &Settings) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        let mut controller = Self {
            questions,
            current: 0,
            answer_visible: false,
            engine: TimerEngine::new(TimerConfig::from(settings)),
        };
        tracing::info!(
            questions = controller.questions.len(),
            "playback started"
        );
        let first = controller.engine.start_question();
        controller.drain(first);
        Ok(controller)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_paused(&self) -> bool {
        self.engine.is_paused()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn view(&self) -> PlaybackView<'_> {
        let q = self.current_question();
        PlaybackView {
            number: self.current + 1,
            total: self.questions.len(),
            question: &q.question,
            answer: self.answer_visible.then_some(q.answer.as_str()),
            points: q.points.to_string(),
            phase: self.engine.phase(),
            paused: self.engine.is_paused(),
            is_last: self.is_last(),
        }
    }

    /// Show or hide the answer by hand. Cancels any running countdown.
    pub fn toggle_answer(&mut self) -> Vec<PlaybackEvent> {
        if self.answer_visible {
            self.answer_visible = false;
            self.engine.answer_hidden();
            vec![PlaybackEvent::AnswerHidden]
        } else {
            self.answer_visible = true;
            let follow_up = self.engine.answer_shown();
            let mut events = vec![PlaybackEvent::AnswerShown];
            events.extend(self.drain(follow_up));
            events
        }
    }

    /// Move to the next question. A no-op on the last question.
    pub fn skip(&mut self) -> Vec<PlaybackEvent> {
        self.next_question()
    }

    /// Pause or resume. Resuming fires any transition that came due while
    /// paused, right after the `Resumed` event.
    pub fn toggle_pause(&mut self) -> Vec<PlaybackEvent> {
        if self.engine.toggle_pause() {
            return vec![PlaybackEvent::Paused];
        }
        let parked = self.engine.release();
        let mut events = vec![PlaybackEvent::Resumed];
        events.extend(self.drain(parked));
        events
    }

    /// Apply one elapsed second.
    pub fn tick(&mut self) -> Vec<PlaybackEvent> {
        let event = self.engine.tick();
        self.drain(event)
    }

    /// Apply every tick `metronome` reports as due on `clock`.
    pub fn catch_up(&mut self, metronome: &mut Metronome, clock: &impl Clock) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        for _ in 0..metronome.due_ticks(clock) {
            events.extend(self.tick());
        }
        events
    }

    /// End the session.
    pub fn exit(self) {
        tracing::info!(at = self.current, "playback exited");
    }

    fn next_question(&mut self) -> Vec<PlaybackEvent> {
        if self.is_last() {
            return Vec::new();
        }
        self.current += 1;
        self.answer_visible = false;
        let follow_up = self.engine.start_question();
        let mut events = vec![PlaybackEvent::Advanced(self.current)];
        events.extend(self.drain(follow_up));
        events
    }

    /// Act on timer events until the engine settles.
    fn drain(&mut self, mut pending: Option<TimerEvent>) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        while let Some(event) = pending.take() {
            tracing::debug!(?event, index = self.current, "timer fired");
            match event {
                TimerEvent::RevealAnswer => {
                    self.answer_visible = true;
                    events.push(PlaybackEvent::AnswerShown);
                    pending = self.engine.answer_shown();
                }
                TimerEvent::AdvanceQuestion => {
                    if self.is_last() {
                        continue;
                    }
                    self.current += 1;
                    self.answer_visible = false;
                    events.push(PlaybackEvent::Advanced(self.current));
                    pending = self.engine.start_question();
                }
            }
        }
        events
    }
}
