//! quizdeck-core — question store, playback timer engine, and host gate.
//!
//! This crate holds everything the `quizdeck` binary needs apart from
//! report rendering: the question data model and its durable store, the
//! list editor, the timed playback state machine, JSON transfers, and the
//! host-mode toggle.

pub mod app;
pub mod clock;
pub mod error;
pub mod gate;
pub mod model;
pub mod playback;
pub mod settings;
pub mod storage;
pub mod store;
pub mod timer;
pub mod transfer;

pub use app::QuizApp;
pub use error::QuizError;
pub use model::{Points, Question, QuestionDraft, QuestionId};
