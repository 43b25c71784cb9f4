//! Playback timer state machine.
//!
//! One `TimerEngine` runs per playback session and is reset each time a
//! question is shown. It never looks at a wall clock: the owner calls
//! [`TimerEngine::tick`] once per elapsed second (see [`crate::clock`]).
//!
//! ```text
//!            start_question (auto-reveal on)
//!   Idle ──────────────────────────────────▶ Delay(think)
//!    ▲                                          │ reaches 0
//!    │ RevealAnswer (auto-next off)             ▼
//!    ├──────────────────────────────── RevealCountdown(reveal)
//!    │                                          │ reaches 0, auto-next on
//!    │ AdvanceQuestion                          ▼
//!    └──────────────────────────────── NextCountdown(next)
//! ```
//!
//! A zero-length phase is passed through within the same call. While paused
//! nothing fires: a zero-length phase is parked with zero remaining seconds
//! and released by [`TimerEngine::release`] once playback resumes.

use std::fmt;

use crate::settings::Settings;

/// Timer durations for one session, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Length of the Delay phase.
    pub think_secs: u32,
    /// Reveal countdown, or `None` when auto-reveal is off.
    pub reveal_secs: Option<u32>,
    /// Next-question countdown, or `None` when auto-next is off.
    pub next_secs: Option<u32>,
}

impl From<&Settings> for TimerConfig {
    fn from(s: &Settings) -> Self {
        Self {
            think_secs: s.think_time_secs,
            reveal_secs: s.auto_reveal.then_some(s.auto_reveal_secs),
            next_secs: s.auto_next.then_some(s.auto_next_secs),
        }
    }
}

/// Current timer phase. Only non-idle phases carry a remaining count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Delay { remaining: u32 },
    RevealCountdown { remaining: u32 },
    NextCountdown { remaining: u32 },
}

impl Phase {
    pub fn remaining(&self) -> Option<u32> {
        match *self {
            Phase::Idle => None,
            Phase::Delay { remaining }
            | Phase::RevealCountdown { remaining }
            | Phase::NextCountdown { remaining } => Some(remaining),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    fn with_remaining(self, remaining: u32) -> Phase {
        match self {
            Phase::Idle => Phase::Idle,
            Phase::Delay { .. } => Phase::Delay { remaining },
            Phase::RevealCountdown { .. } => Phase::RevealCountdown { remaining },
            Phase::NextCountdown { .. } => Phase::NextCountdown { remaining },
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => f.write_str("idle"),
            Phase::Delay { remaining } => write!(f, "Answering starts in {remaining}s"),
            Phase::RevealCountdown { remaining } => write!(f, "Answer in {remaining}s"),
            Phase::NextCountdown { remaining } => write!(f, "Next question in {remaining}s"),
        }
    }
}

/// A transition the owner of the engine has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The reveal countdown finished; show the answer.
    RevealAnswer,
    /// The next-question countdown finished; move on if possible.
    AdvanceQuestion,
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: TimerConfig,
    phase: Phase,
    paused: bool,
}

impl TimerEngine {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            paused: false,
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "timer pause toggled");
        self.paused
    }

    /// Fire a phase that was parked at zero while paused. Does nothing while
    /// still paused or when no phase is parked.
    pub fn release(&mut self) -> Option<TimerEvent> {
        if self.paused {
            return None;
        }
        let event = match self.phase {
            Phase::RevealCountdown { remaining: 0 } => TimerEvent::RevealAnswer,
            Phase::NextCountdown { remaining: 0 } => TimerEvent::AdvanceQuestion,
            _ => return None,
        };
        self.phase = Phase::Idle;
        Some(event)
    }

    /// Drop any running countdown.
    pub fn cancel(&mut self) {
        if !self.phase.is_idle() {
            tracing::debug!(phase = ?self.phase, "countdown cancelled");
        }
        self.phase = Phase::Idle;
    }

    /// Restart phase evaluation for a freshly shown question with a hidden
    /// answer.
    pub fn start_question(&mut self) -> Option<TimerEvent> {
        self.cancel();
        if self.config.reveal_secs.is_none() {
            return None;
        }
        if self.config.think_secs == 0 {
            return self.enter_reveal_countdown();
        }
        self.phase = Phase::Delay {
            remaining: self.config.think_secs,
        };
        None
    }

    /// The answer just became visible, by the timer or by hand.
    pub fn answer_shown(&mut self) -> Option<TimerEvent> {
        self.cancel();
        match self.config.next_secs {
            None => None,
            Some(0) => self.fire_or_park(
                Phase::NextCountdown { remaining: 0 },
                TimerEvent::AdvanceQuestion,
            ),
            Some(remaining) => {
                self.phase = Phase::NextCountdown { remaining };
                None
            }
        }
    }

    /// The answer was hidden by hand. The reveal sequence stays off until
    /// the next `start_question`.
    pub fn answer_hidden(&mut self) {
        self.cancel();
    }

    /// Apply one elapsed second.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.paused {
            return None;
        }
        let remaining = self.phase.remaining()?.saturating_sub(1);
        if remaining > 0 {
            self.phase = self.phase.with_remaining(remaining);
            return None;
        }
        match self.phase {
            Phase::Idle => None,
            Phase::Delay { .. } => self.enter_reveal_countdown(),
            Phase::RevealCountdown { .. } => {
                self.phase = Phase::Idle;
                Some(TimerEvent::RevealAnswer)
            }
            Phase::NextCountdown { .. } => {
                self.phase = Phase::Idle;
                Some(TimerEvent::AdvanceQuestion)
            }
        }
    }

    fn enter_reveal_countdown(&mut self) -> Option<TimerEvent> {
        match self.config.reveal_secs {
            None => {
                self.phase = Phase::Idle;
                None
            }
            Some(0) => self.fire_or_park(
                Phase::RevealCountdown { remaining: 0 },
                TimerEvent::RevealAnswer,
            ),
            Some(remaining) => {
                self.phase = Phase::RevealCountdown { remaining };
                None
            }
        }
    }

    fn fire_or_park(&mut self, parked: Phase, event: TimerEvent) -> Option<TimerEvent> {
        if self.paused {
            tracing::debug!(?event, "zero-length phase parked while paused");
            self.phase = parked;
            return None;
        }
        self.phase = Phase::Idle;
        Some(event)
    }
}
