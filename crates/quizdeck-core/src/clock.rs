//! Clock abstraction feeding whole-second ticks to playback.
//!
//! The interactive player polls a [`Metronome`] against a [`SystemClock`];
//! tests drive the same code with a [`ManualClock`].

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Converts elapsed clock time into a count of whole-second ticks.
///
/// Sub-second remainders carry over between polls, so ticks land exactly
/// one second apart no matter how irregularly `due_ticks` is called.
#[derive(Debug, Clone)]
pub struct Metronome {
    last_tick: Duration,
}

impl Metronome {
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            last_tick: clock.now(),
        }
    }

    /// Number of ticks that became due since the previous call.
    pub fn due_ticks(&mut self, clock: &impl Clock) -> u64 {
        let elapsed = clock.now().saturating_sub(self.last_tick);
        let ticks = elapsed.as_secs();
        self.last_tick += Duration::from_secs(ticks);
        ticks
    }

    /// Start counting whole seconds afresh from `clock`'s current time,
    /// dropping any part-second already elapsed. Used when playback resumes.
    pub fn restart(&mut self, clock: &impl Clock) {
        self.last_tick = clock.now();
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, clock: &impl Clock) -> Duration {
        let next = self.last_tick + Duration::from_secs(1);
        next.saturating_sub(clock.now())
    }
}
