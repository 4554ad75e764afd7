use crate::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use std::time::Instant;

/// Manually advanced normalized time.
///
/// Clones share the same underlying time, so the driver keeps one handle
/// to advance while the parties read theirs.
#[derive(Debug, Clone, Default)]
pub struct Clock(Rc<Cell<Time>>);

impl Clock {
    pub fn at(t: Time) -> Self {
        Self(Rc::new(Cell::new(t)))
    }
    /// Move the clock to `t`. Clamped to [0, 1] and never moves backwards.
    pub fn set(&self, t: Time) {
        self.0.set(t.clamp(0.0, DEADLINE).max(self.0.get()));
    }
    /// Position of round `round` in a session of `rounds` rounds.
    pub fn round(&self, round: usize, rounds: usize) {
        self.set(round as Time / rounds.max(1) as Time);
    }
}

impl Timeline for Clock {
    fn time(&self) -> Time {
        self.0.get()
    }
}

/// Wall-clock session of fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    duration: Duration,
}

impl From<Duration> for Deadline {
    fn from(duration: Duration) -> Self {
        Self {
            start: Instant::now(),
            duration,
        }
    }
}

impl Timeline for Deadline {
    fn time(&self) -> Time {
        if self.duration.is_zero() {
            DEADLINE
        } else {
            (self.start.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(DEADLINE)
        }
    }
}
