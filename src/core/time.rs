// Monotonic millisecond time and polled deadlines
//
// Every delay in the player controller (jump cooldown, hurt window, sprint)
// is a deadline compared against a clock once per tick. Nothing is scheduled.

use std::time::Instant;

/// Milliseconds on a monotonic clock
pub type Millis = u64;

/// Source of monotonic time in milliseconds
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Wall clock backed by `Instant`, counting from its creation
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}

/// Clock that only moves when told to (deterministic simulations and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Millis,
}

impl ManualClock {
    pub fn new(now: Millis) -> Self {
        Self { now }
    }

    /// Move the clock forward
    pub fn advance(&mut self, millis: Millis) {
        self.now = self.now.saturating_add(millis);
    }

    /// Jump to an absolute time (never backwards)
    pub fn set(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now
    }
}

/// A point in time some delay-gated behavior waits for
///
/// The default, `Deadline::ELAPSED`, sits at time zero so it is already
/// behind any clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Deadline(Millis);

impl Deadline {
    /// A deadline that is never pending
    pub const ELAPSED: Deadline = Deadline(0);

    /// Deadline `delay` milliseconds after `now`
    pub fn after(now: Millis, delay: Millis) -> Self {
        Self(now.saturating_add(delay))
    }

    /// Absolute time of the deadline
    pub fn at(self) -> Millis {
        self.0
    }

    /// `now` is still strictly before the deadline
    pub fn is_pending(self, now: Millis) -> bool {
        now < self.0
    }

    /// `now` is strictly after the deadline
    pub fn is_passed(self, now: Millis) -> bool {
        now > self.0
    }
}
