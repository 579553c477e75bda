use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time as seen by clocks and the tick scheduler.
///
/// Time is a [`Duration`] since an arbitrary per-source origin.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Simulated time that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now: Cell<Duration>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, to: Duration) {
        if to >= self.now.get() {
            self.now.set(to);
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
