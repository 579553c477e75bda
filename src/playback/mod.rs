pub(crate) mod clock;
pub(crate) mod scheduler;
pub(crate) mod time;

use std::rc::Rc;
use std::time::Duration;

use crate::foundation::error::{LoopreelError, LoopreelResult};
use clock::DEFAULT_CYCLE;
use scheduler::TickScheduler;
use time::{SystemTimeSource, TimeSource};

/// Shared playback environment handed to every viewer: one time source, one scheduler and
/// the cycle and tick rates all clocks use.
#[derive(Clone)]
pub struct PlaybackContext {
    time: Rc<dyn TimeSource>,
    scheduler: TickScheduler,
    cycle: Duration,
    tick_interval: Duration,
}

impl PlaybackContext {
    pub fn new(
        time: Rc<dyn TimeSource>,
        cycle: Duration,
        tick_interval: Duration,
    ) -> LoopreelResult<Self> {
        if cycle.is_zero() {
            return Err(LoopreelError::validation("cycle must be > 0"));
        }
        if tick_interval.is_zero() {
            return Err(LoopreelError::validation("tick interval must be > 0"));
        }
        Ok(Self {
            time,
            scheduler: TickScheduler::new(),
            cycle,
            tick_interval,
        })
    }

    /// Wall-clock context with the default 6 s cycle, ticking at `tick_hz`.
    pub fn system(tick_hz: u32) -> LoopreelResult<Self> {
        if tick_hz == 0 {
            return Err(LoopreelError::validation("tick rate must be > 0"));
        }
        Self::new(
            Rc::new(SystemTimeSource::new()),
            DEFAULT_CYCLE,
            Duration::from_secs(1) / tick_hz,
        )
    }

    pub fn time(&self) -> &Rc<dyn TimeSource> {
        &self.time
    }

    pub fn now(&self) -> Duration {
        self.time.now()
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl std::fmt::Debug for PlaybackContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackContext")
            .field("cycle", &self.cycle)
            .field("tick_interval", &self.tick_interval)
            .field("scheduler", &self.scheduler)
            .finish()
    }
}
