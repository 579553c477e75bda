use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::foundation::core::Progress;
use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::playback::time::TimeSource;

/// Default loop length shared by every animation.
pub const DEFAULT_CYCLE: Duration = Duration::from_secs(6);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayState {
    Playing,
    Paused,
}

impl PlayState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loops one progress value over a fixed cycle.
///
/// Progress is always recomputed from a stored anchor timestamp as
/// `(elapsed mod cycle) / cycle`; nothing is accumulated per tick, so late or dropped ticks
/// never cause drift. While paused the elapsed time is frozen and resuming re-anchors so the
/// loop continues from the frozen value.
pub struct AnimationClock {
    time: Rc<dyn TimeSource>,
    cycle: Duration,
    anchor: Duration,
    frozen: Option<Duration>,
}

impl AnimationClock {
    /// A new clock starts `Playing` at progress 0.
    pub fn new(time: Rc<dyn TimeSource>, cycle: Duration) -> LoopreelResult<Self> {
        if cycle.is_zero() {
            return Err(LoopreelError::validation("clock cycle must be > 0"));
        }
        let anchor = time.now();
        Ok(Self {
            time,
            cycle,
            anchor,
            frozen: None,
        })
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    pub fn state(&self) -> PlayState {
        if self.frozen.is_some() {
            PlayState::Paused
        } else {
            PlayState::Playing
        }
    }

    pub fn is_playing(&self) -> bool {
        self.frozen.is_none()
    }

    /// Time since the last reset, excluding paused spans.
    pub fn elapsed(&self) -> Duration {
        match self.frozen {
            Some(elapsed) => elapsed,
            None => self.time.now().saturating_sub(self.anchor),
        }
    }

    pub fn progress(&self) -> Progress {
        let elapsed = self.elapsed().as_nanos();
        let cycle = self.cycle.as_nanos();
        Progress::wrapping((elapsed % cycle) as f64 / cycle as f64)
    }

    /// Number of completed cycles since the last reset.
    pub fn completed_cycles(&self) -> u64 {
        let n = self.elapsed().as_nanos() / self.cycle.as_nanos();
        u64::try_from(n).unwrap_or(u64::MAX)
    }

    /// Resume from the frozen value. No-op while playing.
    pub fn start(&mut self) {
        if let Some(elapsed) = self.frozen.take() {
            self.anchor = self.time.now().saturating_sub(elapsed);
            tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "clock resumed");
        }
    }

    /// Freeze progress. No-op while paused.
    pub fn pause(&mut self) {
        if self.frozen.is_none() {
            let elapsed = self.elapsed();
            self.frozen = Some(elapsed);
            tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "clock paused");
        }
    }

    pub fn toggle(&mut self) -> PlayState {
        match self.state() {
            PlayState::Playing => self.pause(),
            PlayState::Paused => self.start(),
        }
        self.state()
    }

    /// Progress 0 and `Playing`, from any state.
    pub fn restart(&mut self) {
        self.anchor = self.time.now();
        self.frozen = None;
        tracing::debug!("clock restarted");
    }
}

impl fmt::Debug for AnimationClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationClock")
            .field("cycle", &self.cycle)
            .field("state", &self.state())
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
