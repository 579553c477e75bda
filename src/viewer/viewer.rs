use std::sync::Arc;

use crate::animations::Animation;
use crate::catalog::model::CatalogEntry;
use crate::foundation::core::Progress;
use crate::foundation::error::LoopreelResult;
use crate::frame::model::Frame;
use crate::library::Library;
use crate::playback::PlaybackContext;
use crate::playback::clock::{AnimationClock, PlayState};
use crate::playback::scheduler::{TickHandle, TickId};
use crate::viewer::card::compose_card;

/// One mounted animation: catalog entry, renderer, a private clock and at most one tick.
///
/// A viewer re-renders whenever its own tick fires. Pausing drops the tick registration and
/// resuming acquires a fresh one; dropping the viewer cancels any pending tick.
pub struct Viewer {
    entry: CatalogEntry,
    animation: Arc<dyn Animation>,
    clock: AnimationClock,
    ctx: PlaybackContext,
    tick: Option<TickHandle>,
    frame: Frame,
}

impl Viewer {
    /// Resolve `key` and start a fresh cycle at progress 0.
    #[tracing::instrument(skip(library, ctx))]
    pub fn mount(library: &Library, key: &str, ctx: &PlaybackContext) -> LoopreelResult<Self> {
        let (entry, animation) = library.resolve(key)?;
        let clock = AnimationClock::new(ctx.time().clone(), ctx.cycle())?;
        let frame = animation.render(clock.progress());
        let mut viewer = Self {
            entry: entry.clone(),
            animation,
            clock,
            ctx: ctx.clone(),
            tick: None,
            frame,
        };
        viewer.ensure_tick();
        tracing::debug!(key, "viewer mounted");
        Ok(viewer)
    }

    pub fn key(&self) -> &str {
        &self.entry.key
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn state(&self) -> PlayState {
        self.clock.state()
    }

    pub fn progress(&self) -> Progress {
        self.clock.progress()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Last rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Last rendered frame laid out as a full viewer card.
    pub fn card(&self) -> Frame {
        compose_card(&self.entry, &self.frame, self.state(), self.progress())
    }

    pub fn tick_id(&self) -> Option<TickId> {
        self.tick.as_ref().map(TickHandle::id)
    }

    /// Re-render if this viewer's tick is among `fired`. Returns whether a new frame was made.
    pub fn on_ticks(&mut self, fired: &[TickId]) -> bool {
        match self.tick_id() {
            Some(id) if fired.contains(&id) => {
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Render the current progress into the held frame.
    pub fn refresh(&mut self) {
        self.frame = self.animation.render(self.clock.progress());
    }

    pub fn toggle_play_pause(&mut self) -> PlayState {
        match self.state() {
            PlayState::Playing => self.pause(),
            PlayState::Paused => self.play(),
        }
        self.state()
    }

    pub fn play(&mut self) {
        self.clock.start();
        self.ensure_tick();
        self.refresh();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        self.tick = None;
        self.refresh();
    }

    /// Progress 0 and playing, whatever the current state.
    pub fn restart(&mut self) {
        self.clock.restart();
        self.ensure_tick();
        self.refresh();
    }

    fn ensure_tick(&mut self) {
        if self.tick.is_none() {
            let now = self.ctx.now();
            self.tick = Some(self.ctx.scheduler().schedule(self.ctx.tick_interval(), now));
        }
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        tracing::debug!(key = %self.entry.key, "viewer torn down");
    }
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("key", &self.entry.key)
            .field("clock", &self.clock)
            .field("tick", &self.tick_id())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/viewer.rs"]
mod tests;
