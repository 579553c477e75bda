use crate::animations::Animation;
use crate::catalog::model::CatalogEntry;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Progress;
use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::frame::model::Frame;
use crate::playback::clock::PlayState;
use crate::render::backend::RenderBackend;
use crate::viewer::card::compose_card;

/// What each output frame shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Framing {
    /// The animation canvas alone.
    #[default]
    Bare,
    /// The animation inside its viewer card.
    Card,
}

/// The frame for `entry` at `progress`, bare or carded.
pub fn frame_at(
    entry: &CatalogEntry,
    animation: &dyn Animation,
    progress: Progress,
    framing: Framing,
) -> Frame {
    let frame = animation.render(progress);
    match framing {
        Framing::Bare => frame,
        Framing::Card => compose_card(entry, &frame, PlayState::Playing, progress),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOpts {
    /// Samples per cycle; frame `i` shows progress `i / frames_per_cycle`.
    pub frames_per_cycle: u64,
    pub cycles: u32,
    /// Playback rate reported to the sink.
    pub fps: u32,
    pub framing: Framing,
}

impl CycleOpts {
    /// One full cycle of `cycle_secs` at `fps`.
    pub fn at_fps(fps: u32, cycle_secs: f64) -> LoopreelResult<Self> {
        if fps == 0 || !cycle_secs.is_finite() || cycle_secs <= 0.0 {
            return Err(LoopreelError::validation(
                "fps and cycle length must be positive",
            ));
        }
        let frames_per_cycle = (f64::from(fps) * cycle_secs).round().max(1.0) as u64;
        Ok(Self {
            frames_per_cycle,
            cycles: 1,
            fps,
            framing: Framing::Bare,
        })
    }

    pub fn total_frames(&self) -> u64 {
        self.frames_per_cycle * u64::from(self.cycles)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames: u64,
    pub width: u32,
    pub height: u32,
}

/// Render `opts.cycles` loops of `animation` into `sink`.
#[tracing::instrument(skip_all, fields(key = %entry.key, frames = opts.total_frames()))]
pub fn render_cycle(
    entry: &CatalogEntry,
    animation: &dyn Animation,
    opts: &CycleOpts,
    backend: &mut dyn RenderBackend,
    sink: &mut dyn FrameSink,
) -> LoopreelResult<RenderStats> {
    if opts.frames_per_cycle == 0 || opts.cycles == 0 {
        return Err(LoopreelError::validation("render range must be non-empty"));
    }
    let total = opts.total_frames();
    let mut stats = RenderStats::default();
    for idx in 0..total {
        let progress = Progress::from_frame(idx % opts.frames_per_cycle, opts.frames_per_cycle)?;
        let frame = frame_at(entry, animation, progress, opts.framing);
        let pixels = backend.render(&frame)?;
        if idx == 0 {
            stats.width = pixels.width;
            stats.height = pixels.height;
            sink.begin(SinkConfig {
                width: pixels.width,
                height: pixels.height,
                fps: opts.fps,
                frames: total,
            })?;
        }
        sink.push_frame(idx, &pixels)?;
        stats.frames += 1;
        if (idx + 1) % u64::from(opts.fps.max(1)) == 0 {
            tracing::debug!(done = idx + 1, total, "render progress");
        }
    }
    sink.end()?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
