use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Frames that will be pushed.
    pub frames: u64,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing indices, between one `begin` and one `end`.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> LoopreelResult<()>;
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> LoopreelResult<()>;
    fn end(&mut self) -> LoopreelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LoopreelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> LoopreelResult<()> {
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LoopreelResult<()> {
        self.finished = true;
        Ok(())
    }
}

pub(crate) fn check_order(last: Option<u64>, idx: u64) -> LoopreelResult<()> {
    match last {
        Some(last) if idx <= last => Err(LoopreelError::encode(format!(
            "out-of-order frame index {idx} after {last}"
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn check_size(cfg: &SinkConfig, frame: &FrameRGBA) -> LoopreelResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(LoopreelError::encode(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    frame.check_len()
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &std::path::Path) -> LoopreelResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
