use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, check_order, check_size, ensure_parent_dir};
use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::render::backend::FrameRGBA;

/// Encode one frame as a straight-alpha RGBA PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> LoopreelResult<()> {
    frame.check_len()?;
    ensure_parent_dir(path)?;
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight())
        .ok_or_else(|| LoopreelError::encode("png buffer does not match frame size"))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Writes `<prefix>_00000.png`, `<prefix>_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    last_idx: Option<u64>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}_{idx:05}.png", self.prefix))
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoopreelResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output directory '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> LoopreelResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| LoopreelError::encode("png sink not started"))?;
        check_order(self.last_idx, idx)?;
        check_size(cfg, frame)?;
        let path = self.path_for(idx);
        write_png(&path, frame)?;
        tracing::trace!(path = %path.display(), "png frame written");
        self.last_idx = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> LoopreelResult<()> {
        self.cfg
            .take()
            .ok_or_else(|| LoopreelError::encode("png sink not started"))?;
        tracing::debug!(frames = self.written.len(), dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}
