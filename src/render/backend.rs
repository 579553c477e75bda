use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::frame::color::Color;
use crate::frame::model::Frame;

/// Rasterized frame pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent buffer, or filled with `clear` when given.
    pub fn new(width: u32, height: u32, clear: Option<Color>) -> Self {
        let px = clear.map_or([0; 4], |c| c.to_premul().to_array());
        let mut data = vec![0u8; width as usize * height as usize * 4];
        if px != [0; 4] {
            for chunk in data.chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
        Self {
            width,
            height,
            data,
            premultiplied: true,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|s| [s[0], s[1], s[2], s[3]])
    }

    /// Straight-alpha copy of the pixels, as image encoders expect.
    pub fn to_straight(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub(crate) fn check_len(&self) -> LoopreelResult<()> {
        if self.data.len() != self.width as usize * self.height as usize * 4 {
            return Err(LoopreelError::render(
                "frame data size mismatch with width*height*4",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Pixels per canvas unit.
    pub scale: f64,
    /// Background painted under every frame. `None` leaves it transparent.
    pub clear: Option<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            clear: None,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> LoopreelResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(LoopreelError::validation("render scale must be finite and > 0"));
        }
        Ok(())
    }
}

/// Turns frames into pixels.
pub trait RenderBackend {
    fn render(&mut self, frame: &Frame) -> LoopreelResult<FrameRGBA>;

    fn settings(&self) -> &RenderSettings;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Cpu,
}

pub fn create_backend(
    kind: BackendKind,
    settings: RenderSettings,
) -> LoopreelResult<Box<dyn RenderBackend>> {
    settings.validate()?;
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(settings))),
    }
}
