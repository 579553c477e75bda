use crate::foundation::error::{LoopreelError, LoopreelResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Fractional completion of one animation cycle, always in `[0, 1)`.
///
/// Renderers receive a `Progress` and derive everything else from it. The type guarantees the
/// half-open range, so derived step indices (`floor(p * n)`) are always valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Start of a cycle.
    pub const ZERO: Self = Self(0.0);

    /// Validate a raw value; rejects anything outside `[0, 1)` and non-finite input.
    pub fn new(value: f64) -> LoopreelResult<Self> {
        if !value.is_finite() || !(0.0..1.0).contains(&value) {
            return Err(LoopreelError::validation(format!(
                "progress must be in [0, 1), got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Wrap any finite value into `[0, 1)`. Non-finite input maps to zero.
    pub fn wrapping(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        let v = value.rem_euclid(1.0);
        // rem_euclid of a tiny negative number rounds up to exactly 1.0.
        if v >= 1.0 { Self::ZERO } else { Self(v) }
    }

    /// Progress of frame `index` when one cycle is sampled into `count` frames.
    pub fn from_frame(index: u64, count: u64) -> LoopreelResult<Self> {
        if count == 0 {
            return Err(LoopreelError::validation("frame count must be > 0"));
        }
        if index >= count {
            return Err(LoopreelError::validation(format!(
                "frame index {index} out of range for {count} frames"
            )));
        }
        Self::new(index as f64 / count as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Step index `floor(p * n)`, clamped into `[0, n - 1]`. Returns 0 for `n == 0`.
    pub fn step(self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.0 * n as f64).floor() as usize).min(n - 1)
    }

    /// Synthetic counter `floor(p * n)` for captions; never reaches `n`.
    pub fn count(self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        ((self.0 * n as f64).floor() as u64).min(n - 1)
    }

    /// Fractional position inside the current step of an `n`-step reveal.
    pub fn within_step(self, n: usize) -> f64 {
        let scaled = self.0 * n as f64;
        (scaled - scaled.floor()).clamp(0.0, 1.0)
    }

    /// `p * k`, the usual phase argument for periodic wobble.
    pub fn scaled(self, k: f64) -> f64 {
        self.0 * k
    }

    /// Normalized position inside the window `[start, 1)`; zero before `start`.
    pub fn after(self, start: f64) -> f64 {
        if self.0 <= start || start >= 1.0 {
            return 0.0;
        }
        (self.0 - start) / (1.0 - start)
    }
}

impl TryFrom<f64> for Progress {
    type Error = LoopreelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Logical drawing area of a frame, in renderer units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> LoopreelResult<Self> {
        if width == 0 || height == 0 {
            return Err(LoopreelError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn rect(self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }

    /// Pixel dimensions after scaling by `scale`, rounded up and never zero.
    pub fn scaled_px(self, scale: f64) -> (u32, u32) {
        let w = (f64::from(self.width) * scale).ceil().max(1.0) as u32;
        let h = (f64::from(self.height) * scale).ceil().max(1.0) as u32;
        (w, h)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
