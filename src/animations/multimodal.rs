use kurbo::Point;

use crate::animations::Animation;
use crate::animations::kit::{self, dim, mono, rrect};
use crate::foundation::core::{Canvas, Progress};
use crate::frame::color::Color;
use crate::frame::model::Frame;

/// Noise resolves into an image from the center outward.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageGen;

impl ImageGen {
    const SIZE: usize = 10;
}

impl Animation for ImageGen {
    fn canvas(&self) -> Canvas {
        kit::canvas(189, 189)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        let half = Self::SIZE as f64 / 2.0;
        for i in 0..Self::SIZE * Self::SIZE {
            let (row, col) = ((i / Self::SIZE) as f64, (i % Self::SIZE) as f64);
            let dist = ((row - half).powi(2) + (col - half).powi(2)).sqrt() / half;
            let color = if v > dist * 0.8 {
                let hue = (row * 30.0 + col * 20.0 + v * 360.0) % 360.0;
                Color::hsl(hue, (40.0 + v * 30.0) / 100.0, (45.0 + v * 20.0) / 100.0)
            } else {
                dim(0.08)
            };
            f.fill(&rrect(col * 19.0, row * 19.0, 18.0, 18.0, 2.0), color);
        }
        f.set_caption(format!("step {} / 50", p.count(50)));
        f
    }
}

/// A waveform and its mel spectrogram are synthesized left to right.
#[derive(Clone, Copy, Debug, Default)]
pub struct Voice;

impl Voice {
    const BARS: usize = 32;
    const BINS: usize = 40;
}

impl Animation for Voice {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 116)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();

        let left = (280.0 - (Self::BARS as f64 * 8.0 - 2.0)) / 2.0;
        for i in 0..Self::BARS {
            let t = i as f64 / Self::BARS as f64;
            let active = t < v;
            let amp = if active {
                ((t * 20.0 + v * 10.0).sin() * 0.5 + 0.5) * (0.3 + (t * 6.0).sin() * 0.7)
            } else {
                0.0
            };
            let h = 80.0 * amp.max(0.04);
            let color = if active {
                Color::rgba(136, 184, 200, 0.4 + amp * 0.6)
            } else {
                dim(0.1)
            };
            f.fill(&rrect(left + i as f64 * 8.0, 40.0 - h / 2.0, 6.0, h, 3.0), color);
        }

        let left = (280.0 - (Self::BINS as f64 * 6.0 - 1.0)) / 2.0;
        let floor = 114.0;
        for i in 0..Self::BINS {
            let t = i as f64 / Self::BINS as f64;
            if t >= v {
                continue;
            }
            let level = (t * 12.0 + v * 8.0).sin() * 0.5 + 0.5;
            let h = level * 24.0;
            if h > 0.0 {
                f.fill(
                    &rrect(left + i as f64 * 6.0, floor - h, 5.0, h, 1.0),
                    Color::rgba(136, 184, 200, 0.3),
                );
            }
        }

        f.set_caption(format!(
            "{:.1}s / 2.4s · 24kHz · mel spectrogram",
            v * 2.4
        ));
        f
    }
}

/// An image is cut into patches that are embedded one at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vision;

impl Vision {
    const GRID: usize = 6;
    const CELL: f64 = 36.0;
    const PITCH: f64 = 39.0;
    const PAD: f64 = 4.0;
}

impl Animation for Vision {
    fn canvas(&self) -> Canvas {
        kit::canvas(239, 239)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        f.fill(&rrect(0.0, 0.0, 239.0, 239.0, 6.0), dim(0.06));
        let total = Self::GRID * Self::GRID;
        let scanned = p.step(total);
        for idx in 0..total {
            let (row, col) = (idx / Self::GRID, idx % Self::GRID);
            let x = Self::PAD + col as f64 * Self::PITCH;
            let y = Self::PAD + row as f64 * Self::PITCH;
            let active = idx < scanned;
            let fill = if active {
                let hue = ((row * 40 + col * 60) % 360) as f64;
                Color::hsl(hue, 0.30, 0.35)
            } else {
                dim(0.06)
            };
            f.fill(&rrect(x, y, Self::CELL, Self::CELL, 4.0), fill);
            if idx == scanned {
                f.stroke(
                    &rrect(x + 1.0, y + 1.0, Self::CELL - 2.0, Self::CELL - 2.0, 3.0),
                    Color::rgba(136, 184, 200, 0.6),
                    2.0,
                );
            }
            if active {
                f.text(
                    Point::new(x + Self::CELL / 2.0, y + Self::CELL / 2.0 + 2.5),
                    format!("{}", idx + 1),
                    mono(7.0, Color::rgba(255, 255, 255, 0.5)).centered(),
                );
            }
        }
        f.set_caption(format!("patch {scanned} / {total} · 16x16px · ViT-L/14"));
        f
    }
}
