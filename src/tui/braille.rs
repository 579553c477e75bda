//! Frame -> braille cells. Each terminal cell holds a 2x4 dot grid.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color as TermColor;
use ratatui::widgets::Widget;

use crate::frame::model::Frame;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::rasterize_vectors;

const DOTS_X: u32 = 2;
const DOTS_Y: u32 = 4;
/// Coverage (premultiplied alpha) a dot needs to be lit.
const LIT_ALPHA: u8 = 72;

/// Bit for dot `(dx, dy)` in a U+2800 braille pattern.
fn dot_bit(dx: u32, dy: u32) -> u32 {
    match (dx, dy) {
        (0, 3) => 0x40,
        (1, 3) => 0x80,
        (0, y) => 1 << y,
        (_, y) => 1 << (y + 3),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrailleCell {
    pub ch: char,
    pub rgb: (u8, u8, u8),
}

/// Braille cells for a premultiplied pixel grid, row-major, `ceil(w/2) x ceil(h/4)`.
/// Unlit cells are `None`; a lit cell takes the mean straight color of its lit dots.
pub fn cells_from_pixels(pixels: &FrameRGBA) -> Vec<Vec<Option<BrailleCell>>> {
    let cols = pixels.width.div_ceil(DOTS_X);
    let rows = pixels.height.div_ceil(DOTS_Y);
    let mut out = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let mut line = Vec::with_capacity(cols as usize);
        for col in 0..cols {
            let mut bits = 0u32;
            let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
            for dy in 0..DOTS_Y {
                for dx in 0..DOTS_X {
                    let Some([pr, pg, pb, pa]) =
                        pixels.pixel(col * DOTS_X + dx, row * DOTS_Y + dy)
                    else {
                        continue;
                    };
                    if pa < LIT_ALPHA {
                        continue;
                    }
                    bits |= dot_bit(dx, dy);
                    let a = u32::from(pa);
                    r += (u32::from(pr) * 255 / a).min(255);
                    g += (u32::from(pg) * 255 / a).min(255);
                    b += (u32::from(pb) * 255 / a).min(255);
                    n += 1;
                }
            }
            line.push(
                char::from_u32(0x2800 + bits)
                    .filter(|_| n > 0)
                    .map(|ch| BrailleCell {
                        ch,
                        rgb: ((r / n) as u8, (g / n) as u8, (b / n) as u8),
                    }),
            );
        }
        out.push(line);
    }
    out
}

/// Scale that fits `frame` into `area` measured in braille dots.
pub fn fit_scale(frame: &Frame, area: Rect) -> f64 {
    let size = frame.canvas().size();
    let sx = f64::from(u32::from(area.width) * DOTS_X) / size.width;
    let sy = f64::from(u32::from(area.height) * DOTS_Y) / size.height;
    sx.min(sy).max(0.0)
}

/// Widget drawing a frame's shapes centred in its area.
pub struct FrameView<'a> {
    frame: &'a Frame,
}

impl<'a> FrameView<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self { frame }
    }
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scale = fit_scale(self.frame, area);
        if area.is_empty() || scale <= 0.0 {
            return;
        }
        let pixels = match rasterize_vectors(self.frame, scale) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "frame rasterization failed");
                return;
            }
        };
        let cells = cells_from_pixels(&pixels);
        let rows = cells.len() as u16;
        let cols = cells.first().map_or(0, Vec::len) as u16;
        let x0 = area.x + area.width.saturating_sub(cols) / 2;
        let y0 = area.y + area.height.saturating_sub(rows) / 2;
        for (dy, line) in cells.iter().enumerate() {
            for (dx, cell) in line.iter().enumerate() {
                let (x, y) = (x0 + dx as u16, y0 + dy as u16);
                if x >= area.right() || y >= area.bottom() {
                    continue;
                }
                if let (Some(c), Some(target)) = (cell, buf.cell_mut((x, y))) {
                    let (r, g, b) = c.rgb;
                    target.set_char(c.ch).set_fg(TermColor::Rgb(r, g, b));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/braille.rs"]
mod tests;
