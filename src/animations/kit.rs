use kurbo::{BezPath, Point, Rect, RoundedRect, RoundedRectRadii};

use crate::foundation::core::Canvas;
use crate::frame::color::Color;
use crate::frame::model::{Frame, TextStyle};
use crate::frame::text::mono_width;

pub(crate) const GOLD: Color = Color::hex(0xe8c872);
pub(crate) const LILAC: Color = Color::hex(0xc4a0d8);
pub(crate) const MAUVE: Color = Color::hex(0xc4a0b8);
pub(crate) const SAGE: Color = Color::hex(0xa8c4a0);
pub(crate) const TAN: Color = Color::hex(0xd4a878);
pub(crate) const TEAL: Color = Color::hex(0x88b8c8);
pub(crate) const ROSE: Color = Color::hex(0xc89888);
pub(crate) const STEEL: Color = Color::hex(0xb0b8d0);

pub(crate) const PAPER: Color = Color::hex(0xd4c8a8);
pub(crate) const STAT: Color = Color::hex(0x8a8070);
pub(crate) const MUTED: Color = Color::hex(0x706858);
pub(crate) const FAINT: Color = Color::hex(0x605848);
pub(crate) const SHADOW: Color = Color::hex(0x504838);
pub(crate) const INK: Color = Color::hex(0x1e1b18);

/// The warm grey used for every inactive cell, at opacity `a`.
pub(crate) const fn dim(a: f64) -> Color {
    Color::rgba(120, 110, 100, a)
}

pub(crate) const fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

pub(crate) fn mono(size: f64, color: Color) -> TextStyle {
    TextStyle::new(size, color)
}

pub(crate) fn rrect(x: f64, y: f64, w: f64, h: f64, r: f64) -> RoundedRect {
    RoundedRect::new(x, y, x + w, y + h, r)
}

pub(crate) fn rrect_corners(x: f64, y: f64, w: f64, h: f64, radii: (f64, f64, f64, f64)) -> RoundedRect {
    RoundedRect::from_rect(
        Rect::new(x, y, x + w, y + h),
        RoundedRectRadii::new(radii.0, radii.1, radii.2, radii.3),
    )
}

/// Smooth-quad ripple `M0 y Q w/4 crest w/2 y T w y`.
pub(crate) fn ripple(y: f64, crest: f64, width: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, y));
    path.quad_to((width * 0.25, crest), (width * 0.5, y));
    path.quad_to((width * 0.75, 2.0 * y - crest), (width, y));
    path
}

/// Closed polyline through `points`.
pub(crate) fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Left-to-right wrapping placement of fixed-height boxes, like a wrapping flex row.
pub(crate) struct Flow {
    left: f64,
    right: f64,
    gap_x: f64,
    gap_y: f64,
    row_height: f64,
    cursor: Point,
}

impl Flow {
    pub(crate) fn new(origin: Point, width: f64, row_height: f64, gap_x: f64, gap_y: f64) -> Self {
        Self {
            left: origin.x,
            right: origin.x + width,
            gap_x,
            gap_y,
            row_height,
            cursor: origin,
        }
    }

    /// Top-left corner for the next box of width `w`.
    pub(crate) fn place(&mut self, w: f64) -> Point {
        if self.cursor.x > self.left && self.cursor.x + w > self.right {
            self.cursor = Point::new(self.left, self.cursor.y + self.row_height + self.gap_y);
        }
        let at = self.cursor;
        self.cursor.x += w + self.gap_x;
        at
    }
}

/// Split `widths` into rows no wider than `max`, like `flex-wrap` does.
pub(crate) fn wrap_rows(widths: &[f64], max: f64, gap: f64) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    let mut used = 0.0;
    for (i, &w) in widths.iter().enumerate() {
        let needed = if row.is_empty() { w } else { used + gap + w };
        if !row.is_empty() && needed > max {
            rows.push(std::mem::take(&mut row));
            used = w;
        } else {
            used = needed;
        }
        row.push(i);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Padded pill holding one monospace label.
pub(crate) struct Chip {
    pub(crate) size: f64,
    pub(crate) pad_x: f64,
    pub(crate) pad_y: f64,
    pub(crate) radius: f64,
}

impl Chip {
    pub(crate) fn width(&self, text: &str) -> f64 {
        mono_width(text, self.size) + 2.0 * self.pad_x
    }

    pub(crate) fn height(&self) -> f64 {
        self.size * 1.2 + 2.0 * self.pad_y
    }

    pub(crate) fn draw(&self, frame: &mut Frame, at: Point, text: &str, fill: Color, ink: Color) {
        let w = self.width(text);
        frame.fill(&rrect(at.x, at.y, w, self.height(), self.radius), fill);
        frame.text(
            Point::new(at.x + self.pad_x, self.baseline(at.y)),
            text,
            mono(self.size, ink),
        );
    }

    pub(crate) fn baseline(&self, top: f64) -> f64 {
        top + self.pad_y + self.size * 0.95
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_rows_breaks_before_overflow() {
        let rows = wrap_rows(&[40.0, 40.0, 40.0], 90.0, 4.0);
        assert_eq!(rows, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn flow_wraps_to_next_row() {
        let mut flow = Flow::new(Point::ZERO, 100.0, 20.0, 4.0, 6.0);
        assert_eq!(flow.place(60.0), Point::new(0.0, 0.0));
        assert_eq!(flow.place(60.0), Point::new(0.0, 26.0));
        assert_eq!(flow.place(30.0), Point::new(64.0, 26.0));
    }

    #[test]
    fn ripple_ends_on_baseline() {
        let path = ripple(58.0, 52.0, 280.0);
        let end = path.elements().last().and_then(|el| el.end_point());
        assert_eq!(end, Some(Point::new(280.0, 58.0)));
    }
}
