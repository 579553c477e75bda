use kurbo::{Circle, Point};

use crate::animations::Animation;
use crate::animations::kit::{self, GOLD, MAUVE, SAGE, dim, mono, rrect};
use crate::foundation::core::{Canvas, Progress};
use crate::frame::color::Color;
use crate::frame::model::{Frame, StrokeStyle};

/// A scan line sweeps a block grid; relevant blocks light up behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indexing;

impl Indexing {
    const ROWS: usize = 10;
    const COLS: usize = 16;
}

impl Animation for Indexing {
    fn canvas(&self) -> Canvas {
        kit::canvas(254, 198)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let scan_row = p.step(Self::ROWS);
        for i in 0..Self::ROWS * Self::COLS {
            let (row, col) = (i / Self::COLS, i % Self::COLS);
            let dist = row.abs_diff(scan_row);
            let found = row < scan_row && (i * 7 + row * 13) % 17 < 1;
            let color = if found {
                GOLD
            } else if dist < 2 {
                Color::rgba(180, 160, 120, 1.0 - dist as f64 * 0.4)
            } else {
                dim(0.12)
            };
            f.fill(
                &rrect(col as f64 * 16.0, row as f64 * 20.0, 14.0, 18.0, 2.0),
                color,
            );
        }
        f.set_caption(format!("{} / 2048 blocks scanned", p.count(2048)));
        f
    }
}

/// Scattered tokens drift toward three semantic clusters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Embedding;

impl Embedding {
    const CENTERS: [(f64, f64); 3] = [(70.0, 45.0), (190.0, 35.0), (130.0, 110.0)];
    const COLORS: [Color; 3] = [GOLD, SAGE, MAUVE];
}

impl Animation for Embedding {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 130)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let t = (p.value() * 1.5).min(1.0);
        for i in 0..30 {
            let fi = f64::from(i);
            let x = 20.0 + (fi * 0.7).cos() * 80.0 + (fi * 1.3).sin() * 50.0;
            let y = 15.0 + (fi * 0.9).sin() * 55.0 + (fi * 0.4).cos() * 35.0;
            let c = i as usize % 3;
            let (cx, cy) = Self::CENTERS[c];
            let color = if p.value() > 0.3 {
                Self::COLORS[c]
            } else {
                dim(0.3)
            };
            let at = Point::new(x + (cx - x) * t * 0.6, y + (cy - y) * t * 0.6);
            f.fill(&Circle::new(at, 3.5), color);
        }
        if p.value() > 0.6 {
            let opacity = ((p.value() - 0.6) * 2.5).min(0.6);
            for (center, color) in Self::CENTERS.iter().zip(Self::COLORS) {
                f.stroke_styled(
                    &Circle::new(*center, 28.0),
                    color.fade(opacity),
                    StrokeStyle::new(1.0).dashed(3.0, 3.0),
                );
            }
        }
        f.set_caption(format!("{} / 768 dimensions", p.count(768)));
        f
    }
}

/// A line fishes documents out of a passage pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rag;

impl Rag {
    const DOCS: usize = 6;
}

impl Animation for Rag {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 150)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        f.fill(&rrect(0.0, 50.0, 280.0, 100.0, 4.0), Color::rgba(80, 120, 140, 0.15));
        for i in 0..3 {
            let fi = f64::from(i);
            let y = 58.0 + fi * 12.0;
            let crest = 52.0 + fi * 12.0 + (v * 6.0 + fi).sin() * 4.0;
            f.stroke(
                &kit::ripple(y, crest, 280.0),
                Color::rgba(100, 150, 170, 0.15),
                1.0,
            );
        }

        let bob = (v * 4.0).sin() * 5.0;
        f.line(
            Point::new(140.0, 10.0),
            Point::new(140.0, 40.0 + bob),
            Color::rgba(180, 160, 120, 0.4),
            1.5,
        );
        f.fill(&Circle::new((140.0, 42.0 + bob), 3.0), GOLD);

        let caught = p.step(Self::DOCS);
        for i in 0..Self::DOCS {
            let fi = i as f64;
            let is_caught = i < caught;
            let base_x = 30.0 + (i % 3) as f64 * 90.0;
            let base_y = 70.0 + (i / 3) as f64 * 35.0;
            let (tx, ty) = if is_caught {
                (140.0, 20.0 - fi * 3.0)
            } else {
                (
                    base_x + (v * 3.0 + fi * 2.0).sin() * 8.0,
                    base_y + (v * 2.0 + fi).cos() * 4.0,
                )
            };
            let (fill, ink) = if is_caught {
                (GOLD, Color::hex(0x2a2520))
            } else {
                (Color::rgba(120, 150, 160, 0.3), Color::rgba(140, 160, 170, 0.5))
            };
            f.fill(&rrect(tx - 16.0, ty - 6.0, 32.0, 14.0, 3.0), fill);
            f.text(
                Point::new(tx, ty + 3.0),
                format!("doc {}", i + 1),
                mono(7.0, ink).centered(),
            );
        }
        f.set_caption(format!("{caught} / {} passages retrieved", Self::DOCS));
        f
    }
}
