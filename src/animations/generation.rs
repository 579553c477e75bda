use kurbo::{Circle, Point};

use crate::animations::Animation;
use crate::animations::kit::{self, Chip, Flow, INK, MUTED, SAGE, STAT, dim, mono, rrect};
use crate::foundation::core::{Canvas, Progress};
use crate::frame::color::Color;
use crate::frame::model::Frame;
use crate::frame::text::mono_width;

/// A draft is revised line by line; finished lines are struck through.
#[derive(Clone, Copy, Debug, Default)]
pub struct Revision;

impl Revision {
    const LINES: [&'static str; 6] = [
        "The answer involves several factors",
        "considering the primary constraints",
        "we can derive that the solution is",
        "fundamentally about optimization",
        "through iterative refinement of",
        "core parameters and assumptions",
    ];
    /// Cursor blinks per cycle (0.8 s blink over a 6 s loop).
    const BLINKS: f64 = 7.5;
}

impl Animation for Revision {
    fn canvas(&self) -> Canvas {
        kit::canvas(270, 118)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let current = p.step(Self::LINES.len());
        for (i, line) in Self::LINES.iter().enumerate() {
            let baseline = 14.0 + i as f64 * 19.0;
            let style = if i < current {
                mono(12.0, Color::hex(0x8a9a80)).strike()
            } else if i == current {
                mono(12.0, SAGE)
            } else {
                mono(12.0, dim(0.3))
            };
            f.text(Point::new(2.0, baseline), *line, style);
            if i == current {
                let phase = (p.value() * Self::BLINKS).fract();
                let opacity = (1.0 - 2.0 * phase).abs();
                let x = 2.0 + mono_width(line, 12.0) + 2.0;
                f.fill(
                    &kurbo::Rect::new(x, baseline - 12.0, x + 2.0, baseline + 2.0),
                    SAGE.fade(opacity),
                );
            }
        }
        let pass = (p.count(3) + 1).min(3);
        f.set_caption(format!("pass {pass} / 3"));
        f
    }
}

/// Tokens are sampled left to right under a fixed next-token distribution.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoding;

impl Decoding {
    const TOKENS: [&'static str; 9] = [
        "The", "key", "insight", "here", "is", "that", "models", "learn", "patterns",
    ];
    const BARS: [(f64, &'static str); 4] = [(0.82, "p1"), (0.15, "p2"), (0.02, "p3"), (0.01, "p4")];
    const CHIP: Chip = Chip {
        size: 13.0,
        pad_x: 8.0,
        pad_y: 3.0,
        radius: 4.0,
    };
}

impl Animation for Decoding {
    fn canvas(&self) -> Canvas {
        kit::canvas(260, 136)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let revealed = p.step(Self::TOKENS.len());
        let mut flow = Flow::new(Point::ZERO, 260.0, Self::CHIP.height(), 4.0, 4.0);
        for (i, token) in Self::TOKENS.iter().enumerate() {
            let text = if i <= revealed { *token } else { "---" };
            let (fill, ink) = if i < revealed {
                (SAGE, INK)
            } else if i == revealed {
                (Color::rgba(168, 196, 160, 0.3), Color::hex(0x8aaa80))
            } else {
                (dim(0.1), dim(0.3))
            };
            let at = flow.place(Self::CHIP.width(text));
            Self::CHIP.draw(&mut f, at, text, fill, ink);
        }

        let track_x = 26.0;
        let track_w = 260.0 - track_x - 38.0;
        for (i, (prob, label)) in Self::BARS.iter().enumerate() {
            let y = 88.0 + i as f64 * 13.0;
            f.text(Point::new(0.0, y + 4.0), *label, mono(10.0, STAT));
            f.fill(&rrect(track_x, y - 3.0, track_w, 6.0, 3.0), dim(0.1));
            let fill = if i == 0 {
                SAGE
            } else {
                Color::rgba(160, 180, 150, 0.4)
            };
            f.fill(&rrect(track_x, y - 3.0, track_w * prob, 6.0, 3.0), fill);
            f.text(
                Point::new(260.0, y + 4.0),
                format!("{:.0}%", prob * 100.0),
                mono(10.0, STAT).end(),
            );
        }
        f.set_caption(format!(
            "{revealed} / {} tokens · top-1 p=0.82",
            Self::TOKENS.len()
        ));
        f
    }
}

/// The sampling distribution flattens as temperature rises from 0 to 2.
#[derive(Clone, Copy, Debug, Default)]
pub struct Temperature;

impl Temperature {
    const BARS: usize = 24;
    const HEIGHT: f64 = 70.0;
}

impl Animation for Temperature {
    fn canvas(&self) -> Canvas {
        kit::canvas(260, 96)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let temp = p.value() * 2.0;
        let spread = 0.08 + temp * 0.15;
        let left = (260.0 - (Self::BARS as f64 * 10.0 - 2.0)) / 2.0;
        for i in 0..Self::BARS {
            let x = i as f64 / Self::BARS as f64;
            let height = (-(x - 0.5).powi(2) / (2.0 * spread * spread)).exp();
            let h = Self::HEIGHT * height.max(0.04);
            let color = if (x - 0.5).abs() < 0.05 {
                SAGE
            } else {
                Color::rgba(160, 180, 150, 0.2 + height * 0.6)
            };
            f.fill(
                &kit::rrect_corners(left + i as f64 * 10.0, Self::HEIGHT - h, 8.0, h, (2.0, 2.0, 0.0, 0.0)),
                color,
            );
        }

        let y = 86.0;
        f.text(Point::new(0.0, y + 4.0), "T=0", mono(10.0, MUTED));
        f.text(Point::new(260.0, y + 4.0), "T=2", mono(10.0, MUTED).end());
        let (track_x, track_w) = (30.0, 200.0);
        f.fill(&rrect(track_x, y - 2.0, track_w, 4.0, 2.0), dim(0.15));
        let knob_x = track_x + p.value().min(0.96) * track_w + 6.0;
        f.fill(&Circle::new((knob_x, y), 6.0), SAGE);

        f.set_caption(format!(
            "T={temp:.2} · entropy: {:.1} bits",
            temp * 2.1
        ));
        f
    }
}

/// Syntax and semantics threads are woven into rows over a fixed warp.
#[derive(Clone, Copy, Debug, Default)]
pub struct Weaving;

impl Weaving {
    const ROWS: usize = 10;
    const COLS: usize = 16;
}

impl Animation for Weaving {
    fn canvas(&self) -> Canvas {
        kit::canvas(256, 120)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        for c in 0..Self::COLS {
            let x = c as f64 * 16.0 + 8.0;
            f.line(Point::new(x, 0.0), Point::new(x, 120.0), dim(0.12), 1.0);
        }
        let woven = p.step(Self::ROWS);
        for r in 0..=woven {
            let row_progress = if r < woven {
                1.0
            } else {
                p.within_step(Self::ROWS)
            };
            let threads = (row_progress * Self::COLS as f64).floor() as usize;
            let live = r == woven;
            for c in 0..threads.min(Self::COLS) {
                let color = if (r + c) % 2 == 0 {
                    Color::rgba(168, 196, 160, if live { 0.8 } else { 0.5 })
                } else {
                    Color::rgba(196, 160, 216, if live { 0.6 } else { 0.3 })
                };
                f.fill(
                    &rrect(c as f64 * 16.0 + 2.0, r as f64 * 12.0 + 2.0, 12.0, 8.0, 1.0),
                    color,
                );
            }
        }
        f.set_caption(format!(
            "row {} / {} · syntax + semantics",
            woven + 1,
            Self::ROWS
        ));
        f
    }
}
