use kurbo::{Circle, Point};

use crate::animations::Animation;
use crate::animations::kit::{self, Flow, GOLD, MAUVE, MUTED, SAGE, STAT, TAN, dim, mono, rrect};
use crate::foundation::core::{Canvas, Progress};
use crate::foundation::math::group_thousands;
use crate::frame::color::Color;
use crate::frame::model::Frame;
use crate::frame::text::mono_width;

/// A fixed token budget fills segment by segment.
#[derive(Clone, Copy, Debug, Default)]
pub struct Context;

impl Context {
    const SEGMENTS: [(&'static str, f64, Color); 6] = [
        ("system", 0.02, Color::hex(0x8a7a60)),
        ("history", 0.15, Color::hex(0xa08860)),
        ("user", 0.05, Color::hex(0xc4a870)),
        ("retrieval", 0.25, SAGE),
        ("generation", 0.20, TAN),
        ("free", 0.33, Color::rgba(120, 110, 100, 0.12)),
    ];
    const WINDOW: f64 = 128_000.0;
    /// Share of the window used by the end of a cycle.
    const PEAK: f64 = 0.67;
    const WIDTH: f64 = 260.0;
}

impl Animation for Context {
    fn canvas(&self) -> Canvas {
        kit::canvas(260, 62)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let used = p.value() * Self::PEAK;
        let last = Self::SEGMENTS.len() - 1;
        let mut start = 0.0;
        for (i, (_, share, color)) in Self::SEGMENTS.iter().enumerate() {
            let filled = ((used - start) / share).clamp(0.0, 1.0);
            let base = if filled > 0.0 { *color } else { dim(0.06) };
            let radii = match i {
                0 => (4.0, 0.0, 0.0, 4.0),
                i if i == last => (0.0, 4.0, 4.0, 0.0),
                _ => (0.0, 0.0, 0.0, 0.0),
            };
            f.fill(
                &kit::rrect_corners(start * Self::WIDTH, 0.0, share * Self::WIDTH, 24.0, radii),
                base.fade(0.3 + filled * 0.7),
            );
            start += share;
        }
        f.stroke(
            &rrect(0.5, 0.5, Self::WIDTH - 1.0, 23.0, 4.0),
            Color::rgba(180, 160, 120, 0.15),
            1.0,
        );

        let mut legend = Flow::new(Point::new(0.0, 34.0), Self::WIDTH, 11.0, 12.0, 4.0);
        for (label, _, color) in Self::SEGMENTS {
            let w = 8.0 + 4.0 + mono_width(label, 9.0);
            let at = legend.place(w);
            f.fill(&rrect(at.x, at.y + 1.5, 8.0, 8.0, 2.0), color);
            f.text(Point::new(at.x + 12.0, at.y + 9.0), label, mono(9.0, STAT));
        }

        let tokens = (p.value() * Self::WINDOW * Self::PEAK).floor() as u64;
        f.set_caption(format!(
            "{} / {} tokens",
            group_thousands(tokens),
            group_thousands(Self::WINDOW as u64)
        ));
        f
    }
}

/// A power meter drains a reservoir into a row of buckets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Energy;

impl Energy {
    const BUCKETS: usize = 5;
}

impl Animation for Energy {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 160)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        let frame_ink = Color::rgba(180, 160, 120, 0.3);

        f.stroke(
            &rrect(105.0, 10.0, 70.0, 90.0, 6.0),
            Color::rgba(180, 160, 120, 0.2),
            2.0,
        );
        if v > 0.0 {
            f.fill(
                &rrect(108.0, 12.0 + (1.0 - v) * 85.0, 64.0, v * 85.0, 4.0),
                Color::rgba(136, 184, 200, 0.2),
            );
        }
        f.line(
            Point::new(140.0, 10.0),
            Point::new(140.0, -5.0 + (v * 6.0).sin() * 3.0),
            frame_ink,
            1.0,
        );
        f.stroke(&Circle::new((140.0, 6.0), 8.0), frame_ink, 1.5);
        f.line(
            Point::new(140.0, 6.0),
            Point::new(140.0 + (v * 12.0).cos() * 7.0, 6.0 + (v * 12.0).sin() * 7.0),
            Color::rgba(180, 160, 120, 0.4),
            1.5,
        );

        let filled = p.step(Self::BUCKETS);
        let filling = p.within_step(Self::BUCKETS);
        for i in 0..Self::BUCKETS {
            let x = 20.0 + i as f64 * 52.0;
            let level = if i < filled {
                1.0
            } else if i == filled {
                filling
            } else {
                0.0
            };
            let outline = kit::polygon([
                Point::new(x, 125.0),
                Point::new(x + 5.0, 155.0),
                Point::new(x + 35.0, 155.0),
                Point::new(x + 40.0, 125.0),
            ]);
            f.stroke(
                &outline,
                if i < filled { TAN } else { dim(0.2) },
                1.5,
            );
            if level > 0.0 {
                f.fill(
                    &rrect(x + 6.0, 155.0 - level * 28.0, 28.0, level * 28.0, 2.0),
                    Color::rgba(136, 184, 200, 0.35),
                );
            }
        }

        let watts = 80.0 + v * 270.0;
        f.set_caption(format!(
            "{}W · {:.4} kWh · {:.1}g CO2",
            watts.floor() as u64,
            v * 0.008,
            v * 4.2
        ));
        f
    }
}

/// Raw text splits into byte-pair subwords with vocabulary ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    const SOURCE: &'static str = "The quick brown fox jumps over";
    const TOKENS: [&'static str; 9] = [
        "The", "_qu", "ick", "_br", "own", "_fox", "_jump", "s", "_over",
    ];
    const COLORS: [Color; 3] = [GOLD, MAUVE, SAGE];
}

impl Animation for Tokenizer {
    fn canvas(&self) -> Canvas {
        kit::canvas(260, 84)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        f.text(
            Point::new(0.0, 14.0),
            Self::SOURCE,
            mono(13.0, Color::rgba(180, 160, 120, 0.4)),
        );
        f.text(Point::new(0.0, 40.0), "->", mono(10.0, MUTED));

        let revealed = p.step(Self::TOKENS.len());
        let mut flow = Flow::new(Point::new(18.0, 28.0), 242.0, 18.0, 3.0, 4.0);
        for (i, token) in Self::TOKENS.iter().enumerate() {
            let shown = i < revealed;
            let color = Self::COLORS[i % Self::COLORS.len()];
            let id = format!("{}", 1000 + i * 137);
            let text = if shown { *token } else { "---" };
            let mut w = 12.0 + mono_width(text, 11.0);
            if shown {
                w += 2.0 + mono_width(&id, 8.0);
            }
            let at = flow.place(w);
            let body = rrect(at.x, at.y, w, 18.0, 3.0);
            let (fill, border, ink) = if shown {
                (color.with_alpha_u8(0x22), color.with_alpha_u8(0x44), color)
            } else {
                (dim(0.06), dim(0.1), dim(0.2))
            };
            f.fill(&body, fill);
            f.stroke(&body, border, 1.0);
            f.text(Point::new(at.x + 6.0, at.y + 13.0), text, mono(11.0, ink));
            if shown {
                f.text(
                    Point::new(at.x + 6.0 + mono_width(text, 11.0) + 2.0, at.y + 13.0),
                    id,
                    mono(8.0, MUTED),
                );
            }
        }
        f.set_caption(format!(
            "{revealed} / {} subwords · BPE",
            Self::TOKENS.len()
        ));
        f
    }
}
