use kurbo::{BezPath, Circle, Ellipse, Point};

use crate::animations::Animation;
use crate::animations::kit::{self, INK, LILAC, MUTED, STAT, dim, mono, rrect};
use crate::foundation::core::{Canvas, Progress};
use crate::frame::color::Color;
use crate::frame::model::{Frame, StrokeStyle};

/// Nodes of a dependency graph activate one after another.
#[derive(Clone, Copy, Debug, Default)]
pub struct Thinking;

impl Thinking {
    const NODES: [(f64, f64); 7] = [
        (40.0, 30.0),
        (120.0, 20.0),
        (200.0, 40.0),
        (80.0, 80.0),
        (160.0, 75.0),
        (50.0, 130.0),
        (180.0, 125.0),
    ];
    const EDGES: [(usize, usize); 9] = [
        (0, 1),
        (1, 2),
        (0, 3),
        (1, 4),
        (3, 4),
        (2, 4),
        (3, 5),
        (4, 6),
        (5, 6),
    ];
}

impl Animation for Thinking {
    fn canvas(&self) -> Canvas {
        kit::canvas(240, 145)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let active = p.step(Self::NODES.len());
        for (a, b) in Self::EDGES {
            let lit = a <= active && b <= active;
            let (color, width) = if lit { (LILAC, 2.0) } else { (dim(0.2), 1.0) };
            f.line(Self::NODES[a].into(), Self::NODES[b].into(), color, width);
        }
        for (i, node) in Self::NODES.iter().enumerate() {
            let (r, color) = if i <= active {
                (8.0, LILAC)
            } else {
                (5.0, dim(0.25))
            };
            f.fill(&Circle::new(*node, r), color);
        }
        f.set_caption(format!("depth {} / 12", p.count(12)));
        f
    }
}

/// Attention weights of one head fill in row by row.
#[derive(Clone, Copy, Debug, Default)]
pub struct Attention;

impl Attention {
    const WORDS: [&'static str; 8] = ["The", "cat", "sat", "on", "the", "mat", "and", "purred"];
    const CELL: f64 = 28.0;
    const PITCH: f64 = 30.0;
    const HEADER: f64 = 14.0;
}

impl Animation for Attention {
    fn canvas(&self) -> Canvas {
        kit::canvas(268, 254)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        for (col, word) in Self::WORDS.iter().enumerate() {
            let x = Self::PITCH + col as f64 * Self::PITCH + Self::CELL / 2.0;
            f.text(Point::new(x, 9.0), *word, mono(8.0, STAT).centered());
        }
        for (row, word) in Self::WORDS.iter().enumerate() {
            let y = Self::HEADER + row as f64 * Self::PITCH;
            f.text(
                Point::new(Self::CELL - 2.0, y + 17.0),
                *word,
                mono(8.0, STAT).end(),
            );
            let head_progress = (p.value() - row as f64 * 0.08).max(0.0);
            for col in 0..Self::WORDS.len() {
                let weight =
                    (((row + col) as f64 * 0.8 + row as f64 * 1.2).sin() * 0.5 + 0.5).max(0.0);
                let color = if head_progress > 0.1 {
                    Color::rgba(196, 160, 216, weight * (head_progress * 2.0).min(1.0))
                } else {
                    dim(0.06)
                };
                let x = Self::PITCH + col as f64 * Self::PITCH;
                f.fill(&rrect(x, y, Self::CELL, Self::CELL, 3.0), color);
            }
        }
        f.set_caption(format!("head 3 / 12 · layer {} / 32", p.count(32)));
        f
    }
}

/// Four candidate beams grow; weak ones are pruned and fade.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeamSearch;

struct Beam {
    path: &'static [(f64, f64)],
    alive: bool,
    prune_at: f64,
}

impl BeamSearch {
    const BEAMS: [Beam; 4] = [
        Beam {
            path: &[
                (20.0, 20.0),
                (65.0, 30.0),
                (110.0, 22.0),
                (155.0, 18.0),
                (200.0, 24.0),
                (245.0, 18.0),
            ],
            alive: true,
            prune_at: 1.0,
        },
        Beam {
            path: &[
                (20.0, 20.0),
                (65.0, 50.0),
                (110.0, 55.0),
                (155.0, 60.0),
                (200.0, 65.0),
            ],
            alive: true,
            prune_at: 0.7,
        },
        Beam {
            path: &[(20.0, 20.0), (65.0, 50.0), (110.0, 75.0), (155.0, 88.0)],
            alive: false,
            prune_at: 0.5,
        },
        Beam {
            path: &[(20.0, 20.0), (65.0, 80.0), (110.0, 95.0)],
            alive: false,
            prune_at: 0.3,
        },
    ];
}

impl Animation for BeamSearch {
    fn canvas(&self) -> Canvas {
        kit::canvas(270, 105)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        let tips: Vec<(usize, f64)> = Self::BEAMS
            .iter()
            .map(|beam| {
                let segments = beam.path.len() - 1;
                let drawn = ((v * segments as f64 * 1.5).floor() as usize).min(segments);
                let visibility = if v < beam.prune_at {
                    1.0
                } else {
                    (1.0 - (v - beam.prune_at) * 4.0).max(0.0)
                };
                (drawn, visibility)
            })
            .collect();

        for (bi, (beam, &(drawn, visibility))) in Self::BEAMS.iter().zip(&tips).enumerate() {
            let pruned = !beam.alive && v > beam.prune_at;
            let color = if pruned {
                Color::rgba(180, 100, 100, 0.3)
            } else if bi == 0 {
                LILAC
            } else {
                Color::rgba(180, 160, 120, 0.35)
            };
            let mut style = StrokeStyle::new(if bi == 0 { 2.5 } else { 1.5 });
            if pruned {
                style = style.dashed(4.0, 3.0);
            }
            for pair in beam.path[..=drawn].windows(2) {
                f.stroke_styled(
                    &kurbo::Line::new(pair[0], pair[1]),
                    color.fade(visibility),
                    style,
                );
            }
        }
        for (bi, (beam, &(drawn, visibility))) in Self::BEAMS.iter().zip(&tips).enumerate() {
            let (r, color) = if bi == 0 {
                (5.0, LILAC)
            } else {
                (3.5, Color::rgba(180, 160, 120, 0.5))
            };
            f.fill(&Circle::new(beam.path[drawn], r), color.fade(visibility));
        }

        let active = 4u64.saturating_sub(p.count(3)).max(1);
        f.set_caption(format!("{active} active · score {:.2}", 0.2 + v * 0.72));
        f
    }
}

/// A walker hops across reasoning stepping stones.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChainOfThought;

impl ChainOfThought {
    const LABELS: [&'static str; 7] = ["parse", "recall", "link", "infer", "check", "refine", "output"];

    fn stone(i: usize) -> Point {
        let fi = i as f64;
        Point::new(
            20.0 + fi * 36.0,
            80.0 + (fi * 0.9).sin() * 15.0 + (i % 2) as f64 * 8.0,
        )
    }
}

impl Animation for ChainOfThought {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 130)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        f.fill(&rrect(0.0, 95.0, 280.0, 35.0, 4.0), Color::rgba(80, 120, 140, 0.08));
        for i in 0..2 {
            let fi = f64::from(i);
            let y = 100.0 + fi * 8.0;
            let crest = 96.0 + fi * 8.0 + (p.value() * 5.0 + fi).sin() * 3.0;
            f.stroke(
                &kit::ripple(y, crest, 280.0),
                Color::rgba(100, 150, 170, 0.12),
                1.0,
            );
        }

        let at = p.step(Self::LABELS.len());
        for (i, label) in Self::LABELS.iter().enumerate() {
            let s = Self::stone(i);
            let active = i <= at;
            let current = i == at;
            let radii = if current { (18.0, 10.0) } else { (14.0, 8.0) };
            let body = Ellipse::new(s, radii, 0.0);
            f.fill(
                &body,
                if active {
                    Color::rgba(196, 160, 216, 0.6)
                } else {
                    dim(0.2)
                },
            );
            if current {
                f.stroke(&body, LILAC, 2.0);
            }
            f.text(
                Point::new(s.x, s.y + 3.0),
                *label,
                mono(7.0, if active { INK } else { MUTED }).centered(),
            );
            if i > 0 && active {
                let prev = Self::stone(i - 1);
                f.stroke_styled(
                    &kurbo::Line::new((prev.x + 14.0, prev.y), (s.x - 14.0, s.y)),
                    Color::rgba(196, 160, 216, 0.4),
                    StrokeStyle::new(1.0).dashed(3.0, 2.0),
                );
            }
        }

        let s = Self::stone(at);
        let walker = kit::PAPER;
        f.fill(&Circle::new((s.x, s.y - 22.0), 5.0), walker);
        f.line(
            Point::new(s.x, s.y - 17.0),
            Point::new(s.x, s.y - 8.0),
            walker,
            1.5,
        );

        f.set_caption(format!(
            "step {} / {} : {}",
            at + 1,
            Self::LABELS.len(),
            Self::LABELS[at]
        ));
        f
    }
}

/// Relations from one domain are bridged onto another, A:B :: C:D.
#[derive(Clone, Copy, Debug, Default)]
pub struct Analogy;

impl Analogy {
    const LEFT: [(&'static str, f64); 3] = [("atom", 30.0), ("nucleus", 65.0), ("electron", 100.0)];
    const RIGHT: [(&'static str, f64); 3] = [("solar sys", 30.0), ("sun", 65.0), ("planet", 100.0)];
    const LEFT_X: f64 = 30.0;
    const RIGHT_X: f64 = 250.0;
}

impl Animation for Analogy {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 120)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let bridged = p.step(3);
        let tint = |i: usize| {
            if i < bridged {
                (Color::rgba(196, 160, 216, 0.3), LILAC)
            } else {
                (dim(0.12), MUTED)
            }
        };

        for (i, (label, y)) in Self::LEFT.iter().enumerate() {
            let (fill, ink) = tint(i);
            f.fill(&rrect(Self::LEFT_X - 25.0, y - 10.0, 55.0, 22.0, 4.0), fill);
            f.text(
                Point::new(Self::LEFT_X + 2.0, y + 4.0),
                *label,
                mono(10.0, ink).centered(),
            );
        }
        for (i, (label, y)) in Self::RIGHT.iter().enumerate() {
            let (fill, ink) = tint(i);
            f.fill(&rrect(Self::RIGHT_X - 28.0, y - 10.0, 55.0, 22.0, 4.0), fill);
            f.text(
                Point::new(Self::RIGHT_X, y + 4.0),
                *label,
                mono(10.0, ink).centered(),
            );
        }
        for i in 0..bridged {
            let ly = Self::LEFT[i].1;
            let ry = Self::RIGHT[i].1;
            let mut bridge = BezPath::new();
            bridge.move_to((Self::LEFT_X + 30.0, ly));
            bridge.curve_to((140.0, ly), (140.0, ry), (Self::RIGHT_X - 30.0, ry));
            f.stroke_styled(
                &bridge,
                LILAC.fade(0.6),
                StrokeStyle::new(1.5).dashed(4.0, 3.0),
            );
            f.text(
                Point::new(140.0, ly + (ry - ly) * 0.5 - 2.0),
                "::",
                mono(8.0, STAT).centered(),
            );
        }
        f.set_caption(format!("{bridged} / 3 relational mappings"));
        f
    }
}
