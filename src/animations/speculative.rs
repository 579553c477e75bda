use std::f64::consts::PI;

use kurbo::{Circle, Point, Vec2};

use crate::animations::Animation;
use crate::animations::kit::{
    self, Chip, FAINT, GOLD, LILAC, MUTED, ROSE, SAGE, SHADOW, STEEL, TAN, TEAL, dim, mono, rrect,
    wrap_rows,
};
use crate::foundation::core::{Canvas, Progress};
use crate::foundation::math::sigmoid;
use crate::frame::color::Color;
use crate::frame::model::{Frame, StrokeStyle};
use crate::frame::text::mono_width;

/// Several features orbit one neuron until context collapses them to one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Superposition;

impl Superposition {
    const FEATURES: [(&'static str, Color, f64); 5] = [
        ("cat", LILAC, 0.0),
        ("fur", SAGE, 2.1),
        ("soft", GOLD, 4.2),
        ("pet", TEAL, 1.0),
        ("purr", ROSE, 3.3),
    ];
    const COLLAPSE_AT: f64 = 0.7;
    const WINNER: usize = 0;
    const CENTER: Point = Point::new(140.0, 70.0);
}

impl Animation for Superposition {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 140)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        let collapsed = v > Self::COLLAPSE_AT;
        let ct = p.after(Self::COLLAPSE_AT);

        f.stroke_styled(
            &Circle::new(Self::CENTER, 45.0),
            Color::rgba(176, 184, 208, 0.2),
            StrokeStyle::new(2.0).dashed(4.0, 3.0),
        );
        f.fill(&Circle::new(Self::CENTER, 3.0), STEEL);

        for (i, (label, color, phase)) in Self::FEATURES.iter().enumerate() {
            let fi = i as f64;
            let winner = i == Self::WINNER;
            let angle = phase + v * 4.0;
            let (radius, opacity) = match (collapsed, winner) {
                (true, true) => (0.0, 0.6 + ct * 0.4),
                (true, false) => (45.0 + ct * 40.0, (0.6 - ct * 1.5).max(0.0)),
                (false, _) => (
                    28.0 + (v * 3.0 + fi).sin() * 8.0,
                    0.3 + (v * 5.0 + fi * 1.5).sin() * 0.2,
                ),
            };
            let at = Self::CENTER + Vec2::new(angle.cos(), angle.sin()) * radius;
            let size = if collapsed && winner {
                14.0 + ct * 6.0
            } else {
                12.0
            };
            let bubble = Circle::new(at, size);
            f.fill(&bubble, color.with_alpha_u8(0x30).fade(opacity));
            f.stroke(&bubble, color.fade(opacity), 1.0);
            f.text(
                Point::new(at.x, at.y + 3.0),
                *label,
                mono(8.0, color.fade(opacity)).centered(),
            );
        }
        if collapsed {
            f.text(
                Point::new(140.0, 128.0),
                format!("collapsed: \"{}\"", Self::FEATURES[Self::WINNER].0),
                mono(9.0, STEEL.fade(ct)).centered(),
            );
        }

        f.set_caption(if collapsed {
            "1 feature / neuron · polysemantic".to_string()
        } else {
            format!("{} features / neuron · polysemantic", Self::FEATURES.len())
        });
        f
    }
}

/// Older facts blur out as new training layers overwrite them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forgetting;

impl Forgetting {
    const LAYERS: [(&'static str, Color); 5] = [
        ("The capital of Assyria is Assur", GOLD),
        ("Newton published Principia in 1687", LILAC),
        ("Mitochondria: cellular respiration", SAGE),
        ("c = 299,792,458 m/s", TEAL),
        ("GPT-4 released March 2023", TAN),
    ];
}

impl Animation for Forgetting {
    fn canvas(&self) -> Canvas {
        kit::canvas(270, 120)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let panel = rrect(0.5, 0.5, 269.0, 119.0, 8.0);
        f.fill(&panel, Color::rgba(45, 40, 35, 0.3));
        f.stroke(&panel, Color::rgba(180, 160, 120, 0.1), 1.0);

        let count = Self::LAYERS.len();
        let newest = p.step(count + 1) as i64;
        for (i, (text, color)) in Self::LAYERS.iter().enumerate() {
            let age = newest - i as i64;
            let (opacity, blur) = if age > 0 {
                (
                    (0.8 - age as f64 * 0.2).max(0.04),
                    (age as f64 * 1.5).min(4.0),
                )
            } else if age == 0 {
                (0.8, 0.0)
            } else {
                (0.1, 0.0)
            };
            // Blur is rendered as extra fade, half strength at the 4px maximum.
            let mut style = mono(11.0, color.fade(opacity * (1.0 - blur / 8.0)));
            if age > 2 {
                style = style.strike();
            }
            f.text(Point::new(12.0, 14.0 + i as f64 * 22.0 + 11.0), *text, style);
        }

        let intact = count.saturating_sub(newest.max(1) as usize - 1);
        f.set_caption(format!(
            "{intact} / {count} weights intact · gradient overwrite"
        ));
        f
    }
}

/// Retrieved memories look equally confident until the fakes are exposed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hallucination;

impl Hallucination {
    const MEMORIES: [(&'static str, bool); 8] = [
        ("Paris = France", true),
        ("Einstein b.1879", true),
        ("Euler = topology", false),
        ("Mars: 2 moons", true),
        ("Tesla = AC", true),
        ("Plato = Republic", false),
        ("DNA: Watson 1953", true),
        ("Bach b.1685", false),
    ];
    const TRUTH_AT: f64 = 0.85;
    const CHIP: Chip = Chip {
        size: 10.0,
        pad_x: 10.0,
        pad_y: 5.0,
        radius: 6.0,
    };
}

impl Animation for Hallucination {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 112)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let revealed = p.step(Self::MEMORIES.len());
        let show_truth = p.value() > Self::TRUTH_AT;

        let texts: Vec<&str> = Self::MEMORIES
            .iter()
            .enumerate()
            .map(|(i, (text, _))| if i < revealed { *text } else { "---" })
            .collect();
        let widths: Vec<f64> = texts.iter().map(|t| Self::CHIP.width(t)).collect();
        let h = Self::CHIP.height();
        for (r, row) in wrap_rows(&widths, 280.0, 6.0).iter().enumerate() {
            let row_w = row.iter().map(|&i| widths[i]).sum::<f64>() + 6.0 * (row.len() - 1) as f64;
            let mut x = (280.0 - row_w) / 2.0;
            let y = r as f64 * (h + 6.0);
            for &i in row {
                let visible = i < revealed;
                let fake = show_truth && !Self::MEMORIES[i].1;
                let (fill, border, ink) = match (visible, fake) {
                    (false, _) => (dim(0.06), dim(0.08), dim(0.15)),
                    (true, true) => (
                        Color::rgba(200, 120, 100, 0.15),
                        Color::rgba(200, 120, 100, 0.3),
                        Color::hex(0xc87878),
                    ),
                    (true, false) => (
                        Color::rgba(176, 184, 208, 0.12),
                        Color::rgba(176, 184, 208, 0.2),
                        STEEL,
                    ),
                };
                let at = Point::new(x, y);
                Self::CHIP.draw(&mut f, at, texts[i], fill, ink);
                f.stroke(&rrect(x, y, widths[i], h, Self::CHIP.radius), border, 1.0);
                x += widths[i] + 6.0;
            }
        }

        let fakes = Self::MEMORIES.iter().filter(|(_, real)| !real).count();
        f.set_caption(if show_truth {
            format!("{fakes} confabulations · p(correct) indistinguishable")
        } else {
            format!("{revealed} retrieved · confidence: high")
        });
        f
    }
}

/// Performance stays flat with scale, then jumps past a threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct Emergence;

impl Emergence {
    const THRESHOLD: f64 = 0.6;
    const STEEPNESS: f64 = 18.0;
    const SCALE_LABELS: [&'static str; 5] = ["1B", "10B", "50B", "100B", "500B"];
    const DOTS: usize = 30;

    fn plot(t: f64, value: f64) -> Point {
        Point::new(30.0 + t * 240.0, 100.0 - value * 85.0)
    }
}

impl Animation for Emergence {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 120)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        let capability = sigmoid(v, Self::STEEPNESS, Self::THRESHOLD);
        let axis = dim(0.2);

        f.line(Point::new(30.0, 100.0), Point::new(270.0, 100.0), axis, 1.0);
        f.line(Point::new(30.0, 10.0), Point::new(30.0, 100.0), axis, 1.0);
        f.text(
            Point::new(150.0, 118.0),
            "parameters",
            mono(9.0, MUTED).centered(),
        );
        f.text(Point::new(4.0, 55.0), "perf", mono(9.0, MUTED));
        let last = (Self::SCALE_LABELS.len() - 1) as f64;
        for (i, label) in Self::SCALE_LABELS.iter().enumerate() {
            f.text(
                Point::new(30.0 + i as f64 / last * 240.0, 110.0),
                *label,
                mono(7.0, FAINT).centered(),
            );
        }

        for i in 0..Self::DOTS {
            let t = i as f64 / Self::DOTS as f64;
            if t > v {
                break;
            }
            let val = sigmoid(t, Self::STEEPNESS, Self::THRESHOLD);
            let color = if val > 0.5 {
                STEEL
            } else {
                Color::rgba(176, 184, 208, 0.3)
            };
            f.fill(&Circle::new(Self::plot(t, val), 2.5), color);
        }

        let tx = 30.0 + Self::THRESHOLD * 240.0;
        f.stroke_styled(
            &kurbo::Line::new((tx, 10.0), (tx, 100.0)),
            Color::rgba(176, 184, 208, 0.15),
            StrokeStyle::new(1.0).dashed(3.0, 3.0),
        );
        if v > Self::THRESHOLD {
            f.text(Point::new(tx, 8.0), "threshold", mono(8.0, STEEL).centered());
        }
        if v > 0.05 {
            let marker = Circle::new(Self::plot(v, capability), 5.0);
            if capability > 0.5 {
                f.fill_stroke(&marker, STEEL, STEEL, 2.0);
            } else {
                f.fill(&marker, Color::rgba(176, 184, 208, 0.4));
            }
        }

        f.set_caption(match capability {
            c if c < 0.1 => "no signal",
            c if c < 0.5 => "sub-threshold",
            c if c < 0.9 => "discontinuous jump · mechanism unknown",
            _ => "fully emergent",
        });
        f
    }
}

/// Hidden-layer states surface as unreadable notes, deeper layers more vivid.
#[derive(Clone, Copy, Debug, Default)]
pub struct InnerMonologue;

impl InnerMonologue {
    const THOUGHTS: [(&'static str, u32, f64); 8] = [
        ("parse intent...", 1, 30.0),
        ("domain: physics?", 4, 60.0),
        ("neg · metaphor", 8, 40.0),
        ("retrieve: river analogy", 12, 55.0),
        ("register: curious", 18, 35.0),
        ("reframe as question", 24, 50.0),
        ("p=0.83", 28, 45.0),
        ("-> output", 32, 50.0),
    ];
    const INK: [f64; 8] = [0.15, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.9];
    const LANE: f64 = 17.0;
}

impl Animation for InnerMonologue {
    fn canvas(&self) -> Canvas {
        kit::canvas(270, 136)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let visible_count = p.step(Self::THOUGHTS.len());
        for i in 0..Self::THOUGHTS.len() {
            let color = if i < visible_count {
                Color::rgba(176, 184, 208, 0.06)
            } else {
                dim(0.02)
            };
            f.fill(&rrect(0.0, i as f64 * Self::LANE, 270.0, 14.0, 3.0), color);
        }
        for (i, (text, layer, x)) in Self::THOUGHTS.iter().enumerate() {
            let visible = i < visible_count;
            let current = visible_count > 0 && i == visible_count - 1;
            let y = i as f64 * Self::LANE;
            let shown = if visible { *text } else { "---" };
            let tag = format!("L{layer}");
            let mut w = 16.0 + mono_width(shown, 10.0);
            if visible {
                w += 6.0 + mono_width(&tag, 8.0);
            }
            let pill = rrect(*x, y, w, 14.0, 7.0);
            if current {
                f.fill(&pill, Color::rgba(176, 184, 208, 0.2));
                f.stroke(&pill, Color::rgba(176, 184, 208, 0.3), 1.0);
            } else if visible {
                f.fill(&pill, Color::rgba(176, 184, 208, 0.08));
            }
            let ink = if visible {
                Color::rgba(176, 184, 208, Self::INK[i])
            } else {
                dim(0.1)
            };
            f.text(Point::new(x + 8.0, y + 11.0), shown, mono(10.0, ink).italic());
            if visible {
                f.text(
                    Point::new(x + 8.0 + mono_width(shown, 10.0) + 6.0, y + 11.0),
                    tag,
                    mono(8.0, SHADOW),
                );
            }
        }
        let layer = Self::THOUGHTS[visible_count.min(Self::THOUGHTS.len() - 1)].1;
        f.set_caption(format!("layer {layer} / 32 · not human-readable"));
        f
    }
}

/// One word in five languages converges on a single concept neuron.
#[derive(Clone, Copy, Debug, Default)]
pub struct Polyglot;

impl Polyglot {
    const WORDS: [(&'static str, &'static str, f64, Color); 5] = [
        ("dog", "EN", 0.0, GOLD),
        ("chien", "FR", PI * 0.4, LILAC),
        ("\u{72AC}", "JA", PI * 0.8, SAGE),
        ("\u{0643}\u{0644}\u{0628}", "AR", PI * 1.2, TEAL),
        ("Hund", "DE", PI * 1.6, ROSE),
    ];
    const CENTER: Point = Point::new(140.0, 70.0);
    const CORE_AT: f64 = 0.7;
}

impl Animation for Polyglot {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 135)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let converge = (p.value() * 1.5).min(1.0);
        let show_core = p.value() > Self::CORE_AT;
        let core = p.after(Self::CORE_AT);
        let r = 60.0 * (1.0 - converge * 0.85);
        let spot = |angle: f64| Self::CENTER + Vec2::new(angle.cos(), angle.sin()) * r;

        for (_, _, angle, color) in Self::WORDS {
            f.stroke_styled(
                &kurbo::Line::new(Self::CENTER, spot(angle)),
                color.fade(0.2 + converge * 0.3),
                StrokeStyle::new(1.0).dashed(3.0, 2.0),
            );
        }
        for (text, lang, angle, color) in Self::WORDS {
            let at = spot(angle);
            f.fill(&Circle::new(at, 14.0), color.with_alpha_u8(0x15));
            f.text(
                Point::new(at.x, at.y - 5.0),
                text,
                mono(12.0, color).centered(),
            );
            f.text(
                Point::new(at.x, at.y + 8.0),
                lang,
                mono(7.0, MUTED).centered(),
            );
        }
        if show_core {
            let ring = Circle::new(Self::CENTER, 18.0);
            f.fill(&ring, Color::rgba(176, 184, 208, 0.15).fade(core));
            f.stroke(&ring, STEEL.fade(core), 1.5);
            f.text(
                Point::new(Self::CENTER.x, Self::CENTER.y + 4.0),
                "CONCEPT",
                mono(9.0, STEEL.fade(core)).centered().bold(),
            );
        }

        f.set_caption(if show_core {
            "language-independent activation · n#47291".to_string()
        } else {
            format!("{} tokens -> 1 neuron", Self::WORDS.len())
        });
        f
    }
}
