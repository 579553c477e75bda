use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Arc, Circle, Point, Vec2};

use crate::animations::Animation;
use crate::animations::kit::{self, MUTED, ROSE, SAGE, SHADOW, dim, mono, rrect};
use crate::foundation::core::{Canvas, Progress};
use crate::frame::color::Color;
use crate::frame::model::{Frame, StrokeStyle};
use crate::frame::text::mono_width;

/// A gauge needle settles from reject toward pass while checks tick off.
#[derive(Clone, Copy, Debug, Default)]
pub struct Guardrail;

impl Guardrail {
    const CHECKS: [&'static str; 4] = ["helpful", "honest", "harmless", "relevant"];
    const CENTER: Point = Point::new(140.0, 90.0);
    const RADIUS: f64 = 50.0;
}

impl Animation for Guardrail {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 130)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let v = p.value();
        let radii = Vec2::new(Self::RADIUS, Self::RADIUS);
        let band = StrokeStyle::new(8.0).round();
        for (start, sweep, color) in [
            (PI, PI, dim(0.15)),
            (PI, FRAC_PI_2, Color::rgba(200, 120, 100, 0.3)),
            (PI + FRAC_PI_2, FRAC_PI_2, Color::rgba(168, 196, 160, 0.3)),
        ] {
            f.stroke_styled(&Arc::new(Self::CENTER, radii, start, sweep, 0.0), color, band);
        }

        let wobble = (v * 20.0).sin() * (1.0 - v) * 15.0;
        let angle = (-90.0 + v * 180.0 + wobble).to_radians();
        let tip = Self::CENTER + Vec2::new(angle.cos(), angle.sin()) * Self::RADIUS;
        f.stroke_styled(
            &kurbo::Line::new(Self::CENTER, tip),
            ROSE,
            StrokeStyle::new(2.5).round(),
        );
        f.fill(&Circle::new(Self::CENTER, 4.0), ROSE);
        f.text(Point::new(82.0, 105.0), "reject", mono(8.0, MUTED));
        f.text(Point::new(180.0, 105.0), "pass", mono(8.0, MUTED));

        let checked = p.step(Self::CHECKS.len());
        let labels: Vec<String> = Self::CHECKS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} {c}", if i < checked { "[x]" } else { "[ ]" }))
            .collect();
        let widths: Vec<f64> = labels.iter().map(|l| mono_width(l, 10.0)).collect();
        let total = widths.iter().sum::<f64>() + 12.0 * (widths.len() - 1) as f64;
        let mut x = (280.0 - total) / 2.0;
        for (i, (label, w)) in labels.into_iter().zip(widths).enumerate() {
            let ink = if i < checked { SAGE } else { SHADOW };
            f.text(Point::new(x, 126.0), label, mono(10.0, ink));
            x += w + 12.0;
        }

        f.set_caption(format!(
            "{checked} / {} checks passed",
            Self::CHECKS.len()
        ));
        f
    }
}

/// A noisy policy outline is smoothed toward the reward target by feedback.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rlhf;

impl Rlhf {
    const STAGES: usize = 6;
    const SAMPLES: usize = 24;
    const CENTER: Point = Point::new(140.0, 65.0);
    const RADIUS: f64 = 35.0;
}

impl Animation for Rlhf {
    fn canvas(&self) -> Canvas {
        kit::canvas(280, 142)
    }

    fn render(&self, p: Progress) -> Frame {
        let mut f = Frame::new(self.canvas());
        let stage = p.step(Self::STAGES);
        let fs = stage as f64;
        let smoothness = 0.5 + fs * 0.08;
        let wobble = (1.0 - fs * 0.2).max(0.0);

        let outline = kit::polygon((0..Self::SAMPLES).map(|i| {
            let a = i as f64 / Self::SAMPLES as f64 * TAU;
            let noise =
                (a * 3.0 + fs).sin() * (1.0 - smoothness) * 15.0 + (a * 5.0).cos() * wobble * 8.0;
            Self::CENTER + Vec2::new(a.cos(), a.sin()) * (Self::RADIUS + noise)
        }));
        f.fill_stroke(&outline, Color::rgba(200, 152, 136, 0.2), ROSE, 2.0);
        f.stroke_styled(
            &Circle::new(Self::CENTER, Self::RADIUS),
            Color::rgba(200, 152, 136, 0.15),
            StrokeStyle::new(1.0).dashed(4.0, 3.0),
        );
        for i in 0..stage.min(4) {
            let fi = i as f64;
            f.text(
                Point::new(200.0 + fi * 4.0, 30.0 + fi * 22.0),
                "+ feedback",
                mono(9.0, ROSE.fade(0.3 + fi * 0.15)),
            );
        }

        let left = (280.0 - (Self::STAGES as f64 * 32.0 - 4.0)) / 2.0;
        for i in 0..Self::STAGES {
            let color = if i <= stage { ROSE } else { dim(0.15) };
            f.fill(&rrect(left + i as f64 * 32.0, 136.0, 28.0, 4.0, 2.0), color);
        }

        f.set_caption(format!(
            "iteration {} / {} · reward: {:.2}",
            stage + 1,
            Self::STAGES,
            0.3 + fs * 0.11
        ));
        f
    }
}
