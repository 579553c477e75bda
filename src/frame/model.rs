use kurbo::{PathEl, Shape};

use crate::foundation::core::{Affine, BezPath, Canvas, Point};
use crate::foundation::math::Fnv1a64;
use crate::frame::color::Color;

/// Flattening tolerance used when shapes are converted to paths, in canvas units.
pub const PATH_TOLERANCE: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    #[serde(default)]
    pub anchor: TextAnchor,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strike: bool,
}

impl TextStyle {
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            anchor: TextAnchor::Start,
            bold: false,
            italic: false,
            strike: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.anchor = TextAnchor::Middle;
        self
    }

    pub fn end(mut self) -> Self {
        self.anchor = TextAnchor::End;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn strike(mut self) -> Self {
        self.strike = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    /// `(dash, gap)` lengths in canvas units.
    #[serde(default)]
    pub dash: Option<(f64, f64)>,
    #[serde(default)]
    pub round_cap: bool,
}

impl StrokeStyle {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            dash: None,
            round_cap: false,
        }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    pub fn round(mut self) -> Self {
        self.round_cap = true;
        self
    }
}

/// One drawing instruction. Paint order is list order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Fill {
        path: BezPath,
        color: Color,
    },
    Stroke {
        path: BezPath,
        color: Color,
        style: StrokeStyle,
    },
    Text {
        origin: Point,
        text: String,
        style: TextStyle,
    },
}

impl DrawOp {
    pub fn color(&self) -> Color {
        match self {
            Self::Fill { color, .. } | Self::Stroke { color, .. } => *color,
            Self::Text { style, .. } => style.color,
        }
    }

    fn transformed(&self, t: Affine) -> Self {
        let k = affine_scale(t);
        match self {
            Self::Fill { path, color } => Self::Fill {
                path: t * path.clone(),
                color: *color,
            },
            Self::Stroke { path, color, style } => Self::Stroke {
                path: t * path.clone(),
                color: *color,
                style: StrokeStyle {
                    width: style.width * k,
                    dash: style.dash.map(|(d, g)| (d * k, g * k)),
                    round_cap: style.round_cap,
                },
            },
            Self::Text {
                origin,
                text,
                style,
            } => Self::Text {
                origin: t * *origin,
                text: text.clone(),
                style: TextStyle {
                    size: style.size * k,
                    ..*style
                },
            },
        }
    }

    fn hash_into(&self, h: &mut Fnv1a64) {
        fn color(h: &mut Fnv1a64, c: Color) {
            h.write_bytes(&[c.r, c.g, c.b, c.a]);
        }

        match self {
            Self::Fill { path, color: c } => {
                h.write_u8(0);
                hash_path(h, path);
                color(h, *c);
            }
            Self::Stroke {
                path,
                color: c,
                style,
            } => {
                h.write_u8(1);
                hash_path(h, path);
                color(h, *c);
                h.write_f64(style.width);
                match style.dash {
                    Some((d, g)) => {
                        h.write_u8(1);
                        h.write_f64(d);
                        h.write_f64(g);
                    }
                    None => h.write_u8(0),
                }
                h.write_u8(u8::from(style.round_cap));
            }
            Self::Text {
                origin,
                text,
                style,
            } => {
                h.write_u8(2);
                h.write_f64(origin.x);
                h.write_f64(origin.y);
                h.write_str(text);
                h.write_f64(style.size);
                color(h, style.color);
                h.write_u8(style.anchor as u8);
                h.write_u8(u8::from(style.bold));
                h.write_u8(u8::from(style.italic));
                h.write_u8(u8::from(style.strike));
            }
        }
    }
}

fn hash_path(h: &mut Fnv1a64, path: &BezPath) {
    let els = path.elements();
    h.write_u64(els.len() as u64);
    for el in els {
        match *el {
            PathEl::MoveTo(p) => {
                h.write_u8(0);
                h.write_f64(p.x);
                h.write_f64(p.y);
            }
            PathEl::LineTo(p) => {
                h.write_u8(1);
                h.write_f64(p.x);
                h.write_f64(p.y);
            }
            PathEl::QuadTo(a, b) => {
                h.write_u8(2);
                for p in [a, b] {
                    h.write_f64(p.x);
                    h.write_f64(p.y);
                }
            }
            PathEl::CurveTo(a, b, c) => {
                h.write_u8(3);
                for p in [a, b, c] {
                    h.write_f64(p.x);
                    h.write_f64(p.y);
                }
            }
            PathEl::ClosePath => h.write_u8(4),
        }
    }
}

/// Uniform scale factor of an affine (square root of the determinant magnitude).
fn affine_scale(t: Affine) -> f64 {
    t.determinant().abs().sqrt()
}

/// Output of one renderer call: drawing instructions plus the derived caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    canvas: Canvas,
    ops: Vec<DrawOp>,
    caption: String,
}

impl Frame {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
            caption: String::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Push a raw op. Fully transparent ops and empty text are dropped.
    pub fn push(&mut self, op: DrawOp) {
        if op.color().is_transparent() {
            return;
        }
        match &op {
            DrawOp::Text { text, style, .. } if text.is_empty() || style.size <= 0.0 => return,
            DrawOp::Stroke { style, .. } if style.width <= 0.0 => return,
            _ => {}
        }
        self.ops.push(op);
    }

    pub fn fill(&mut self, shape: &impl Shape, color: Color) {
        self.push(DrawOp::Fill {
            path: shape.to_path(PATH_TOLERANCE),
            color,
        });
    }

    pub fn stroke(&mut self, shape: &impl Shape, color: Color, width: f64) {
        self.stroke_styled(shape, color, StrokeStyle::new(width));
    }

    pub fn stroke_styled(&mut self, shape: &impl Shape, color: Color, style: StrokeStyle) {
        self.push(DrawOp::Stroke {
            path: shape.to_path(PATH_TOLERANCE),
            color,
            style,
        });
    }

    /// Fill then stroke the same shape.
    pub fn fill_stroke(&mut self, shape: &impl Shape, fill: Color, stroke: Color, width: f64) {
        self.fill(shape, fill);
        self.stroke(shape, stroke, width);
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.stroke(&kurbo::Line::new(from, to), color, width);
    }

    pub fn text(&mut self, origin: Point, text: impl Into<String>, style: TextStyle) {
        self.push(DrawOp::Text {
            origin,
            text: text.into(),
            style,
        });
    }

    /// Append every op of `other`, mapped through `transform`. The caption is not copied.
    pub fn append(&mut self, other: &Frame, transform: Affine) {
        self.ops
            .extend(other.ops.iter().map(|op| op.transformed(transform)));
    }

    /// Stable 64-bit digest over the canvas, every op and the caption.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(u64::from(self.canvas.width));
        h.write_u64(u64::from(self.canvas.height));
        h.write_u64(self.ops.len() as u64);
        for op in &self.ops {
            op.hash_into(&mut h);
        }
        h.write_str(&self.caption);
        h.finish()
    }

    /// `true` when every coordinate and size in the frame is finite.
    pub fn is_well_formed(&self) -> bool {
        fn finite(p: Point) -> bool {
            p.x.is_finite() && p.y.is_finite()
        }

        self.ops.iter().all(|op| match op {
            DrawOp::Fill { path, .. } => path_is_finite(path),
            DrawOp::Stroke { path, style, .. } => {
                path_is_finite(path)
                    && style.width.is_finite()
                    && style.dash.is_none_or(|(d, g)| d.is_finite() && g.is_finite())
            }
            DrawOp::Text { origin, style, .. } => finite(*origin) && style.size.is_finite(),
        })
    }
}

fn path_is_finite(path: &BezPath) -> bool {
    path.elements().iter().all(|el| match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
        PathEl::QuadTo(a, b) => a.is_finite() && b.is_finite(),
        PathEl::CurveTo(a, b, c) => a.is_finite() && b.is_finite() && c.is_finite(),
        PathEl::ClosePath => true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/frame/model.rs"]
mod tests;
