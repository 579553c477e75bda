use kurbo::{Cap, PathEl, Stroke, StrokeOpts};

use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::frame::color::Color;
use crate::frame::model::{DrawOp, Frame, StrokeStyle};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::composite::over_in_place;
use crate::render::fonts::svg_options;
use crate::render::svg::{SvgOptions, frame_to_svg};

/// Tolerance, in pixels, for stroke outlining.
const STROKE_TOLERANCE: f64 = 0.1;

/// CPU rasterizer: `vello_cpu` for fills and strokes, `resvg` for the text layer.
pub struct CpuBackend {
    settings: RenderSettings,
    svg_opts: Option<usvg::Options<'static>>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            svg_opts: None,
        }
    }

    fn render_text(&mut self, frame: &Frame, width: u32, height: u32) -> LoopreelResult<Vec<u8>> {
        let svg = frame_to_svg(frame, &SvgOptions::text_only(self.settings.scale));
        let opts = self.svg_opts.get_or_insert_with(svg_options);
        let tree = usvg::Tree::from_str(&svg, opts)
            .map_err(|e| LoopreelError::render(format!("text overlay svg: {e}")))?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| LoopreelError::render("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.data().to_vec())
    }
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .field("fonts_loaded", &self.svg_opts.is_some())
            .finish()
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "trace", skip_all, fields(ops = frame.ops().len()))]
    fn render(&mut self, frame: &Frame) -> LoopreelResult<FrameRGBA> {
        self.settings.validate()?;
        let vectors = rasterize_vectors(frame, self.settings.scale)?;
        let (width, height) = (vectors.width, vectors.height);

        let mut out = FrameRGBA::new(width, height, self.settings.clear);
        over_in_place(&mut out.data, &vectors.data)?;
        if frame
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Text { .. }))
        {
            let text = self.render_text(frame, width, height)?;
            over_in_place(&mut out.data, &text)?;
        }
        Ok(out)
    }

    fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}

/// Fills and strokes of `frame` at `scale` on a transparent background. Text ops are skipped.
pub fn rasterize_vectors(frame: &Frame, scale: f64) -> LoopreelResult<FrameRGBA> {
    let (width, height) = frame.canvas().scaled_px(scale);
    let w16: u16 = width
        .try_into()
        .map_err(|_| LoopreelError::render("frame width exceeds u16"))?;
    let h16: u16 = height
        .try_into()
        .map_err(|_| LoopreelError::render("frame height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
    let mut ctx = vello_cpu::RenderContext::new(w16, h16);
    ctx.set_transform(affine_to_cpu(Affine::scale(scale)));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    for op in frame.ops() {
        match op {
            DrawOp::Fill { path, color } => {
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_path(&bezpath_to_cpu(path));
            }
            DrawOp::Stroke { path, color, style } => {
                let outline = stroke_outline(path, style, scale);
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_path(&bezpath_to_cpu(&outline));
            }
            DrawOp::Text { .. } => {}
        }
    }
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

/// Outline a stroke as a fill path in canvas units. Tolerance follows the pixel scale.
fn stroke_outline(path: &BezPath, style: &StrokeStyle, scale: f64) -> BezPath {
    let mut stroke = Stroke::new(style.width);
    if style.round_cap {
        stroke = stroke.with_caps(Cap::Round);
    }
    if let Some((dash, gap)) = style.dash {
        stroke = stroke.with_dashes(0.0, [dash, gap]);
    }
    kurbo::stroke(
        path.iter(),
        &stroke,
        &StrokeOpts::default(),
        STROKE_TOLERANCE / scale.max(1e-6),
    )
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
