use std::fmt::Write as _;

use crate::frame::color::Color;
use crate::frame::model::{DrawOp, Frame, StrokeStyle, TextAnchor, TextStyle};

/// Font stack for every text op. The renderers lay text out on a monospace grid.
pub const FONT_FAMILY: &str = "'DejaVu Sans Mono', 'Liberation Mono', Menlo, monospace";

#[derive(Clone, Debug, PartialEq)]
pub struct SvgOptions {
    /// Pixels per canvas unit in the document's `width`/`height`.
    pub scale: f64,
    pub background: Option<Color>,
    pub shapes: bool,
    pub text: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            shapes: true,
            text: true,
        }
    }
}

impl SvgOptions {
    /// Only the text ops, on a transparent background.
    pub fn text_only(scale: f64) -> Self {
        Self {
            scale,
            background: None,
            shapes: false,
            text: true,
        }
    }
}

/// Standalone SVG document for `frame`.
pub fn frame_to_svg(frame: &Frame, opts: &SvgOptions) -> String {
    let (w, h) = frame.canvas().scaled_px(opts.scale);
    let mut out = String::with_capacity(256 + frame.ops().len() * 96);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if let Some(bg) = opts.background {
        let _ = write!(out, r#"<rect width="{w}" height="{h}"{}/>"#, paint("fill", bg));
    }
    let _ = write!(out, r#"<g transform="scale({})">"#, num(opts.scale));
    for op in frame.ops() {
        match op {
            DrawOp::Fill { path, color } if opts.shapes => {
                let _ = write!(out, r#"<path d="{}"{}/>"#, path.to_svg(), paint("fill", *color));
            }
            DrawOp::Stroke { path, color, style } if opts.shapes => {
                let _ = write!(
                    out,
                    r#"<path d="{}" fill="none"{}{}/>"#,
                    path.to_svg(),
                    paint("stroke", *color),
                    stroke_attrs(style)
                );
            }
            DrawOp::Text {
                origin,
                text,
                style,
            } if opts.text => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" xml:space="preserve"{}>{}</text>"#,
                    num(origin.x),
                    num(origin.y),
                    text_attrs(style),
                    escape(text)
                );
            }
            _ => {}
        }
    }
    out.push_str("</g></svg>");
    out
}

fn paint(attr: &str, c: Color) -> String {
    let rgb = Color { a: 255, ..c }.to_hex();
    if c.a == 255 {
        format!(r#" {attr}="{rgb}""#)
    } else {
        format!(r#" {attr}="{rgb}" {attr}-opacity="{}""#, num(c.opacity()))
    }
}

fn stroke_attrs(style: &StrokeStyle) -> String {
    let mut s = format!(r#" stroke-width="{}""#, num(style.width));
    if let Some((dash, gap)) = style.dash {
        let _ = write!(s, r#" stroke-dasharray="{} {}""#, num(dash), num(gap));
    }
    if style.round_cap {
        s.push_str(r#" stroke-linecap="round""#);
    }
    s
}

fn text_attrs(style: &TextStyle) -> String {
    let mut s = format!(
        r#" font-family="{FONT_FAMILY}" font-size="{}"{}"#,
        num(style.size),
        paint("fill", style.color)
    );
    match style.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => s.push_str(r#" text-anchor="middle""#),
        TextAnchor::End => s.push_str(r#" text-anchor="end""#),
    }
    if style.bold {
        s.push_str(r#" font-weight="bold""#);
    }
    if style.italic {
        s.push_str(r#" font-style="italic""#);
    }
    if style.strike {
        s.push_str(r#" text-decoration="line-through""#);
    }
    s
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
