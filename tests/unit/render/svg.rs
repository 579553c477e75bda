use kurbo::{Circle, Point, Rect};

use super::*;
use crate::foundation::core::Canvas;

fn sample() -> Frame {
    let mut f = Frame::new(Canvas {
        width: 100,
        height: 50,
    });
    f.fill(&Rect::new(0.0, 0.0, 10.0, 10.0), Color::hex(0xe8c872));
    f.stroke_styled(
        &Circle::new((50.0, 25.0), 8.0),
        Color::rgba(200, 100, 50, 0.5),
        StrokeStyle::new(1.5).dashed(3.0, 2.0).round(),
    );
    f.text(
        Point::new(50.0, 40.0),
        "a < b & \"c\"",
        TextStyle::new(9.0, Color::hex(0x8a8070)).centered().strike(),
    );
    f
}

#[test]
fn document_has_scaled_size_and_all_ops() {
    let svg = frame_to_svg(
        &sample(),
        &SvgOptions {
            scale: 2.0,
            ..SvgOptions::default()
        },
    );
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="200" height="100""#));
    assert!(svg.contains(r#"transform="scale(2)""#));
    assert!(svg.contains(r##"fill="#e8c872""##));
    assert!(svg.contains(r#"stroke-dasharray="3 2""#));
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r#"text-decoration="line-through""#));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn text_content_is_escaped() {
    let svg = frame_to_svg(&sample(), &SvgOptions::default());
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
}

#[test]
fn translucent_colors_use_opacity_attributes() {
    let svg = frame_to_svg(&sample(), &SvgOptions::default());
    assert!(svg.contains(r##"stroke="#c86432" stroke-opacity="0.502""##));
}

#[test]
fn text_only_overlay_skips_shapes() {
    let svg = frame_to_svg(&sample(), &SvgOptions::text_only(1.0));
    assert!(!svg.contains("<path"));
    assert!(svg.contains("<text"));
}

#[test]
fn background_rect_is_first() {
    let svg = frame_to_svg(
        &sample(),
        &SvgOptions {
            background: Some(Color::hex(0x1e1b18)),
            ..SvgOptions::default()
        },
    );
    let rect = svg.find("<rect").unwrap();
    let group = svg.find("<g ").unwrap();
    assert!(rect < group);
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(2.0), "2");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(-0.0001), "0");
}
