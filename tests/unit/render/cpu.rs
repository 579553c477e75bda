use kurbo::{Line, Rect};

use super::*;
use crate::foundation::core::Canvas;

fn canvas() -> Canvas {
    Canvas {
        width: 20,
        height: 10,
    }
}

#[test]
fn clear_color_fills_untouched_pixels() {
    let mut backend = CpuBackend::new(RenderSettings {
        scale: 1.0,
        clear: Some(Color::hex(0x1e1b18)),
    });
    let out = backend.render(&Frame::new(canvas())).unwrap();
    assert_eq!((out.width, out.height), (20, 10));
    assert_eq!(out.pixel(5, 5), Some([0x1e, 0x1b, 0x18, 255]));
}

#[test]
fn fill_covers_its_rect_at_scale() {
    let mut backend = CpuBackend::new(RenderSettings {
        scale: 2.0,
        clear: None,
    });
    let mut frame = Frame::new(canvas());
    frame.fill(&Rect::new(0.0, 0.0, 10.0, 10.0), Color::hex(0xff0000));
    let out = backend.render(&frame).unwrap();
    assert_eq!((out.width, out.height), (40, 20));
    assert_eq!(out.pixel(5, 5), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(30, 5), Some([0, 0, 0, 0]));
}

#[test]
fn stroke_is_rasterized_as_outline() {
    let mut backend = CpuBackend::new(RenderSettings::default());
    let mut frame = Frame::new(canvas());
    frame.line(
        kurbo::Point::new(0.0, 5.0),
        kurbo::Point::new(20.0, 5.0),
        Color::hex(0x00ff00),
        4.0,
    );
    let out = backend.render(&frame).unwrap();
    assert_eq!(out.pixel(10, 5).map(|p| p[1]), Some(255));
    assert_eq!(out.pixel(10, 0), Some([0, 0, 0, 0]));
}

#[test]
fn dashed_outline_has_gaps() {
    let style = StrokeStyle::new(2.0).dashed(4.0, 4.0);
    let line = Line::new((0.0, 0.0), (16.0, 0.0));
    let plain = stroke_outline(&kurbo::Shape::to_path(&line, 0.1), &StrokeStyle::new(2.0), 1.0);
    let dashed = stroke_outline(&kurbo::Shape::to_path(&line, 0.1), &style, 1.0);
    let subpaths = |p: &BezPath| {
        p.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    };
    assert!(subpaths(&dashed) > subpaths(&plain));
}

#[test]
fn oversized_frames_are_rejected() {
    let mut backend = CpuBackend::new(RenderSettings {
        scale: 4000.0,
        clear: None,
    });
    assert!(backend.render(&Frame::new(canvas())).is_err());
}

#[test]
fn invalid_scale_is_rejected() {
    let mut backend = CpuBackend::new(RenderSettings {
        scale: 0.0,
        clear: None,
    });
    assert!(backend.render(&Frame::new(canvas())).is_err());
}
