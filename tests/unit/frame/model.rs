use super::*;
use kurbo::{Circle, Rect};

fn canvas() -> Canvas {
    Canvas::new(100, 50).unwrap()
}

#[test]
fn transparent_ops_are_dropped() {
    let mut f = Frame::new(canvas());
    f.fill(&Rect::new(0.0, 0.0, 10.0, 10.0), Color::TRANSPARENT);
    f.stroke(&Rect::new(0.0, 0.0, 10.0, 10.0), Color::hex(0xffffff), 0.0);
    f.text(Point::ZERO, "", TextStyle::new(10.0, Color::hex(0xffffff)));
    assert!(f.ops().is_empty());
}

#[test]
fn fingerprint_tracks_content() {
    let mut a = Frame::new(canvas());
    a.fill(&Circle::new((5.0, 5.0), 3.0), Color::hex(0xe8c872));
    a.set_caption("1 / 3");
    let b = a.clone();
    assert_eq!(a.fingerprint(), b.fingerprint());

    let mut c = a.clone();
    c.set_caption("2 / 3");
    assert_ne!(a.fingerprint(), c.fingerprint());

    let mut d = a.clone();
    d.line(Point::ZERO, Point::new(1.0, 1.0), Color::hex(0x000000), 1.0);
    assert_ne!(a.fingerprint(), d.fingerprint());
}

#[test]
fn append_scales_strokes_and_text() {
    let mut inner = Frame::new(canvas());
    inner.stroke_styled(
        &Rect::new(0.0, 0.0, 10.0, 10.0),
        Color::hex(0xffffff),
        StrokeStyle::new(2.0).dashed(4.0, 2.0),
    );
    inner.text(
        Point::new(10.0, 10.0),
        "hi",
        TextStyle::new(8.0, Color::hex(0xffffff)),
    );
    inner.set_caption("ignored");

    let mut outer = Frame::new(Canvas::new(300, 300).unwrap());
    outer.append(&inner, Affine::translate((5.0, 5.0)) * Affine::scale(2.0));
    assert_eq!(outer.ops().len(), 2);
    assert_eq!(outer.caption(), "");

    match &outer.ops()[0] {
        DrawOp::Stroke { style, .. } => {
            assert!((style.width - 4.0).abs() < 1e-9);
            assert_eq!(style.dash, Some((8.0, 4.0)));
        }
        other => panic!("unexpected op {other:?}"),
    }
    match &outer.ops()[1] {
        DrawOp::Text { origin, style, .. } => {
            assert!((origin.x - 25.0).abs() < 1e-9);
            assert!((style.size - 16.0).abs() < 1e-9);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn json_roundtrip_preserves_fingerprint() {
    let mut f = Frame::new(canvas());
    f.fill_stroke(
        &Rect::new(1.0, 2.0, 30.0, 20.0),
        Color::hex(0x2a2520),
        Color::hex(0x4a4238),
        1.0,
    );
    f.text(
        Point::new(50.0, 25.0),
        "query",
        TextStyle::new(9.0, Color::hex(0xe8c872)).centered().italic(),
    );
    f.set_caption("3 / 6 passages retrieved");

    let json = serde_json::to_string(&f).unwrap();
    assert!(json.contains("\"op\":\"fill\""));
    let back: Frame = serde_json::from_str(&json).unwrap();
    assert_eq!(back.fingerprint(), f.fingerprint());
}

#[test]
fn non_finite_geometry_is_flagged() {
    let mut f = Frame::new(canvas());
    f.line(
        Point::new(f64::NAN, 0.0),
        Point::new(1.0, 1.0),
        Color::hex(0xffffff),
        1.0,
    );
    assert!(!f.is_well_formed());
}
