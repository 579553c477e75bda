use loopreel::{
    BackendKind, Canvas, Color, Frame, Library, Progress, RenderSettings, create_backend,
    rasterize_vectors,
};

fn digest(bytes: &[u8]) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64;
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

#[test]
fn every_animation_rasterizes_to_its_canvas() {
    let lib = Library::builtin().unwrap();
    for entry in lib.catalog().list_all() {
        let (_, anim) = lib.resolve(&entry.key).unwrap();
        let frame = anim.render(Progress::new(0.37).unwrap());
        let pixels = rasterize_vectors(&frame, 1.0).unwrap();
        let canvas = anim.canvas();
        assert_eq!((pixels.width, pixels.height), (canvas.width, canvas.height));
        assert!(
            pixels.data.chunks_exact(4).any(|p| p[3] > 0),
            "{} drew nothing",
            entry.key
        );
    }
}

#[test]
fn vector_rasterization_is_deterministic() {
    let lib = Library::builtin().unwrap();
    let (_, anim) = lib.resolve("attention").unwrap();
    let frame = anim.render(Progress::new(0.61).unwrap());
    let a = rasterize_vectors(&frame, 2.0).unwrap();
    let b = rasterize_vectors(&frame, 2.0).unwrap();
    assert_eq!(digest(&a.data), digest(&b.data));
}

#[test]
fn backend_paints_background_and_scales() {
    let mut backend = create_backend(
        BackendKind::Cpu,
        RenderSettings {
            scale: 3.0,
            clear: Some(Color::hex(0x1e1b18)),
        },
    )
    .unwrap();
    let out = backend
        .render(&Frame::new(Canvas::new(10, 5).unwrap()))
        .unwrap();
    assert_eq!((out.width, out.height), (30, 15));
    assert!(out.premultiplied);
    assert!(out.data.chunks_exact(4).all(|p| p == [0x1e, 0x1b, 0x18, 255]));
}

#[test]
fn backend_rejects_invalid_settings() {
    assert!(
        create_backend(
            BackendKind::Cpu,
            RenderSettings {
                scale: f64::NAN,
                clear: None,
            },
        )
        .is_err()
    );
}
