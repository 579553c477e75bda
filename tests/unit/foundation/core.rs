use super::*;

#[test]
fn progress_rejects_values_outside_half_open_range() {
    assert!(Progress::new(0.0).is_ok());
    assert!(Progress::new(0.999_999).is_ok());
    assert!(Progress::new(1.0).is_err());
    assert!(Progress::new(-0.01).is_err());
    assert!(Progress::new(f64::NAN).is_err());
    assert!(Progress::new(f64::INFINITY).is_err());
}

#[test]
fn wrapping_folds_into_cycle() {
    assert_eq!(Progress::wrapping(1.25).value(), 0.25);
    assert_eq!(Progress::wrapping(3.0).value(), 0.0);
    assert!((Progress::wrapping(-0.25).value() - 0.75).abs() < 1e-12);
    assert_eq!(Progress::wrapping(-1e-20).value(), 0.0);
    assert_eq!(Progress::wrapping(f64::NAN), Progress::ZERO);
}

#[test]
fn step_index_is_always_valid() {
    let last = Progress::new(f64::from_bits(1.0f64.to_bits() - 1)).unwrap();
    for n in [1usize, 3, 7, 10, 36, 2048] {
        assert_eq!(Progress::ZERO.step(n), 0);
        assert_eq!(last.step(n), n - 1);
        assert_eq!(last.count(n as u64), n as u64 - 1);
    }
    assert_eq!(last.step(0), 0);
    assert_eq!(Progress::new(0.5).unwrap().step(10), 5);
}

#[test]
fn from_frame_samples_one_cycle() {
    assert_eq!(Progress::from_frame(0, 4).unwrap().value(), 0.0);
    assert_eq!(Progress::from_frame(3, 4).unwrap().value(), 0.75);
    assert!(Progress::from_frame(4, 4).is_err());
    assert!(Progress::from_frame(0, 0).is_err());
}

#[test]
fn after_normalizes_tail_window() {
    let p = Progress::new(0.85).unwrap();
    assert!((p.after(0.7) - 0.5).abs() < 1e-9);
    assert_eq!(Progress::new(0.5).unwrap().after(0.7), 0.0);
}

#[test]
fn progress_serde_validates() {
    let p: Progress = serde_json::from_str("0.5").unwrap();
    assert_eq!(p.value(), 0.5);
    assert!(serde_json::from_str::<Progress>("1.5").is_err());
}

#[test]
fn canvas_scaling_rounds_up() {
    let c = Canvas::new(280, 150).unwrap();
    assert_eq!(c.scaled_px(2.0), (560, 300));
    assert_eq!(c.scaled_px(0.5), (140, 75));
    assert!(Canvas::new(0, 10).is_err());
}

#[test]
fn premul_conversion_scales_channels() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    assert_eq!(c.g, 64);
    assert_eq!(c.b, 0);
}
