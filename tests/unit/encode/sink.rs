use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: 30,
        frames: 2,
    }
}

#[test]
fn in_memory_sink_collects_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, &FrameRGBA::new(2, 2, None)).unwrap();
    sink.push_frame(1, &FrameRGBA::new(2, 2, None)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.config(), Some(&cfg()));
    assert!(sink.is_finished());
}

#[test]
fn out_of_order_frames_are_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(1, &FrameRGBA::new(2, 2, None)).unwrap();
    assert!(sink.push_frame(1, &FrameRGBA::new(2, 2, None)).is_err());
}

#[test]
fn size_check_compares_against_config() {
    assert!(check_size(&cfg(), &FrameRGBA::new(2, 2, None)).is_ok());
    assert!(check_size(&cfg(), &FrameRGBA::new(4, 2, None)).is_err());
}
