use super::*;
use crate::encode::sink::InMemorySink;
use crate::library::Library;
use crate::render::backend::{FrameRGBA, RenderSettings};

/// Stamps each frame's fingerprint into its first pixel.
struct Stamp(RenderSettings);

impl RenderBackend for Stamp {
    fn render(&mut self, frame: &Frame) -> LoopreelResult<FrameRGBA> {
        let canvas = frame.canvas();
        let mut out = FrameRGBA::new(canvas.width, canvas.height, None);
        out.data[..4].copy_from_slice(&frame.fingerprint().to_le_bytes()[..4]);
        Ok(out)
    }

    fn settings(&self) -> &RenderSettings {
        &self.0
    }
}

#[test]
fn cycle_samples_are_spaced_by_one_over_n() {
    let lib = Library::builtin().unwrap();
    let (entry, anim) = lib.resolve("rag").unwrap();
    let opts = CycleOpts {
        frames_per_cycle: 6,
        cycles: 2,
        fps: 6,
        framing: Framing::Bare,
    };
    let mut sink = InMemorySink::new();
    let stats = render_cycle(
        entry,
        anim.as_ref(),
        &opts,
        &mut Stamp(RenderSettings::default()),
        &mut sink,
    )
    .unwrap();

    assert_eq!(stats.frames, 12);
    assert_eq!(sink.frames().len(), 12);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps, cfg.frames), (280, 150, 6, 12));

    for i in 0..6 {
        let expected = anim.render(Progress::new(i as f64 / 6.0).unwrap()).fingerprint();
        assert_eq!(sink.frames()[i].1.data[..4], expected.to_le_bytes()[..4]);
        assert_eq!(sink.frames()[i].1, sink.frames()[i + 6].1);
    }
}

#[test]
fn card_framing_wraps_animation() {
    let lib = Library::builtin().unwrap();
    let (entry, anim) = lib.resolve("voice").unwrap();
    let bare = frame_at(entry, anim.as_ref(), Progress::ZERO, Framing::Bare);
    let card = frame_at(entry, anim.as_ref(), Progress::ZERO, Framing::Card);
    assert_eq!(card.canvas().width, crate::viewer::card::CARD_WIDTH);
    assert!(card.ops().len() > bare.ops().len());
    assert_eq!(card.caption(), bare.caption());
}

#[test]
fn fps_options_cover_one_cycle() {
    let opts = CycleOpts::at_fps(30, 6.0).unwrap();
    assert_eq!(opts.frames_per_cycle, 180);
    assert_eq!(opts.total_frames(), 180);
    assert!(CycleOpts::at_fps(0, 6.0).is_err());
    assert!(CycleOpts::at_fps(30, 0.0).is_err());
}

#[test]
fn empty_range_is_rejected() {
    let lib = Library::builtin().unwrap();
    let (entry, anim) = lib.resolve("rag").unwrap();
    let opts = CycleOpts {
        frames_per_cycle: 4,
        cycles: 0,
        fps: 4,
        framing: Framing::Bare,
    };
    let mut sink = InMemorySink::new();
    let err = render_cycle(
        entry,
        anim.as_ref(),
        &opts,
        &mut Stamp(RenderSettings::default()),
        &mut sink,
    );
    assert!(err.is_err());
    assert!(sink.frames().is_empty());
}
