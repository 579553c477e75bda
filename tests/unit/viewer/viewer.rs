use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::playback::time::ManualTimeSource;

fn setup() -> (Rc<ManualTimeSource>, PlaybackContext) {
    let time = Rc::new(ManualTimeSource::new());
    let ctx = PlaybackContext::new(
        time.clone(),
        Duration::from_secs(6),
        Duration::from_millis(100),
    )
    .unwrap();
    (time, ctx)
}

#[test]
fn mount_starts_fresh_cycle_with_one_tick() {
    let (_, ctx) = setup();
    let lib = Library::builtin().unwrap();
    let v = Viewer::mount(lib, "rag", &ctx).unwrap();
    assert_eq!(v.key(), "rag");
    assert_eq!(v.progress().value(), 0.0);
    assert_eq!(v.state(), PlayState::Playing);
    assert_eq!(ctx.scheduler().active(), 1);
    assert_eq!(v.frame().caption(), "0 / 6 passages retrieved");
}

#[test]
fn unknown_key_fails_fast() {
    let (_, ctx) = setup();
    let lib = Library::builtin().unwrap();
    let err = Viewer::mount(lib, "nonexistent", &ctx).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::LoopreelError::UnknownCatalogKey(_)
    ));
    assert_eq!(ctx.scheduler().active(), 0);
}

#[test]
fn own_tick_triggers_rerender() {
    let (time, ctx) = setup();
    let lib = Library::builtin().unwrap();
    let mut v = Viewer::mount(lib, "rag", &ctx).unwrap();
    time.advance(Duration::from_secs(3));
    let fired = ctx.scheduler().poll(ctx.now());
    assert!(v.on_ticks(&fired));
    assert_eq!(v.frame().caption(), "3 / 6 passages retrieved");
    assert!(!v.on_ticks(&[]));
}

#[test]
fn pause_cancels_tick_and_play_restores_it() {
    let (time, ctx) = setup();
    let lib = Library::builtin().unwrap();
    let mut v = Viewer::mount(lib, "indexing", &ctx).unwrap();
    time.advance(Duration::from_secs(1));
    assert_eq!(v.toggle_play_pause(), PlayState::Paused);
    assert_eq!(ctx.scheduler().active(), 0);
    let frozen = v.progress();
    time.advance(Duration::from_secs(2));
    assert!(ctx.scheduler().poll(ctx.now()).is_empty());
    assert_eq!(v.progress(), frozen);

    assert_eq!(v.toggle_play_pause(), PlayState::Playing);
    assert_eq!(ctx.scheduler().active(), 1);
    assert_eq!(v.progress(), frozen);
}

#[test]
fn restart_from_paused_plays_from_zero() {
    let (time, ctx) = setup();
    let lib = Library::builtin().unwrap();
    let mut v = Viewer::mount(lib, "thinking", &ctx).unwrap();
    time.advance(Duration::from_secs(4));
    v.pause();
    v.restart();
    assert_eq!(v.state(), PlayState::Playing);
    assert_eq!(v.progress().value(), 0.0);
    assert_eq!(v.frame().caption(), "depth 0 / 12");
    assert_eq!(ctx.scheduler().active(), 1);
}

#[test]
fn drop_cancels_pending_tick() {
    let (time, ctx) = setup();
    let lib = Library::builtin().unwrap();
    let v = Viewer::mount(lib, "vision", &ctx).unwrap();
    drop(v);
    time.advance(Duration::from_secs(1));
    assert!(ctx.scheduler().poll(ctx.now()).is_empty());
}
