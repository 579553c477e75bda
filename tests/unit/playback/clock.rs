use super::*;
use crate::playback::time::ManualTimeSource;

const D: Duration = Duration::from_secs(6);

fn clock() -> (Rc<ManualTimeSource>, AnimationClock) {
    let time = Rc::new(ManualTimeSource::new());
    time.advance(Duration::from_secs(100));
    let clock = AnimationClock::new(time.clone(), D).unwrap();
    (time, clock)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn starts_playing_at_zero() {
    let (_, c) = clock();
    assert_eq!(c.state(), PlayState::Playing);
    assert_eq!(c.progress().value(), 0.0);
}

#[test]
fn zero_cycle_is_rejected() {
    let time = Rc::new(ManualTimeSource::new());
    assert!(AnimationClock::new(time, Duration::ZERO).is_err());
}

#[test]
fn wraps_after_exactly_one_cycle() {
    let (time, c) = clock();
    time.advance(Duration::from_secs(3));
    assert!(approx(c.progress().value(), 0.5));
    time.advance(Duration::from_secs(3));
    assert_eq!(c.progress().value(), 0.0);
    assert_eq!(c.completed_cycles(), 1);
    time.advance(Duration::from_millis(1500));
    assert!(approx(c.progress().value(), 0.25));
}

#[test]
fn progress_never_decreases_inside_a_cycle() {
    let (time, c) = clock();
    let mut last = c.progress().value();
    for _ in 0..599 {
        time.advance(Duration::from_millis(10));
        let p = c.progress().value();
        assert!(p >= last, "{p} < {last}");
        last = p;
    }
}

#[test]
fn pause_freezes_and_resume_continues() {
    let (time, mut c) = clock();
    time.advance(Duration::from_secs(2));
    c.pause();
    let frozen = c.progress();
    time.advance(Duration::from_secs(10));
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.progress(), frozen);

    c.start();
    assert_eq!(c.progress(), frozen);
    time.advance(Duration::from_secs(1));
    assert!(approx(c.progress().value(), 0.5));
}

#[test]
fn start_and_pause_are_idempotent() {
    let (time, mut c) = clock();
    time.advance(Duration::from_secs(1));
    c.start();
    assert!(approx(c.progress().value(), 1.0 / 6.0));
    c.pause();
    time.advance(Duration::from_secs(1));
    c.pause();
    assert!(approx(c.progress().value(), 1.0 / 6.0));
}

#[test]
fn restart_resets_from_any_state() {
    let (time, mut c) = clock();
    time.advance(Duration::from_secs(4));
    c.restart();
    assert_eq!(c.progress().value(), 0.0);
    assert_eq!(c.state(), PlayState::Playing);

    time.advance(Duration::from_secs(2));
    c.pause();
    c.restart();
    assert_eq!(c.progress().value(), 0.0);
    assert_eq!(c.state(), PlayState::Playing);

    c.restart();
    assert_eq!(c.progress().value(), 0.0);
}

#[test]
fn toggle_flips_state() {
    let (_, mut c) = clock();
    assert_eq!(c.toggle(), PlayState::Paused);
    assert_eq!(c.toggle(), PlayState::Playing);
}
