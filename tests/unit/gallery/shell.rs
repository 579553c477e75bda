use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::playback::time::ManualTimeSource;

fn gallery() -> (Rc<ManualTimeSource>, Gallery<'static>) {
    let time = Rc::new(ManualTimeSource::new());
    let ctx = PlaybackContext::new(
        time.clone(),
        Duration::from_secs(6),
        Duration::from_millis(50),
    )
    .unwrap();
    let g = Gallery::new(Library::builtin().unwrap(), ctx).unwrap();
    (time, g)
}

#[test]
fn opens_on_default_key_unfiltered() {
    let (_, g) = gallery();
    assert_eq!(g.selected_key(), DEFAULT_KEY);
    assert_eq!(g.filter(), None);
    assert_eq!(g.visible_entries().len(), 26);
    assert_eq!(g.visible_position(), Some(0));
}

#[test]
fn filter_never_moves_selection() {
    let (_, mut g) = gallery();
    g.set_filter(Some(Category::Speculative));
    assert_eq!(g.selected_key(), "indexing");
    assert_eq!(g.visible_position(), None);
    assert!(
        g.visible_entries()
            .iter()
            .all(|e| e.category == Category::Speculative)
    );
    assert_eq!(g.viewer().state(), PlayState::Playing);
}

#[test]
fn toggle_category_clears_on_second_press() {
    let (_, mut g) = gallery();
    g.toggle_category(Category::Alignment);
    assert_eq!(g.filter(), Some(Category::Alignment));
    g.toggle_category(Category::Alignment);
    assert_eq!(g.filter(), None);
}

#[test]
fn cycle_filter_walks_all_categories_and_back() {
    let (_, mut g) = gallery();
    g.cycle_filter(true);
    assert_eq!(g.filter(), Some(Category::Retrieval));
    for _ in 0..Category::ALL.len() {
        g.cycle_filter(true);
    }
    assert_eq!(g.filter(), None);
    g.cycle_filter(false);
    assert_eq!(g.filter(), Some(Category::Speculative));
}

#[test]
fn select_resets_viewer_and_rejects_unknown_keys() {
    let (time, mut g) = gallery();
    time.advance(Duration::from_secs(2));
    g.select("attention").unwrap();
    assert_eq!(g.selected_key(), "attention");
    assert_eq!(g.viewer().progress().value(), 0.0);
    assert_eq!(g.context().scheduler().active(), 1);

    assert!(g.select("nope").is_err());
    assert_eq!(g.selected_key(), "attention");
    assert_eq!(g.context().scheduler().active(), 1);
}

#[test]
fn reselecting_current_key_keeps_cycle() {
    let (time, mut g) = gallery();
    time.advance(Duration::from_secs(3));
    g.select("indexing").unwrap();
    assert!((g.viewer().progress().value() - 0.5).abs() < 1e-9);
}

#[test]
fn relative_selection_wraps_within_visible_list() {
    let (_, mut g) = gallery();
    g.select_prev().unwrap();
    assert_eq!(g.selected_key(), "polyglot");
    g.select_next().unwrap();
    assert_eq!(g.selected_key(), "indexing");

    g.set_filter(Some(Category::Alignment));
    g.select_next().unwrap();
    assert_eq!(g.selected_key(), "guardrail");
    g.select_next().unwrap();
    assert_eq!(g.selected_key(), "rlhf");
    g.select_next().unwrap();
    assert_eq!(g.selected_key(), "guardrail");
}

#[test]
fn pump_rerenders_only_when_due() {
    let (time, mut g) = gallery();
    assert!(!g.pump());
    time.advance(Duration::from_millis(50));
    assert!(g.pump());
    g.toggle_play_pause();
    time.advance(Duration::from_millis(500));
    assert!(!g.pump());
    g.restart();
    assert_eq!(g.viewer().state(), PlayState::Playing);
}

#[test]
fn selecting_while_paused_resumes_playback() {
    let (time, mut g) = gallery();
    time.advance(Duration::from_secs(2));
    g.pump();
    assert_eq!(g.toggle_play_pause(), PlayState::Paused);
    assert_eq!(g.context().scheduler().active(), 0);
    time.advance(Duration::from_secs(1));

    g.select("attention").unwrap();
    assert_eq!(g.viewer().state(), PlayState::Playing);
    assert_eq!(
        g.viewer().progress(),
        crate::foundation::core::Progress::ZERO
    );
    assert_eq!(g.context().scheduler().active(), 1);

    time.advance(Duration::from_millis(500));
    assert!(g.pump());
}
