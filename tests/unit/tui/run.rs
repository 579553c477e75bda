use std::rc::Rc;

use super::*;
use crate::catalog::category::Category;
use crate::library::Library;
use crate::playback::PlaybackContext;
use crate::playback::clock::PlayState;
use crate::playback::time::ManualTimeSource;

fn gallery() -> Gallery<'static> {
    let ctx = PlaybackContext::new(
        Rc::new(ManualTimeSource::new()),
        Duration::from_secs(6),
        Duration::from_millis(16),
    )
    .unwrap();
    Gallery::new(Library::builtin().unwrap(), ctx).unwrap()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn navigation_keys_move_selection() {
    let mut g = gallery();
    assert_eq!(
        handle_key(&mut g, press(KeyCode::Char('j'))).unwrap(),
        Flow::Continue { redraw: true }
    );
    assert_eq!(g.selected_key(), "embedding");
    handle_key(&mut g, press(KeyCode::Up)).unwrap();
    assert_eq!(g.selected_key(), "indexing");
}

#[test]
fn filter_keys_cycle_and_clear() {
    let mut g = gallery();
    handle_key(&mut g, press(KeyCode::Tab)).unwrap();
    assert_eq!(g.filter(), Some(Category::Retrieval));
    handle_key(&mut g, press(KeyCode::BackTab)).unwrap();
    assert_eq!(g.filter(), None);
    handle_key(&mut g, press(KeyCode::BackTab)).unwrap();
    assert_eq!(g.filter(), Some(Category::Speculative));
    handle_key(&mut g, press(KeyCode::Char('a'))).unwrap();
    assert_eq!(g.filter(), None);
}

#[test]
fn playback_keys_reach_viewer() {
    let mut g = gallery();
    handle_key(&mut g, press(KeyCode::Char(' '))).unwrap();
    assert_eq!(g.viewer().state(), PlayState::Paused);
    handle_key(&mut g, press(KeyCode::Char('r'))).unwrap();
    assert_eq!(g.viewer().state(), PlayState::Playing);
}

#[test]
fn quit_keys_and_unbound_keys() {
    let mut g = gallery();
    assert_eq!(handle_key(&mut g, press(KeyCode::Char('q'))).unwrap(), Flow::Quit);
    assert_eq!(handle_key(&mut g, press(KeyCode::Esc)).unwrap(), Flow::Quit);
    assert_eq!(
        handle_key(&mut g, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap(),
        Flow::Quit
    );
    assert_eq!(
        handle_key(&mut g, press(KeyCode::Char('z'))).unwrap(),
        Flow::Continue { redraw: false }
    );
}

#[test]
fn terminal_guard_restore_is_repeatable() {
    // Raw mode was never enabled in the test process, so restoring touches no terminal.
    let mut guard = TerminalGuard {
        alternate_screen: false,
    };
    guard.restore().unwrap();
    guard.restore().unwrap();
    assert!(!guard.alternate_screen);
    drop(guard);
}
