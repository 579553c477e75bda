//! Terminal setup and the single-threaded event loop.

use std::io;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::foundation::error::LoopreelResult;
use crate::gallery::shell::Gallery;
use crate::tui::view;

/// Upper bound on one input wait, so ticks are never starved.
const MAX_POLL: Duration = Duration::from_millis(100);

/// What the loop should do after a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue { redraw: bool },
    Quit,
}

/// Apply one key press to the gallery.
pub fn handle_key(gallery: &mut Gallery<'_>, key: KeyEvent) -> LoopreelResult<Flow> {
    if key.kind != KeyEventKind::Press {
        return Ok(Flow::Continue { redraw: false });
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Flow::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Flow::Quit);
        }
        KeyCode::Up | KeyCode::Char('k') => gallery.select_prev()?,
        KeyCode::Down | KeyCode::Char('j') => gallery.select_next()?,
        KeyCode::Tab => gallery.cycle_filter(true),
        KeyCode::BackTab => gallery.cycle_filter(false),
        KeyCode::Char('a') => gallery.set_filter(None),
        KeyCode::Char(' ') => {
            gallery.toggle_play_pause();
        }
        KeyCode::Char('r') => gallery.restart(),
        _ => return Ok(Flow::Continue { redraw: false }),
    }
    Ok(Flow::Continue { redraw: true })
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            alternate_screen: false,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        if self.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen, Show)?;
            self.alternate_screen = false;
        }
        raw
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Run the gallery until the user quits. Raw mode and the alternate screen are undone on
/// every exit path, including setup errors.
pub fn run_gallery(gallery: &mut Gallery<'_>) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    tracing::info!(key = gallery.selected_key(), "gallery started");

    let result = run_loop(&mut terminal, gallery);

    guard.restore()?;
    tracing::info!("gallery closed");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    gallery: &mut Gallery<'_>,
) -> anyhow::Result<()> {
    let mut redraw = true;
    loop {
        if redraw {
            terminal.draw(|f| view::draw(f, gallery))?;
            redraw = false;
        }

        let now = gallery.context().now();
        let wait = gallery
            .context()
            .scheduler()
            .next_due()
            .map_or(MAX_POLL, |due| due.saturating_sub(now).min(MAX_POLL));
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) => match handle_key(gallery, key)? {
                    Flow::Quit => return Ok(()),
                    Flow::Continue { redraw: r } => redraw |= r,
                },
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }
        redraw |= gallery.pump();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/run.rs"]
mod tests;
