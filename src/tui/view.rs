//! Layout: filter tabs on top, entry list left, viewer right, key help at the bottom.

use ratatui::Frame as TermFrame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use crate::catalog::category::Category;
use crate::frame::color::Color;
use crate::gallery::shell::Gallery;
use crate::tui::braille::FrameView;
use crate::viewer::card::status_line;

const HELP: &str = "↑/k ↓/j select · tab/⇧tab filter · a all · space play/pause · r restart · q quit";

fn term(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

fn muted() -> Style {
    Style::default().fg(term(crate::animations::kit::STAT))
}

pub fn draw(f: &mut TermFrame<'_>, gallery: &Gallery<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());
    draw_filters(f, gallery, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(rows[1]);
    draw_list(f, gallery, body[0]);
    draw_viewer(f, gallery, body[1]);

    f.render_widget(Paragraph::new(Line::from(Span::styled(HELP, muted()))), rows[2]);
}

fn draw_filters(f: &mut TermFrame<'_>, gallery: &Gallery<'_>, area: Rect) {
    let mut titles = vec![Line::from("all")];
    titles.extend(
        Category::ALL
            .iter()
            .map(|c| Line::from(Span::styled(c.display_name(), Style::default().fg(term(c.accent()))))),
    );
    let selected = gallery
        .filter()
        .and_then(|c| Category::ALL.iter().position(|x| *x == c))
        .map_or(0, |i| i + 1);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" loopreel "))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
    f.render_widget(tabs, area);
}

fn draw_list(f: &mut TermFrame<'_>, gallery: &Gallery<'_>, area: Rect) {
    let entries = gallery.visible_entries();
    let items: Vec<ListItem<'_>> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<4}", e.icon), Style::default().fg(term(e.category.accent()))),
                Span::raw(e.label.clone()),
            ]))
        })
        .collect();
    let title = format!(" {} entries ", entries.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    let mut state = ListState::default();
    state.select(gallery.visible_position());
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_viewer(f: &mut TermFrame<'_>, gallery: &Gallery<'_>, area: Rect) {
    let viewer = gallery.viewer();
    let entry = viewer.entry();
    let accent = term(entry.category.accent());

    let mut title = vec![
        Span::styled(format!(" {} ", entry.icon), Style::default().fg(accent)),
        Span::styled(format!("{} ", entry.label), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if entry.metaphor {
        title.push(Span::styled("metaphorical ", muted()));
    }
    if entry.category == Category::Speculative {
        title.push(Span::styled("speculative ", Style::default().fg(accent)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Line::from(title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(inner);
    f.render_widget(FrameView::new(viewer.frame()), parts[0]);
    f.render_widget(
        Paragraph::new(viewer.frame().caption()).centered().style(muted()),
        parts[1],
    );
    f.render_widget(
        Paragraph::new(status_line(viewer.state(), viewer.progress()))
            .centered()
            .style(Style::default().fg(accent)),
        parts[2],
    );
    f.render_widget(
        Paragraph::new(entry.description.as_str())
            .wrap(Wrap { trim: true })
            .style(muted()),
        parts[3],
    );
}
