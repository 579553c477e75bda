use kurbo::{Affine, Point};

use crate::animations::kit::{MUTED, PAPER, STAT, STEEL, mono, rrect};
use crate::catalog::category::Category;
use crate::catalog::model::CatalogEntry;
use crate::foundation::core::{Canvas, Progress};
use crate::frame::color::Color;
use crate::frame::model::Frame;
use crate::frame::text::{mono_width, wrap_words};
use crate::playback::clock::PlayState;

pub const CARD_WIDTH: u32 = 420;
const PAD: f64 = 24.0;
const STAGE_MAX_HEIGHT: f64 = 260.0;
const DESCRIPTION_SIZE: f64 = 12.0;
const DESCRIPTION_LEADING: f64 = DESCRIPTION_SIZE * 1.65;

/// Lay out the full viewer card around an animation frame.
///
/// Header (icon badge, label, tags), the animation scaled to fit, its caption, the play-state
/// line and the wrapped description. The result depends only on its inputs.
pub fn compose_card(
    entry: &CatalogEntry,
    animation: &Frame,
    state: PlayState,
    progress: Progress,
) -> Frame {
    let width = f64::from(CARD_WIDTH);
    let inner = width - 2.0 * PAD;
    let accent = entry.category.accent();

    let src = animation.canvas().size();
    let scale = (inner / src.width)
        .min(STAGE_MAX_HEIGHT / src.height)
        .min(1.0);
    let stage_w = src.width * scale;
    let stage_h = src.height * scale;

    let description = wrap_words(
        &entry.description,
        (inner / (DESCRIPTION_SIZE * 0.6)).floor() as usize,
    );

    let header_bottom = PAD + 40.0;
    let stage_top = header_bottom + 16.0;
    let caption_y = stage_top + stage_h + 20.0;
    let status_y = caption_y + 22.0;
    let description_top = status_y + 26.0;
    let height = description_top + description.len() as f64 * DESCRIPTION_LEADING + PAD;

    let canvas = Canvas {
        width: CARD_WIDTH,
        height: height.ceil() as u32,
    };
    let mut card = Frame::new(canvas);

    let panel = rrect(0.5, 0.5, width - 1.0, height.ceil() - 1.0, 16.0);
    card.fill(&panel, Color::rgba(45, 40, 35, 0.4));
    card.stroke(&panel, accent.with_alpha_u8(0x22), 1.0);

    // Header: badge + label, tags underneath the label.
    let badge_w = mono_width(&entry.icon, 13.0) + 16.0;
    card.fill(&rrect(PAD, PAD + 4.0, badge_w, 22.0, 4.0), accent.with_alpha_u8(0x18));
    card.text(
        Point::new(PAD + 8.0, PAD + 19.5),
        entry.icon.clone(),
        mono(13.0, accent),
    );
    let label_x = PAD + badge_w + 10.0;
    card.text(
        Point::new(label_x, PAD + 14.0),
        entry.label.clone(),
        mono(16.0, PAPER),
    );
    let mut tag_x = label_x;
    if entry.metaphor {
        card.text(Point::new(tag_x, PAD + 30.0), "METAPHORICAL", mono(9.0, MUTED));
        tag_x += mono_width("METAPHORICAL", 9.0) + 8.0;
    }
    if entry.category == Category::Speculative {
        card.text(Point::new(tag_x, PAD + 30.0), "SPECULATIVE", mono(9.0, STEEL));
    }

    let stage_x = (width - stage_w) / 2.0;
    card.append(
        animation,
        Affine::translate((stage_x, stage_top)) * Affine::scale(scale),
    );

    card.text(
        Point::new(width / 2.0, caption_y),
        animation.caption(),
        mono(11.0, STAT).centered(),
    );
    card.text(
        Point::new(width / 2.0, status_y),
        status_line(state, progress),
        mono(11.0, accent).centered(),
    );
    for (i, line) in description.into_iter().enumerate() {
        card.text(
            Point::new(width / 2.0, description_top + i as f64 * DESCRIPTION_LEADING),
            line,
            mono(DESCRIPTION_SIZE, STAT).centered(),
        );
    }
    card.set_caption(animation.caption());
    card
}

/// `playing · 42%` style status text.
pub fn status_line(state: PlayState, progress: Progress) -> String {
    let pct = (progress.value() * 100.0).floor() as u32;
    format!("{state} · {pct:>2}%")
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/card.rs"]
mod tests;
