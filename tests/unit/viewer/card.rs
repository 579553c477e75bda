use super::*;
use crate::frame::model::DrawOp;
use crate::library::Library;

fn texts(frame: &Frame) -> Vec<String> {
    frame
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn card_carries_header_caption_and_status() {
    let lib = Library::builtin().unwrap();
    let (entry, anim) = lib.resolve("hallucination").unwrap();
    let p = Progress::new(0.5).unwrap();
    let frame = anim.render(p);
    let card = compose_card(entry, &frame, PlayState::Paused, p);

    let t = texts(&card);
    assert!(t.contains(&"HAL".to_string()));
    assert!(t.contains(&"Confabulation".to_string()));
    assert!(t.contains(&"METAPHORICAL".to_string()));
    assert!(t.contains(&"SPECULATIVE".to_string()));
    assert!(t.contains(&frame.caption().to_string()));
    assert!(t.contains(&"paused · 50%".to_string()));
    assert_eq!(card.caption(), frame.caption());
    assert_eq!(card.canvas().width, CARD_WIDTH);
}

#[test]
fn literal_entries_have_no_metaphor_tag() {
    let lib = Library::builtin().unwrap();
    let (entry, anim) = lib.resolve("attention").unwrap();
    let card = compose_card(
        entry,
        &anim.render(Progress::ZERO),
        PlayState::Playing,
        Progress::ZERO,
    );
    let t = texts(&card);
    assert!(!t.contains(&"METAPHORICAL".to_string()));
    assert!(!t.contains(&"SPECULATIVE".to_string()));
}

#[test]
fn status_line_formats_percent() {
    assert_eq!(
        status_line(PlayState::Playing, Progress::new(0.07).unwrap()),
        "playing ·  7%"
    );
    assert_eq!(
        status_line(PlayState::Paused, Progress::new(0.999).unwrap()),
        "paused · 99%"
    );
}
