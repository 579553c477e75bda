use super::*;

fn grid(width: u32, height: u32, lit: &[(u32, u32)]) -> FrameRGBA {
    let mut f = FrameRGBA::new(width, height, None);
    for &(x, y) in lit {
        let i = ((y * width + x) * 4) as usize;
        f.data[i..i + 4].copy_from_slice(&[200, 100, 0, 255]);
    }
    f
}

#[test]
fn dot_bits_follow_unicode_layout() {
    assert_eq!(dot_bit(0, 0), 0x01);
    assert_eq!(dot_bit(0, 2), 0x04);
    assert_eq!(dot_bit(1, 0), 0x08);
    assert_eq!(dot_bit(1, 2), 0x20);
    assert_eq!(dot_bit(0, 3), 0x40);
    assert_eq!(dot_bit(1, 3), 0x80);
}

#[test]
fn empty_pixels_give_unlit_cells() {
    let cells = cells_from_pixels(&grid(4, 8, &[]));
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].len(), 2);
    assert!(cells.iter().flatten().all(Option::is_none));
}

#[test]
fn lit_dots_map_to_pattern_and_color() {
    let cells = cells_from_pixels(&grid(2, 4, &[(0, 0), (1, 3)]));
    let cell = cells[0][0].unwrap();
    assert_eq!(cell.ch, '\u{2881}');
    assert_eq!(cell.rgb, (200, 100, 0));
}

#[test]
fn full_cell_is_all_dots() {
    let all: Vec<(u32, u32)> = (0..4).flat_map(|y| [(0, y), (1, y)]).collect();
    let cells = cells_from_pixels(&grid(2, 4, &all));
    assert_eq!(cells[0][0].unwrap().ch, '\u{28ff}');
}

#[test]
fn ragged_edges_round_up() {
    let cells = cells_from_pixels(&grid(3, 5, &[(2, 4)]));
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].len(), 2);
    assert_eq!(cells[1][1].unwrap().ch, '\u{2801}');
}
