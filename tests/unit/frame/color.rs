use super::*;

#[test]
fn hex_constructor_splits_channels() {
    let c = Color::hex(0xe8c872);
    assert_eq!((c.r, c.g, c.b, c.a), (0xe8, 0xc8, 0x72, 255));
}

#[test]
fn rgba_maps_unit_alpha_to_byte() {
    assert_eq!(Color::rgba(120, 110, 100, 0.12).a, 31);
    assert_eq!(Color::rgba(1, 2, 3, 1.0).a, 255);
    assert_eq!(Color::rgba(1, 2, 3, -4.0).a, 0);
    assert_eq!(Color::rgba(1, 2, 3, f64::NAN).a, 0);
}

#[test]
fn hsl_primary_and_grey() {
    let red = Color::hsl(0.0, 1.0, 0.5);
    assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    let grey = Color::hsl(200.0, 0.0, 0.5);
    assert_eq!((grey.r, grey.g, grey.b), (128, 128, 128));
    let wrapped = Color::hsl(360.0 + 120.0, 1.0, 0.5);
    assert_eq!((wrapped.r, wrapped.g, wrapped.b), (0, 255, 0));
}

#[test]
fn fade_multiplies_alpha() {
    let c = Color::hex(0xffffff).fade(0.5);
    assert_eq!(c.a, 128);
    assert!(Color::hex(0xffffff).fade(0.0).is_transparent());
}

#[test]
fn hex_roundtrip_through_serde() {
    let c = Color::hex(0xc4a0d8).with_alpha_u8(0x30);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#c4a0d830\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn parse_hex_rejects_bad_lengths() {
    assert!(Color::parse_hex("#fff").is_err());
    assert!(Color::parse_hex("#gg0000").is_err());
    assert_eq!(Color::parse_hex("1E1B18").unwrap(), Color::hex(0x1e1b18));
}
