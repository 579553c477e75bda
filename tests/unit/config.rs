use super::*;

#[test]
fn empty_object_yields_defaults() {
    let s = Settings::from_json_str("{}").unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.cycle(), Duration::from_secs(6));
    assert_eq!(s.initial_key, "indexing");
    assert_eq!(s.render.background.to_hex(), "#1e1b18");
    s.validate(Library::builtin().unwrap()).unwrap();
}

#[test]
fn partial_render_section_keeps_other_defaults() {
    let s = Settings::from_json_str(r##"{"render": {"fps": 24, "background": "#000000"}}"##).unwrap();
    assert_eq!(s.render.fps, 24);
    assert_eq!(s.render.scale, 2.0);
    assert_eq!(s.render_settings().clear, Some(Color::hex(0x000000)));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Settings::from_json_str(r#"{"cycle": 3}"#).unwrap_err();
    assert!(matches!(err, LoopreelError::Serde(_)));
}

#[test]
fn validation_rejects_bad_values() {
    let lib = Library::builtin().unwrap();
    let bad_cycle = Settings {
        cycle_secs: 0.0,
        ..Settings::default()
    };
    assert!(bad_cycle.validate(lib).is_err());

    let bad_key = Settings {
        initial_key: "missing".into(),
        ..Settings::default()
    };
    assert!(matches!(
        bad_key.validate(lib),
        Err(LoopreelError::UnknownCatalogKey(_))
    ));

    let mut bad_scale = Settings::default();
    bad_scale.render.scale = -1.0;
    assert!(bad_scale.validate(lib).is_err());
}

#[test]
fn tick_interval_follows_rate() {
    let s = Settings {
        tick_hz: 50,
        ..Settings::default()
    };
    assert_eq!(s.tick_interval(), Duration::from_millis(20));
}

#[test]
fn missing_file_is_an_error() {
    assert!(Settings::load(Path::new("/definitely/not/here.json")).is_err());
    assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
}
