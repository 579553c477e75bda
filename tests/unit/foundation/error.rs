use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LoopreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LoopreelError::unknown_key("nope")
            .to_string()
            .contains("unknown catalog key: nope")
    );
    assert!(
        LoopreelError::missing_renderer("x")
            .to_string()
            .contains("missing renderer:")
    );
    assert!(LoopreelError::render("x").to_string().contains("render error:"));
    assert!(LoopreelError::encode("x").to_string().contains("encode error:"));
    assert!(
        LoopreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LoopreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
