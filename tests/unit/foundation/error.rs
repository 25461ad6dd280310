use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let parse: Result<u32, _> = serde_json::from_str("not json");
    let err = SceneError::from(parse.unwrap_err());
    assert!(matches!(err, SceneError::Serde(_)));
}
