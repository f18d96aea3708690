use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ProcError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(ProcError::render("x").to_string().contains("render error:"));
    assert!(ProcError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ProcError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
