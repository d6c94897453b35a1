use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GridError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(
        GridError::precondition("x")
            .to_string()
            .contains("precondition violation:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
