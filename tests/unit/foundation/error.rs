use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnimatorError::field_not_found("energy")
            .to_string()
            .contains("field not found: 'energy'")
    );
    assert!(
        AnimatorError::degenerate("x")
            .to_string()
            .contains("degenerate data:")
    );
    assert!(
        AnimatorError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(
        AnimatorError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AnimatorError::Cancelled { frames_written: 4 }
            .to_string()
            .contains("after 4 frame(s)")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnimatorError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
