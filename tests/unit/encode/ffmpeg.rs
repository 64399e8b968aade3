use super::*;

fn frames(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| Path::new("r/frames").join(n)).collect()
}

#[test]
fn pattern_follows_pad_width() {
    let p = input_pattern(&frames(&["001.png", "002.png", "003.png"])).unwrap();
    assert_eq!(p, Path::new("r/frames/%03d.png"));
    let p = input_pattern(&frames(&["0001.png", "0002.png"])).unwrap();
    assert_eq!(p, Path::new("r/frames/%04d.png"));
}

#[test]
fn gaps_are_rejected() {
    let err = input_pattern(&frames(&["001.png", "003.png"])).unwrap_err();
    assert!(matches!(err, AnimatorError::Encoding(_)));
}

#[test]
fn framerate_is_inverse_of_delay() {
    assert_eq!(FfmpegEncoder::new(10).framerate(), "100/10");
    assert_eq!(FfmpegEncoder::new(0).framerate(), "100/1");
}
