use super::*;

#[test]
fn clones_share_state() {
    let a = CancelToken::new();
    let b = a.clone();
    assert!(!b.is_cancelled());
    a.cancel();
    assert!(b.is_cancelled());
}

#[test]
fn flag_drives_token() {
    let t = CancelToken::new();
    t.flag().store(true, Ordering::SeqCst);
    assert!(t.is_cancelled());
}
