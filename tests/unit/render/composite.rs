use super::*;

#[test]
fn over_opaque_and_transparent_edges() {
    assert_eq!(over([1, 2, 3, 255], [9, 9, 9, 255]), [9, 9, 9, 255]);
    assert_eq!(over([1, 2, 3, 255], [0, 0, 0, 0]), [1, 2, 3, 255]);
}

#[test]
fn over_half_alpha_on_white() {
    let out = over([255, 255, 255, 255], [128, 0, 0, 128]);
    assert_eq!(out, [255, 127, 127, 255]);
}

#[test]
fn over_in_place_checks_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[10, 20, 30, 255, 0, 0, 0, 0]).is_ok());
    assert_eq!(dst, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = vec![128u8, 0, 0, 128, 7, 8, 9, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, vec![255, 0, 0, 128, 7, 8, 9, 255]);
}
