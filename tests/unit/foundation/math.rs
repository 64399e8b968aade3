use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
    assert_eq!(mul_div255_u16(1, 127), 0);
    assert_eq!(mul_div255_u16(2, 128), 1);
}

#[test]
fn ceil_steps_snaps_float_noise() {
    assert_eq!(ceil_steps(0.6, 0.2), 3);
    assert_eq!(ceil_steps(0.6, 0.25), 3);
    assert_eq!(ceil_steps(1.0, 1.0 / 50.0), 50);
    assert_eq!(ceil_steps(0.7, 0.25), 3);
    assert_eq!(ceil_steps(0.0, 0.1), 0);
}

#[test]
fn unit_to_u8_clamps() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(0.5), 128);
    assert_eq!(unit_to_u8(2.0), 255);
}
