pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Convert a unit-interval float channel to u8 with rounding and clamping.
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Number of steps needed to cover `span`, tolerant of float error.
///
/// `ceil(span / step)` except that quotients within `1e-9` (relative) of an integer snap to it,
/// so `0.6 / 0.2` yields 3 rather than 4.
pub(crate) fn ceil_steps(span: f64, step: f64) -> u64 {
    let q = span / step;
    let nearest = q.round();
    if (q - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        return nearest.max(0.0) as u64;
    }
    q.ceil().max(0.0) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
