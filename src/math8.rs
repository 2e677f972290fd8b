//! Integer helpers for 8-bit LED math.

/// Map an index from a `from_len` domain onto a `to_len` codomain.
///
/// Proportional integer mapping, truncating toward zero. Used both to
/// compress (more source LEDs than destination LEDs) and to expand (fewer
/// source LEDs than destination LEDs), so both paths collide on exactly the
/// same indices.
///
/// Returns `0` for an empty domain.
#[inline]
pub const fn map_index(index: usize, from_len: usize, to_len: usize) -> usize {
    if from_len == 0 {
        return 0;
    }
    index * to_len / from_len
}

/// Average two 8-bit values, truncating
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn average8(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

/// Convert a unit brightness (0.0-1.0) to an 8-bit intensity.
///
/// Values outside of the unit range are clamped, `NaN` is treated as off.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let value = value.clamp(0.0, 1.0);
    libm::roundf(value * 255.0) as u8
}
