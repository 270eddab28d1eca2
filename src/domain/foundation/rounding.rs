//! Fixed-precision rounding for presented values.

/// Rounds `value` to `digits` decimal places, halves away from zero.
///
/// Non-finite input is returned as `0.0` so presented values stay finite.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
