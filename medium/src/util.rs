/// Maximum number of fractional digits kept when displaying an amount.
pub const DISPLAY_DECIMALS: usize = 4;

/// Round to [`DISPLAY_DECIMALS`] places, then drop trailing zeros and a
/// trailing decimal point.
///
/// Exact ties round away from zero (`0.03125` → `0.0313`).
///
/// ```
/// use medium::util::num_without_zeroes;
///
/// assert_eq!(num_without_zeroes(1.23456789), "1.2346");
/// assert_eq!(num_without_zeroes(100.0), "100");
/// assert_eq!(num_without_zeroes(0.5), "0.5");
/// ```
pub fn num_without_zeroes(val: f64) -> String {
    let val = format!("{:.*}", DISPLAY_DECIMALS, round_half_away(val));
    let val = val.trim_end_matches('0').trim_end_matches('.');
    // tiny negatives round to "-0"
    if val == "-0" {
        return "0".to_string();
    }
    val.to_string()
}

/// `{:.4}` rounds exact ties to even. A double sits exactly halfway between
/// two 4-decimal values only when it is an odd multiple of 1/32, where
/// `val * 10^4` is exact, so those are rounded here first.
fn round_half_away(val: f64) -> f64 {
    let thirty_seconds = val * 32.0;
    let is_tie = thirty_seconds.fract() == 0.0 && thirty_seconds % 2.0 != 0.0;
    if !is_tie {
        return val;
    }
    let scale = 10f64.powi(DISPLAY_DECIMALS as i32);
    (val * scale).round() / scale
}

/// Shortest decimal form of a float, used for volumes in headers (`100`, `2.5`).
pub fn shortest_decimal(val: f64) -> String {
    format!("{val}")
}
