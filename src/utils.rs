//! Numeric helpers shared by the converters and formatters.
//!
//! Integer channels (red, green, blue, hue, percentages) go through
//! [`round_int`]; fractional channels (alpha, saturation, lightness, value)
//! go through [`round2`] so that serialized strings never carry floating
//! point noise such as `0.30000000000000004`.

/// Round half up to the nearest integer.
///
/// Exactly-halfway values round toward positive infinity, so `2.5 -> 3` and
/// `-2.5 -> -2`. This differs from [`f64::round`], which rounds halfway
/// values away from zero.
#[must_use]
pub fn round_int(x: f64) -> i64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "channel values are small; saturating cast is fine for garbage input"
    )]
    let value = rounded as i64;
    value
}

/// Round to two decimal places.
///
/// Never returns negative zero, so `round2(-0.001)` renders as `0`.
#[must_use]
pub fn round2(x: f64) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "value was produced from an f64")]
    let value = round_int(x * 100.0) as f64 / 100.0;
    if value == 0.0 { 0.0 } else { value }
}

/// Render a number the way the string formatters expect.
///
/// Whole numbers have no fractional part (`1`, not `1.0`) and fractions use
/// the shortest representation that round-trips (`0.5`, `0.25`).
#[must_use]
pub fn js_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
