//! Numeric rounding and display helpers.
//!
//! Allowance figures are presented to two decimal places throughout the
//! engine (half days and pro-rated fractions), so rounding lives here
//! rather than being repeated at each call site.

use crate::Days;

/// Round to two decimal places.  Non-finite input rounds to 0.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Format a day count for display: whole values without a fraction
/// (`"3 days"`, `"1 day"`), fractional values to two decimals
/// (`"2.5 days"`).
pub fn format_days(value: Days) -> String {
    let rounded = round2(value);
    let unit = if (rounded - 1.0).abs() < f64::EPSILON {
        "day"
    } else {
        "days"
    };
    if rounded.fract() == 0.0 {
        format!("{} {unit}", rounded as i64)
    } else {
        format!("{rounded} {unit}")
    }
}

/// Format an hour count for display, always to two decimals.
pub fn format_hours(value: f64) -> String {
    format!("{:.2} hours", round2(value))
}
