//! Accrual forecasting: how much entitlement has built up by a date.
//!
//! Two accounting modes share one signature.  `Start` credits the full
//! monthly rate on the 1st of each month; `ProRata` credits a day-fraction
//! of the rate for partially-covered months.  Both loop month-by-month
//! (never day-by-day), and both break if a
//! month step fails to advance.

use lv_core::errors::{Error, Result};
use lv_core::{round2, Days, Rate};
use lv_time::{days_in_month, Date};

/// How monthly accrual is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccrualMode {
    /// The full monthly rate is credited on the 1st of each month.
    #[default]
    Start,
    /// Partial months credit a day-fraction of the monthly rate.
    ProRata,
}

impl AccrualMode {
    /// Parse a stored option value, case-insensitively (`"start"` or
    /// `"prorata"`).  Unknown values are rejected at the boundary rather
    /// than compared ad hoc downstream.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(AccrualMode::Start),
            "prorata" => Ok(AccrualMode::ProRata),
            other => Err(Error::Config(format!("unknown accrual mode {other:?}"))),
        }
    }
}

/// Accrual configuration for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccrualSettings {
    /// Whether accrual forecasting is enabled at all.
    pub enabled: bool,
    /// Days accrued per month.
    pub monthly_rate: Rate,
    /// Crediting mode.
    pub mode: AccrualMode,
}

/// Days accrued over `[range_start, min(limit, range_end)]` at
/// `monthly_rate` days per month.  A limit before the range start, or an
/// unusable rate, accrues nothing.
pub fn accrued_days(
    mode: AccrualMode,
    range_start: Date,
    range_end: Date,
    limit: Date,
    monthly_rate: Rate,
) -> Days {
    if !monthly_rate.is_finite() || monthly_rate <= 0.0 {
        return 0.0;
    }
    let limit = if limit < range_end { limit } else { range_end };
    if limit < range_start {
        return 0.0;
    }
    match mode {
        AccrualMode::Start => monthly(range_start, limit, monthly_rate),
        AccrualMode::ProRata => pro_rata(range_start, limit, monthly_rate),
    }
}

/// Full rate for every month whose 1st lies in `[range_start, limit]`
/// (counting `range_start` itself when it is the 1st).
fn monthly(range_start: Date, limit: Date, rate: Rate) -> Days {
    let mut current = if range_start.day_of_month() == 1 {
        range_start
    } else {
        match range_start.next_month_start() {
            Ok(d) => d,
            Err(_) => return 0.0,
        }
    };

    let mut total = 0.0;
    while current <= limit {
        total += rate;
        match current.next_month_start() {
            Ok(next) if next > current => current = next,
            _ => break,
        }
    }
    total
}

/// Day-fraction of the rate for every calendar month overlapping
/// `[range_start, limit]`.
fn pro_rata(range_start: Date, limit: Date, rate: Rate) -> Days {
    let mut cursor = range_start.month_start();
    let mut total = 0.0;
    while cursor <= limit {
        let month_end = cursor.month_end();
        let segment_start = if range_start > cursor { range_start } else { cursor };
        let segment_end = if limit < month_end { limit } else { month_end };
        if segment_end >= segment_start {
            let month_days = f64::from(days_in_month(cursor.year(), cursor.month()));
            let overlap_days = f64::from(segment_end - segment_start + 1);
            total += rate * overlap_days / month_days;
        }
        match cursor.next_month_start() {
            Ok(next) if next > cursor => cursor = next,
            _ => break,
        }
    }
    total
}

/// Suggested monthly rate: core plus long-service leave spread over 12
/// months, rounded to 2 decimals.  `None` when there is nothing to
/// spread.
pub fn default_monthly_rate(core: Days, long_service: Days) -> Option<Rate> {
    let total = core + long_service;
    if total.is_finite() && total > 0.0 {
        let rate = round2(total / 12.0);
        (rate > 0.0).then_some(rate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parse_modes() {
        assert_eq!(AccrualMode::parse("start").unwrap(), AccrualMode::Start);
        assert_eq!(AccrualMode::parse(" ProRata ").unwrap(), AccrualMode::ProRata);
        assert!(AccrualMode::parse("monthly").is_err());
        assert!(AccrualMode::parse("").is_err());
    }

    #[test]
    fn monthly_credits_each_first() {
        let start = date(2024, 4, 1);
        let end = date(2025, 3, 31);
        // Limit mid-June: firsts of April, May, June have passed.
        let accrued = accrued_days(AccrualMode::Start, start, end, date(2024, 6, 15), 2.0);
        assert_relative_eq!(accrued, 6.0);
    }

    #[test]
    fn monthly_skips_partial_first_month() {
        let start = date(2024, 4, 15);
        let end = date(2025, 3, 31);
        // First credit lands on May 1.
        assert_relative_eq!(
            accrued_days(AccrualMode::Start, start, end, date(2024, 4, 30), 2.0),
            0.0
        );
        assert_relative_eq!(
            accrued_days(AccrualMode::Start, start, end, date(2024, 5, 1), 2.0),
            2.0
        );
    }

    #[test]
    fn pro_rata_credits_day_fractions() {
        let start = date(2024, 4, 16);
        let end = date(2025, 3, 31);
        // 15 of April's 30 days.
        let half_april = accrued_days(AccrualMode::ProRata, start, end, date(2024, 4, 30), 2.0);
        assert_relative_eq!(half_april, 1.0);
        // Half of April plus 10 of May's 31 days.
        let into_may = accrued_days(AccrualMode::ProRata, start, end, date(2024, 5, 10), 2.0);
        assert_relative_eq!(into_may, 1.0 + 2.0 * 10.0 / 31.0, epsilon = 1e-9);
    }

    #[test]
    fn limit_is_clamped_to_range_end() {
        let start = date(2024, 4, 1);
        let end = date(2024, 6, 30);
        let beyond = accrued_days(AccrualMode::ProRata, start, end, date(2025, 1, 1), 2.0);
        assert_relative_eq!(beyond, 6.0);
        assert_relative_eq!(
            accrued_days(AccrualMode::Start, start, end, date(2025, 1, 1), 2.0),
            6.0
        );
    }

    #[test]
    fn limit_before_range_accrues_nothing() {
        let start = date(2024, 4, 1);
        let end = date(2025, 3, 31);
        for mode in [AccrualMode::Start, AccrualMode::ProRata] {
            assert_relative_eq!(accrued_days(mode, start, end, date(2024, 3, 31), 2.0), 0.0);
        }
    }

    #[test]
    fn unusable_rate_accrues_nothing() {
        let start = date(2024, 4, 1);
        let end = date(2025, 3, 31);
        for rate in [0.0, -1.0, f64::NAN] {
            assert_relative_eq!(
                accrued_days(AccrualMode::Start, start, end, end, rate),
                0.0
            );
        }
    }

    #[test]
    fn modes_agree_at_month_boundaries() {
        // With the range opening on a 1st, a limit on a month's last day
        // credits whole months in both modes.
        let start = date(2024, 4, 1);
        let end = date(2025, 3, 31);
        for (limit, months) in [
            (date(2024, 4, 30), 1.0),
            (date(2024, 6, 30), 3.0),
            (date(2024, 12, 31), 9.0),
            (date(2025, 3, 31), 12.0),
        ] {
            let monthly = accrued_days(AccrualMode::Start, start, end, limit, 1.5);
            let pro_rata = accrued_days(AccrualMode::ProRata, start, end, limit, 1.5);
            assert_relative_eq!(monthly, 1.5 * months, epsilon = 1e-9);
            assert_relative_eq!(pro_rata, 1.5 * months, epsilon = 1e-9);
        }
    }

    #[test]
    fn multi_year_ranges_stay_exact() {
        // 450-day maximum year: Apr 2024 through Jun 2025.
        let start = date(2024, 4, 1);
        let end = date(2025, 6, 24);
        let accrued = accrued_days(AccrualMode::Start, start, end, end, 1.0);
        // Firsts: Apr 2024..Jun 2025 inclusive = 15 months.
        assert_relative_eq!(accrued, 15.0);
    }

    #[test]
    fn suggested_rate_spreads_over_twelve_months() {
        assert_eq!(default_monthly_rate(20.0, 2.0), Some(1.83));
        assert_eq!(default_monthly_rate(24.0, 0.0), Some(2.0));
        assert_eq!(default_monthly_rate(0.0, 0.0), None);
        assert_eq!(default_monthly_rate(-5.0, 0.0), None);
    }

    proptest! {
        #[test]
        fn accrual_is_monotone_in_limit(
            offset_a in 0i32..500,
            offset_b in 0i32..500,
            rate in 0.1f64..5.0,
        ) {
            let start = date(2024, 4, 6);
            let end = date(2025, 6, 24);
            let (lo, hi) = if offset_a <= offset_b { (offset_a, offset_b) } else { (offset_b, offset_a) };
            let limit_lo = start.add_days(lo).unwrap();
            let limit_hi = start.add_days(hi).unwrap();
            for mode in [AccrualMode::Start, AccrualMode::ProRata] {
                let early = accrued_days(mode, start, end, limit_lo, rate);
                let late = accrued_days(mode, start, end, limit_hi, rate);
                prop_assert!(early <= late + 1e-12, "{mode:?}: {early} > {late}");
            }
        }
    }
}
