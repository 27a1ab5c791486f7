//! Allowance components, core pro-ration, and aggregation.
//!
//! An allowance is the sum of named day-valued components.  When the
//! employee starts part-way through the leave year the core component is
//! scaled to the fraction of the year remaining; the other components are
//! taken as entered.

use crate::schedule::{HoursSettings, WorkSchedule};
use lv_core::errors::Result;
use lv_core::{format_days, round2, Days, Hours};
use lv_time::{Date, LeaveYearConfig};

/// Named day-valued allowance entries.  `purchased` and `bank_holidays`
/// are whole days; fractional input is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AllowanceComponents {
    /// Core annual leave, in days (pre pro-ration).
    pub core: Days,
    /// Long service leave, in days.
    pub long_service: Days,
    /// Carry over leave, in days.
    pub carry_over: Days,
    /// Purchased leave, in whole days.
    pub purchased: Days,
    /// Bank holidays granted as allowance, in whole days.
    pub bank_holidays: Days,
}

impl AllowanceComponents {
    /// Build a component set from raw input values.  Negative or
    /// non-finite entries become 0; the whole-day components are
    /// truncated.
    pub fn new(
        core: Days,
        long_service: Days,
        carry_over: Days,
        purchased: Days,
        bank_holidays: Days,
    ) -> Self {
        let day_value = |v: Days| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        AllowanceComponents {
            core: day_value(core),
            long_service: day_value(long_service),
            carry_over: day_value(carry_over),
            purchased: day_value(purchased).trunc(),
            bank_holidays: day_value(bank_holidays).trunc(),
        }
    }

    /// Labelled values in display order.
    pub fn breakdown(&self) -> [(&'static str, Days); 5] {
        [
            ("Core annual leave", self.core),
            ("Long service leave", self.long_service),
            ("Carry over leave", self.carry_over),
            ("Purchased leave", self.purchased),
            ("Bank holidays", self.bank_holidays),
        ]
    }

    /// Whether any component has been entered.
    pub fn has_values(&self) -> bool {
        self.breakdown().iter().any(|(_, v)| *v > 0.0)
    }

    fn total(&self) -> Days {
        self.breakdown().iter().map(|(_, v)| v).sum()
    }
}

/// The result of scaling the core allowance to the remaining fraction of
/// the leave year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProRataAdjustment {
    /// Fraction of the year remaining, in `[0, 1]`.
    pub fraction: f64,
    /// Core value as entered.
    pub original_value: Days,
    /// Core value after scaling, rounded to 2 decimals.
    pub pro_rated_value: Days,
    /// Inclusive days from the start date to the end of the year
    /// (0 when the start falls after the year ends).
    pub remaining_days: i32,
    /// Inclusive length of the leave year in days.
    pub total_days: i32,
    /// Start of the leave year the adjustment was computed against.
    pub range_start: Date,
    /// End of that leave year.
    pub range_end: Date,
    /// The start date the adjustment was computed for.
    pub effective_start: Date,
}

impl ProRataAdjustment {
    /// Per-component detail line, e.g.
    /// `"Pro-rated from 20 days for 183 of 365 days (50.1%)."`.
    pub fn detail(&self) -> String {
        if self.remaining_days > 0 {
            format!(
                "Pro-rated from {} for {} of {} days ({:.1}%).",
                format_days(self.original_value),
                self.remaining_days,
                self.total_days,
                self.fraction * 100.0,
            )
        } else {
            format!(
                "Start date is after {}, so no core leave remains.",
                self.range_end.human()
            )
        }
    }
}

/// Scale `full_value` of core leave to the portion of the leave year
/// remaining from `start_date`.
///
/// Returns `Ok(None)` when no adjustment applies: the value is zero or
/// the start date is on or before the year start (a full year is worked).
/// A start after the year end yields a fraction of 0, not an error.
pub fn core_pro_rata(
    full_value: Days,
    start_date: Date,
    config: &LeaveYearConfig,
) -> Result<Option<ProRataAdjustment>> {
    if !(full_value > 0.0) {
        return Ok(None);
    }
    let range = config.range_containing(start_date)?;
    if start_date <= range.start {
        return Ok(None);
    }

    let total_days = range.duration_days();
    if start_date > range.end {
        return Ok(Some(ProRataAdjustment {
            fraction: 0.0,
            original_value: full_value,
            pro_rated_value: 0.0,
            remaining_days: 0,
            total_days,
            range_start: range.start,
            range_end: range.end,
            effective_start: start_date,
        }));
    }

    let remaining_days = (range.end - start_date) + 1;
    let fraction = (f64::from(remaining_days) / f64::from(total_days)).clamp(0.0, 1.0);
    Ok(Some(ProRataAdjustment {
        fraction,
        original_value: full_value,
        pro_rated_value: round2(full_value * fraction),
        remaining_days,
        total_days,
        range_start: range.start,
        range_end: range.end,
        effective_start: start_date,
    }))
}

/// An aggregated allowance: component values after pro-ration, with day,
/// hour, and (for compressed schedules) compressed-day totals.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceSummary {
    /// The schedule the summary was aggregated for.
    pub schedule: WorkSchedule,
    /// Component values, with `core` replaced by the pro-rated value when
    /// an adjustment applies.
    pub components: AllowanceComponents,
    /// The core adjustment, when one applies.
    pub pro_rata: Option<ProRataAdjustment>,
    /// Sum of the component values, in days.
    pub total_days: Days,
    /// `total_days` converted at the standard day length.
    pub total_hours: Hours,
    /// `total_hours` converted at this schedule's day length; `None` for
    /// the standard week.
    pub compressed_days: Option<Days>,
}

/// Aggregate an allowance for a schedule.  When `start_date` is given and
/// falls inside the leave year, the core component is pro-rated first.
pub fn aggregate(
    components: AllowanceComponents,
    start_date: Option<Date>,
    config: &LeaveYearConfig,
    hours: &HoursSettings,
    schedule: WorkSchedule,
) -> Result<AllowanceSummary> {
    let pro_rata = match start_date {
        Some(start) => core_pro_rata(components.core, start, config)?,
        None => None,
    };

    let mut adjusted = components;
    if let Some(adjustment) = &pro_rata {
        adjusted.core = adjustment.pro_rated_value;
    }

    let total_days = adjusted.total();
    let total_hours = total_days * hours.day_hours(WorkSchedule::StandardWeek);
    let compressed_days = if schedule.is_compressed() {
        let day_hours = hours.day_hours(schedule);
        Some(if day_hours > 0.0 { total_hours / day_hours } else { 0.0 })
    } else {
        None
    };

    Ok(AllowanceSummary {
        schedule,
        components: adjusted,
        pro_rata,
        total_days,
        total_hours,
        compressed_days,
    })
}

impl AllowanceSummary {
    /// Whether anything was entered (either directly or via a pro-rated
    /// core that started non-zero).
    pub fn has_values(&self) -> bool {
        self.components.has_values()
            || self.pro_rata.map(|p| p.original_value > 0.0).unwrap_or(false)
    }

    /// The conversion shown alongside the totals, e.g.
    /// `"Total allowance (hours) = 25.00 × 7.40 = 185.00 hours."`.
    pub fn equation(&self, hours: &HoursSettings) -> String {
        format!(
            "Total allowance (hours) = {:.2} × {:.2} = {:.2} hours.",
            self.total_days,
            hours.day_hours(WorkSchedule::StandardWeek),
            self.total_hours,
        )
    }
}
