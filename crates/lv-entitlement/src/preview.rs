//! Leave-request preview: working days, bank-holiday offset, and coverage.
//!
//! A single validating pipeline: count the weekdays the request spans,
//! subtract the weekday bank holidays falling inside it, then classify
//! how well the aggregated allowance (or the accrual forecast) covers the
//! result.  The classification has exactly five outcomes and they are the
//! testable surface, not a covered/not-covered boolean.

use crate::accrual::{accrued_days, AccrualMode, AccrualSettings};
use crate::allowance::AllowanceSummary;
use lv_core::errors::Result;
use lv_core::{ensure, format_days, round2, Days, Rate};
use lv_holidays::{events_between, BankHolidayEvent};
use lv_time::{Date, LeaveYearConfig, LeaveYearRange};

/// A validated leave request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaveRequest {
    /// First day of leave.
    pub start: Date,
    /// Last day of leave (inclusive).
    pub end: Date,
    /// Whether the final day is only half taken.
    pub end_is_half_day: bool,
    /// Days of leave already taken this year.
    pub leave_taken: Days,
}

impl LeaveRequest {
    /// Build a request, rejecting `end < start` before any computation.
    /// Negative or non-finite `leave_taken` counts as 0.
    pub fn new(start: Date, end: Date, end_is_half_day: bool, leave_taken: Days) -> Result<Self> {
        ensure!(end >= start, "leave end must be on or after the start date");
        Ok(LeaveRequest {
            start,
            end,
            end_is_half_day,
            leave_taken: if leave_taken.is_finite() && leave_taken > 0.0 {
                leave_taken
            } else {
                0.0
            },
        })
    }
}

/// Number of weekdays (Mon–Fri) in `[start, end]` inclusive.  Saturdays
/// and Sundays are excluded regardless of any company calendar.
pub fn count_weekdays_inclusive(start: Date, end: Date) -> u32 {
    let mut count = 0;
    let mut day = start;
    while day <= end {
        if !day.weekday().is_weekend() {
            count += 1;
        }
        match day.add_days(1) {
            Ok(next) => day = next,
            Err(_) => break,
        }
    }
    count
}

// ── Coverage ──────────────────────────────────────────────────────────────────

/// Presentation status of a coverage outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageStatus {
    /// The request is fine.
    Positive,
    /// Something needs attention but nothing is short.
    Warning,
    /// The allowance does not cover the request.
    Negative,
}

/// The five ways an allowance can relate to a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coverage {
    /// No allowance figures have been entered to compare against.
    NoAllowance {
        /// Whether leave taken was entered despite the missing allowance.
        leave_taken_entered: bool,
    },
    /// The request needs no leave days and the balance is not overdrawn.
    NoneNeeded,
    /// The request needs no leave days but the balance is already
    /// overdrawn.
    NoneNeededOverAllowance {
        /// How far over the allowance the balance already is, in days.
        over_by: Days,
    },
    /// The allowance covers the request.
    Covered {
        /// Days left after the request; may be exactly 0.
        remaining: Days,
    },
    /// The allowance falls short.
    Insufficient {
        /// Days missing to cover the request.
        shortfall: Days,
    },
}

impl Coverage {
    fn classify(has_allowance: bool, request: &LeaveRequest, needed: Days, available: Days) -> Self {
        if !has_allowance {
            return Coverage::NoAllowance {
                leave_taken_entered: request.leave_taken > 0.0,
            };
        }
        if needed == 0.0 {
            if available >= 0.0 {
                return Coverage::NoneNeeded;
            }
            return Coverage::NoneNeededOverAllowance { over_by: -available };
        }
        let remaining = available - needed;
        if remaining >= 0.0 {
            Coverage::Covered { remaining }
        } else {
            Coverage::Insufficient { shortfall: -remaining }
        }
    }

    /// Status the outcome is presented with.
    pub fn status(&self) -> CoverageStatus {
        match self {
            Coverage::NoneNeeded | Coverage::Covered { .. } => CoverageStatus::Positive,
            Coverage::NoAllowance { .. } | Coverage::NoneNeededOverAllowance { .. } => {
                CoverageStatus::Warning
            }
            Coverage::Insufficient { .. } => CoverageStatus::Negative,
        }
    }

    /// User-facing outcome text.
    pub fn message(&self) -> String {
        match self {
            Coverage::NoAllowance { leave_taken_entered: true } => {
                "Add your annual leave allowances above to compare against the leave already taken."
                    .to_owned()
            }
            Coverage::NoAllowance { leave_taken_entered: false } => {
                "Enter your annual leave allowances above to calculate your remaining balance."
                    .to_owned()
            }
            Coverage::NoneNeeded => "No additional leave is required for this period.".to_owned(),
            Coverage::NoneNeededOverAllowance { over_by } => format!(
                "No additional leave is required, but you are {} over your allowance.",
                format_days(*over_by)
            ),
            Coverage::Covered { remaining } if *remaining == 0.0 => {
                "This request uses the final days of your allowance.".to_owned()
            }
            Coverage::Covered { remaining } => {
                format!("{} will remain after this request.", format_days(*remaining))
            }
            Coverage::Insufficient { shortfall } => format!(
                "You need {} more days to cover this request.",
                format_number(*shortfall)
            ),
        }
    }
}

// ── Forecast and preview ──────────────────────────────────────────────────────

/// Accrued-entitlement figures for a request, when accrual is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualForecast {
    /// Days accrued before the request begins.  In `ProRata` mode the
    /// limit is the day before the start, so the start day itself never
    /// contributes a partial-month fraction.
    pub by_start: Days,
    /// Days accrued by the request's end, bounded by the leave-year end.
    pub by_end: Days,
    /// `by_end` minus leave taken minus the days this request needs.
    pub balance: Days,
    /// Mode the forecast was computed with.
    pub mode: AccrualMode,
    /// Monthly rate the forecast was computed with.
    pub rate: Rate,
}

/// A fully-computed leave-request preview.
#[derive(Debug, Clone, PartialEq)]
pub struct LeavePreview {
    /// The validated request.
    pub request: LeaveRequest,
    /// The leave year the request's start falls in.
    pub range: LeaveYearRange,
    /// Weekdays spanned by the request.
    pub working_days: u32,
    /// Weekday bank holidays inside the request and the leave year, in
    /// date order.  `None` when no dataset was available; that is
    /// reported as unavailable, never as zero.
    pub bank_holidays: Option<Vec<BankHolidayEvent>>,
    /// Working days minus weekday bank holidays, floored at 0, with the
    /// half-day deduction applied.
    pub leave_days_needed: Days,
    /// Accrual figures, when accrual is enabled.
    pub accrual: Option<AccrualForecast>,
    /// Allowance total minus leave already taken.
    pub available_days: Days,
    /// `available_days` minus `leave_days_needed`.
    pub remaining_after_request: Days,
    /// The five-way classification of the request.
    pub coverage: Coverage,
}

/// Compute the preview for a request against an aggregated allowance.
///
/// Coverage always classifies against the allowance figures; the accrual
/// forecast, when enabled, is reported alongside rather than replacing
/// them.
pub fn preview(
    request: &LeaveRequest,
    config: &LeaveYearConfig,
    events: &[BankHolidayEvent],
    allowance: &AllowanceSummary,
    accrual: &AccrualSettings,
) -> Result<LeavePreview> {
    let range = config.range_containing(request.start)?;
    let working_days = count_weekdays_inclusive(request.start, request.end);

    let bank_holidays = if events.is_empty() {
        None
    } else {
        let from = request.start.max(range.start);
        let to = request.end.min(range.end);
        let matching: Vec<BankHolidayEvent> = events_between(events, from, to)
            .into_iter()
            .filter(|e| !e.date.weekday().is_weekend())
            .collect();
        Some(matching)
    };
    let holiday_count = bank_holidays.as_ref().map(|v| v.len() as u32).unwrap_or(0);

    let mut leave_days_needed = f64::from(working_days.saturating_sub(holiday_count));
    if request.end_is_half_day && leave_days_needed > 0.0 {
        leave_days_needed = (leave_days_needed - 0.5).max(0.0);
    }

    let accrual_forecast = if accrual.enabled {
        let start_limit = match accrual.mode {
            AccrualMode::ProRata => request.start.add_days(-1)?,
            AccrualMode::Start => request.start,
        };
        let end_limit = request.end.min(range.end);
        let by_start =
            accrued_days(accrual.mode, range.start, range.end, start_limit, accrual.monthly_rate);
        let by_end =
            accrued_days(accrual.mode, range.start, range.end, end_limit, accrual.monthly_rate);
        Some(AccrualForecast {
            by_start,
            by_end,
            balance: by_end - request.leave_taken - leave_days_needed,
            mode: accrual.mode,
            rate: accrual.monthly_rate,
        })
    } else {
        None
    };

    let available_days = allowance.total_days - request.leave_taken;
    let remaining_after_request = available_days - leave_days_needed;
    let coverage = Coverage::classify(
        allowance.has_values(),
        request,
        leave_days_needed,
        available_days,
    );

    Ok(LeavePreview {
        request: *request,
        range,
        working_days,
        bank_holidays,
        leave_days_needed,
        accrual: accrual_forecast,
        available_days,
        remaining_after_request,
        coverage,
    })
}

impl LeavePreview {
    /// Headline line for the preview.
    pub fn headline(&self) -> String {
        format!(
            "Showing leave requirements for {} to {}.",
            self.request.start.human(),
            self.request.end.human(),
        )
    }

    /// Explanatory notes in display order: half-day handling, the
    /// bank-holiday situation, the accrual forecast, and any core
    /// pro-ration applied to the allowance.
    pub fn notes(&self, allowance: &AllowanceSummary) -> Vec<String> {
        let mut notes = Vec::new();

        if self.request.end_is_half_day {
            notes.push("Treating the final day as a half-day deduction.".to_owned());
        }

        match &self.bank_holidays {
            Some(matching) if !matching.is_empty() => {
                let plural = if matching.len() == 1 { "" } else { "s" };
                notes.push(format!(
                    "{} bank holiday{plural} fall on weekdays during this period.",
                    matching.len()
                ));
            }
            Some(_) => {
                notes.push("No bank holidays fall on weekdays during this period.".to_owned());
            }
            None => notes.push(
                "Bank holiday data is unavailable; results do not exclude bank holidays."
                    .to_owned(),
            ),
        }

        match &self.accrual {
            Some(forecast) => {
                if forecast.rate > 0.0 {
                    let rate = format_number(forecast.rate);
                    notes.push(match forecast.mode {
                        AccrualMode::ProRata => {
                            format!("Accrual calculated pro-rata at {rate} days per month.")
                        }
                        AccrualMode::Start => format!(
                            "Accrual calculated at {rate} days per month, credited at the start of each month."
                        ),
                    });
                } else {
                    notes.push("Accrual enabled with a 0 day monthly rate.".to_owned());
                }

                if forecast.balance > 0.0 {
                    notes.push(format!(
                        "{} of accrued leave would remain after this request.",
                        format_days(forecast.balance)
                    ));
                } else if forecast.balance < 0.0 {
                    notes.push(format!(
                        "Accrued leave would fall short by {} for this request.",
                        format_days(-forecast.balance)
                    ));
                } else {
                    notes.push("Accrued leave would be fully used by this request.".to_owned());
                }
            }
            None => notes.push(
                "Enable accrual to compare the allowance against forecasted entitlement."
                    .to_owned(),
            ),
        }

        if let Some(adjustment) = &allowance.pro_rata {
            if adjustment.remaining_days > 0 {
                notes.push(format!(
                    "Core allowance pro-rated from {} to {} covering {} of {} days between {} and {} ({:.1}%).",
                    format_days(adjustment.original_value),
                    format_days(adjustment.pro_rated_value),
                    adjustment.remaining_days,
                    adjustment.total_days,
                    adjustment.effective_start.human(),
                    adjustment.range_end.human(),
                    adjustment.fraction * 100.0,
                ));
            } else {
                notes.push(format!(
                    "The selected start date falls after {}, so no core leave is available.",
                    adjustment.range_end.human()
                ));
            }
        }

        notes
    }
}

/// Format a bare number: whole values without a fraction, otherwise to
/// two decimals.
fn format_number(value: f64) -> String {
    let rounded = round2(value);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
