//! # lv-entitlement
//!
//! Allowance aggregation, accrual forecasting, and leave-request preview.
//!
//! An allowance is entered as named day-valued components, pro-rated for
//! mid-year starters, and summed into day and hour totals per work
//! schedule.  Accrual forecasts how much of it has built up by a given
//! date, and the preview pipeline classifies how well the allowance
//! covers a concrete leave request.  Everything here is a pure function
//! of its arguments; "today" is always passed in, never read from a
//! clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Monthly accrual in `Start` and `ProRata` modes.
pub mod accrual;

/// Allowance components, pro-ration, and aggregation.
pub mod allowance;

/// Leave-request preview and coverage classification.
pub mod preview;

/// Work schedules and hours-per-day derivation.
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use accrual::{accrued_days, default_monthly_rate, AccrualMode, AccrualSettings};
pub use allowance::{
    aggregate, core_pro_rata, AllowanceComponents, AllowanceSummary, ProRataAdjustment,
};
pub use preview::{
    count_weekdays_inclusive, preview, AccrualForecast, Coverage, CoverageStatus, LeavePreview,
    LeaveRequest,
};
pub use schedule::{HoursSettings, WorkSchedule, DEFAULT_WEEKLY_HOURS};
