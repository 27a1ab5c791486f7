//! # lv-time
//!
//! Date, weekday, month, and leave-year window types.
//!
//! Everything here is date-only: there is no time-of-day component and no
//! reads of the system clock.  Functions that depend on "today" take it as
//! an explicit parameter so callers (and tests) control it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Leave-year configuration and window resolution.
pub mod leave_year;

/// `Month`, month of the year.
pub mod month;

/// `Weekday`, day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use leave_year::{LeaveYearConfig, LeaveYearRange};
pub use month::Month;
pub use weekday::Weekday;
