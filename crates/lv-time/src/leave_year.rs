//! Leave-year (organisational working year) windows.
//!
//! A leave year is a recurring annual window anchored to a configured
//! month/day with a configured length in days.  It is independent of the
//! calendar year: with the default April 6 / 365-day policy, 2024-10-01
//! belongs to the window opening 2024-04-06, while 2024-02-01 belongs to
//! the one that opened 2023-04-06.

use crate::date::{days_in_month, Date};
use crate::month::Month;
use lv_core::errors::{Error, Result};

/// Default leave-year start: April 1.
pub const DEFAULT_START_MONTH: Month = Month::April;
/// Default leave-year start day.
pub const DEFAULT_START_DAY: u8 = 1;
/// Default leave-year duration in days.
pub const DEFAULT_DURATION_DAYS: u16 = 365;
/// Shortest permitted leave year (a single day).
pub const MIN_DURATION_DAYS: u16 = 1;
/// Longest permitted leave year.
pub const MAX_DURATION_DAYS: u16 = 450;

/// A recurring annual leave-year anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveYearConfig {
    /// Month the leave year starts in.
    pub start_month: Month,
    /// Day of month the leave year starts on (1–31; clamped per-year to
    /// the actual month length, so day 31 resolves to day 30 in a 30-day
    /// month and Feb 29 needs no special case).
    pub start_day: u8,
    /// Length of the window in days, inclusive of the start day.
    pub duration_days: u16,
}

impl Default for LeaveYearConfig {
    fn default() -> Self {
        LeaveYearConfig {
            start_month: DEFAULT_START_MONTH,
            start_day: DEFAULT_START_DAY,
            duration_days: DEFAULT_DURATION_DAYS,
        }
    }
}

impl LeaveYearConfig {
    /// Create a configuration.  The start day must be 1–31; the duration
    /// is clamped into `[MIN_DURATION_DAYS, MAX_DURATION_DAYS]`.
    pub fn new(start_month: Month, start_day: u8, duration_days: u16) -> Result<Self> {
        if !(1..=31).contains(&start_day) {
            return Err(Error::Config(format!(
                "start day {start_day} out of range [1, 31]"
            )));
        }
        Ok(LeaveYearConfig {
            start_month,
            start_day,
            duration_days: duration_days.clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS),
        })
    }

    /// Build a configuration from raw persisted values, substituting the
    /// documented defaults for anything missing or out of range.
    pub fn from_raw(start_month: Option<u8>, start_day: Option<u8>, duration_days: Option<i64>) -> Self {
        let (month, day) = match (start_month.and_then(Month::from_number), start_day) {
            (Some(m), Some(d)) if (1..=31).contains(&d) => (m, d),
            _ => (DEFAULT_START_MONTH, DEFAULT_START_DAY),
        };
        let duration = duration_days
            .map(|d| d.clamp(MIN_DURATION_DAYS as i64, MAX_DURATION_DAYS as i64) as u16)
            .unwrap_or(DEFAULT_DURATION_DAYS);
        LeaveYearConfig {
            start_month: month,
            start_day: day,
            duration_days: duration,
        }
    }

    /// Return the leave-year start date for a given calendar year, with
    /// the configured day clamped to that month's actual length.
    pub fn start_for_year(&self, year: i32) -> Result<Date> {
        let month = self.start_month.number();
        let day = self.start_day.min(days_in_month(year, month));
        Date::from_ymd(year, month, day)
    }

    /// Return the start of the leave year containing `date`.
    ///
    /// The candidate start in `date`'s own calendar year is used when
    /// `date` is on or after it; otherwise the previous year's start.
    /// A date exactly on the boundary belongs to the window it opens.
    pub fn start_of_year_containing(&self, date: Date) -> Result<Date> {
        let candidate = self.start_for_year(date.year())?;
        if date < candidate {
            self.start_for_year(date.year() - 1)
        } else {
            Ok(candidate)
        }
    }

    /// Return the leave-year window containing `date`.
    pub fn range_containing(&self, date: Date) -> Result<LeaveYearRange> {
        let start = self.start_of_year_containing(date)?;
        let end = start.add_days(i32::from(self.duration_days) - 1)?;
        Ok(LeaveYearRange { start, end })
    }

    /// Return the calendar year in which the leave year containing `date`
    /// starts.  Used to group bank holidays by organisational year.
    pub fn start_year_of(&self, date: Date) -> Result<i32> {
        Ok(self.start_of_year_containing(date)?.year())
    }

    /// Label for the leave year starting in `start_year`, e.g.
    /// `"2024 to 2025 (6 Apr – 5 Apr)"`.
    pub fn year_label(&self, start_year: i32) -> Result<String> {
        let start = self.start_for_year(start_year)?;
        let end = start.add_days(i32::from(self.duration_days) - 1)?;
        Ok(format!(
            "{} to {} ({} – {})",
            start_year,
            start_year + 1,
            start.short_month_day(),
            end.short_month_day()
        ))
    }
}

/// A resolved leave-year window.  Both bounds are inclusive dates;
/// `end = start + duration_days − 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveYearRange {
    /// First day of the window.
    pub start: Date,
    /// Last day of the window (inclusive).
    pub end: Date,
}

impl LeaveYearRange {
    /// Inclusive day count of the window.
    pub fn duration_days(&self) -> i32 {
        self.end - self.start + 1
    }

    /// Whether `date` lies inside the window (inclusive).
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }

    /// Long label, e.g. `"6 April 2024 to 5 April 2025"`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.start.human(), self.end.human())
    }

    /// Short label, e.g. `"6 Apr – 5 Apr"`.
    pub fn short_label(&self) -> String {
        format!("{} – {}", self.start.short_month_day(), self.end.short_month_day())
    }
}
