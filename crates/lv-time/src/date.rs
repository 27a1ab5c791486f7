//! Day-precision calendar `Date`.
//!
//! A date is a serial day number counted from the Unix epoch
//! (serial 0 = 1970-01-01), so date differences are plain integer
//! subtraction and there is no time-of-day component to normalise away.
//! The valid range is 1900-01-01 to 2199-12-31.

use crate::month::Month;
use crate::weekday::Weekday;
use lv_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(-25_567);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(84_005);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1900, 2199]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO 8601 date string (`"YYYY-MM-DD"`, surrounding
    /// whitespace ignored).
    pub fn parse_iso(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(3, '-');
        let parse = |p: Option<&str>| -> Option<i32> { p?.parse().ok() };
        match (parse(parts.next()), parse(parts.next()), parse(parts.next())) {
            (Some(y), Some(m), Some(d)) if (1..=12).contains(&m) && (1..=31).contains(&d) => {
                Date::from_ymd(y, m as u8, d as u8)
            }
            _ => Err(Error::Date(format!("unparsable date {trimmed:?}"))),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial day number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("serial decomposition yields 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 (1970-01-01) was a Thursday, ordinal 4.
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result leaves the
    /// valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("date arithmetic: serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Return the signed number of calendar days from `self` to `other`
    /// (positive if `other` is later).
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn month_start(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn month_end(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the first day of the following month.
    ///
    /// # Errors
    /// Fails only when the result would pass [`Date::MAX`].
    pub fn next_month_start(self) -> Result<Self> {
        let (y, m, _) = ymd_from_serial(self.0);
        let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
        if ny > 2199 {
            return Err(Error::Date(format!("year {ny} out of range")));
        }
        Ok(Date(serial_from_ymd(ny, nm, 1)))
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Human-readable long form, e.g. `"1 October 2024"`.
    pub fn human(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        let month = Month::from_number(m).expect("serial decomposition yields 1..=12");
        format!("{d} {} {y}", month.long_name())
    }

    /// Short day-and-month form used in range labels, e.g. `"6 Apr"`.
    pub fn short_month_day(&self) -> String {
        let (_, m, d) = ymd_from_serial(self.0);
        let month = Month::from_number(m).expect("serial decomposition yields 1..=12");
        format!("{d} {}", month.short_name())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial day number (days since
/// 1970-01-01).  Closed-form civil-calendar arithmetic over 400-year eras;
/// no per-year iteration.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i64;
    let d = day as i64;
    // Shift the year so it starts in March; leap days then fall at the
    // end of the shifted year.
    let y = if m <= 2 { year as i64 - 1 } else { year as i64 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let shifted_month = if m > 2 { m - 3 } else { m + 9 }; // March = 0
    let doy = (153 * shifted_month + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    (era * 146_097 + doe - 719_468) as i32
}

/// Decompose a serial day number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let shifted_month = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * shifted_month + 2) / 5 + 1) as u8;
    let m = if shifted_month < 10 {
        (shifted_month + 3) as u8
    } else {
        (shifted_month - 9) as u8
    };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y as i32, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
