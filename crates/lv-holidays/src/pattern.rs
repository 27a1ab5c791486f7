//! Partition remaining bank holidays by a recurring non-working pattern.
//!
//! Two patterns are supported: a weekly non-working weekday (4-day-week
//! schedules) and a fortnightly anchor date (9-day-fortnight schedules).
//! Both partition the in-window events into `matches` and `others` and
//! report counts in their labels, so a caller can always distinguish
//! "zero matches" (a valid result) from "could not compute" (an error).

use crate::event::BankHolidayEvent;
use crate::remaining::{events_between, remaining_in_year};
use lv_core::errors::{Error, Result};
use lv_time::{Date, LeaveYearConfig, Weekday};
use std::collections::BTreeSet;

/// The recurrence a [`PatternMatch`] was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Every week on the given weekday.
    Weekly(Weekday),
    /// Every 14 days starting from the anchor date.
    Fortnightly(Date),
}

/// Remaining in-window bank holidays split by pattern membership.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    /// The recurrence that was matched against.
    pub pattern: Pattern,
    /// Events on the pattern, ascending by date.
    pub matches: Vec<BankHolidayEvent>,
    /// Events in the window but off the pattern, ascending by date.
    pub others: Vec<BankHolidayEvent>,
    /// First date of the matched window.
    pub window_start: Date,
    /// Last date of the matched window (inclusive).
    pub window_end: Date,
}

/// Match remaining holidays in the leave year containing `start_date`
/// against a weekly non-working weekday.  The window is the remaining
/// portion of the year: the requested start clamped into the window and
/// forward to `today` (past holidays are excluded).
///
/// # Errors
/// [`Error::NoHolidayData`] when `events` is empty; [`Error::Date`] when
/// the leave year cannot be resolved.
pub fn match_weekday(
    events: &[BankHolidayEvent],
    config: &LeaveYearConfig,
    start_date: Date,
    today: Date,
    target: Weekday,
) -> Result<PatternMatch> {
    let window = remaining_in_year(events, config, start_date, today, false)?;
    let in_window = events_between(events, window.effective_start, window.range_end);

    let (matches, others) = in_window
        .into_iter()
        .partition(|e| e.date.weekday() == target);

    Ok(PatternMatch {
        pattern: Pattern::Weekly(target),
        matches,
        others,
        window_start: window.effective_start,
        window_end: window.range_end,
    })
}

/// Match holidays against an every-other-week pattern of non-working days
/// starting at `anchor`, up to the end of the leave year containing it.
///
/// # Errors
/// [`Error::NoHolidayData`] when `events` is empty; [`Error::InvalidRange`]
/// when the anchor falls past the end of its leave year; [`Error::Date`]
/// when the leave year cannot be resolved.
pub fn match_fortnight(
    events: &[BankHolidayEvent],
    config: &LeaveYearConfig,
    anchor: Date,
) -> Result<PatternMatch> {
    if events.is_empty() {
        return Err(Error::NoHolidayData);
    }
    let range = config.range_containing(anchor)?;
    if anchor > range.end {
        return Err(Error::InvalidRange(format!(
            "anchor {anchor} falls after the leave year ends ({})",
            range.end
        )));
    }

    let mut pattern_dates = BTreeSet::new();
    let mut cursor = anchor;
    while cursor <= range.end {
        pattern_dates.insert(cursor);
        match cursor.add_days(14) {
            Ok(next) => cursor = next,
            Err(_) => break,
        }
    }

    let in_window = events_between(events, anchor, range.end);
    let (matches, others) = in_window
        .into_iter()
        .partition(|e| pattern_dates.contains(&e.date));

    Ok(PatternMatch {
        pattern: Pattern::Fortnightly(anchor),
        matches,
        others,
        window_start: anchor,
        window_end: range.end,
    })
}

impl PatternMatch {
    /// Label for the matching list, with count: `"Bank holidays on
    /// Monday (2)"` or `"Bank holidays on non-working days (2)"`.
    pub fn matches_label(&self) -> String {
        match self.pattern {
            Pattern::Weekly(day) => {
                format!("Bank holidays on {} ({})", day.name(), self.matches.len())
            }
            Pattern::Fortnightly(_) => {
                format!("Bank holidays on non-working days ({})", self.matches.len())
            }
        }
    }

    /// Label for the non-matching list, with count.
    pub fn others_label(&self) -> String {
        match self.pattern {
            Pattern::Weekly(_) => {
                format!("Bank holidays on other days ({})", self.others.len())
            }
            Pattern::Fortnightly(_) => {
                format!("Other bank holidays in range ({})", self.others.len())
            }
        }
    }

    /// Summary sentence for the computed window.
    pub fn summary(&self) -> String {
        let start = self.window_start.human();
        let end = self.window_end.human();
        match self.pattern {
            Pattern::Weekly(_) => {
                if self.matches.is_empty() && self.others.is_empty() {
                    format!(
                        "No remaining bank holidays between {start} and {end} in this organisational working year."
                    )
                } else {
                    format!(
                        "Highlighting bank holidays between {start} and {end} in this organisational working year."
                    )
                }
            }
            Pattern::Fortnightly(_) => {
                if !self.matches.is_empty() {
                    format!(
                        "Found {} bank holidays on the every other week pattern between {start} and {end}.",
                        self.matches.len()
                    )
                } else if !self.others.is_empty() {
                    format!(
                        "No bank holidays align with this every other week pattern between {start} and {end}. Showing other bank holidays for reference."
                    )
                } else {
                    format!("No bank holidays fall between {start} and {end}.")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_time::Month;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn event(y: i32, m: u8, d: u8, title: &str) -> BankHolidayEvent {
        BankHolidayEvent {
            date: date(y, m, d),
            title: title.to_owned(),
            notes: String::new(),
            bunting: false,
        }
    }

    fn config() -> LeaveYearConfig {
        LeaveYearConfig::new(Month::April, 6, 365).unwrap()
    }

    #[test]
    fn weekly_partition_by_weekday() {
        // One Monday holiday and two non-Monday holidays in the window.
        let events = vec![
            event(2024, 8, 26, "Summer bank holiday"), // Monday
            event(2024, 12, 25, "Christmas Day"),      // Wednesday
            event(2024, 12, 26, "Boxing Day"),         // Thursday
        ];
        let matched = match_weekday(
            &events,
            &config(),
            date(2024, 4, 6),
            date(2024, 4, 6),
            Weekday::Monday,
        )
        .unwrap();
        assert_eq!(matched.matches.len(), 1);
        assert_eq!(matched.others.len(), 2);
        assert_eq!(matched.matches[0].title, "Summer bank holiday");
        assert_eq!(matched.matches_label(), "Bank holidays on Monday (1)");
        assert_eq!(matched.others_label(), "Bank holidays on other days (2)");
        assert!(matched.summary().starts_with("Highlighting bank holidays"));
    }

    #[test]
    fn weekly_window_excludes_past_holidays() {
        let events = vec![
            event(2024, 5, 6, "Early May bank holiday"), // Monday, before today
            event(2024, 8, 26, "Summer bank holiday"),   // Monday, after today
        ];
        let matched = match_weekday(
            &events,
            &config(),
            date(2024, 4, 6),
            date(2024, 6, 1),
            Weekday::Monday,
        )
        .unwrap();
        assert_eq!(matched.window_start, date(2024, 6, 1));
        assert_eq!(matched.matches.len(), 1);
        assert!(matched.others.is_empty());
    }

    #[test]
    fn weekly_empty_window_reports_no_remaining() {
        let events = vec![event(2024, 5, 6, "Early May bank holiday")];
        let matched = match_weekday(
            &events,
            &config(),
            date(2024, 4, 6),
            date(2024, 12, 1),
            Weekday::Monday,
        )
        .unwrap();
        assert!(matched.matches.is_empty());
        assert!(matched.others.is_empty());
        assert!(matched.summary().starts_with("No remaining bank holidays"));
    }

    #[test]
    fn fortnight_matches_every_fourteenth_day() {
        // Anchor Friday 2024-12-20; pattern hits 2025-01-03 but not
        // Christmas/Boxing Day/New Year.
        let events = vec![
            event(2024, 12, 25, "Christmas Day"),
            event(2024, 12, 26, "Boxing Day"),
            event(2025, 1, 1, "New Year's Day"),
            event(2025, 1, 3, "Special holiday"),
        ];
        let matched = match_fortnight(&events, &config(), date(2024, 12, 20)).unwrap();
        assert_eq!(matched.matches.len(), 1);
        assert_eq!(matched.matches[0].date, date(2025, 1, 3));
        assert_eq!(matched.others.len(), 3);
        assert_eq!(matched.window_end, date(2025, 4, 5));
        assert_eq!(
            matched.matches_label(),
            "Bank holidays on non-working days (1)"
        );
        assert!(matched.summary().starts_with("Found 1 bank holidays"));
    }

    #[test]
    fn fortnight_summaries_distinguish_empty_cases() {
        let off_pattern = vec![event(2024, 12, 25, "Christmas Day")];
        let matched = match_fortnight(&off_pattern, &config(), date(2024, 12, 20)).unwrap();
        assert!(matched.summary().starts_with("No bank holidays align"));

        let none_in_window = vec![event(2024, 5, 6, "Early May bank holiday")];
        let matched = match_fortnight(&none_in_window, &config(), date(2024, 12, 20)).unwrap();
        assert!(matched.summary().starts_with("No bank holidays fall"));
    }

    #[test]
    fn missing_data_is_an_error_not_empty() {
        assert_eq!(
            match_weekday(&[], &config(), date(2024, 4, 6), date(2024, 4, 6), Weekday::Monday),
            Err(Error::NoHolidayData)
        );
        assert_eq!(
            match_fortnight(&[], &config(), date(2024, 12, 20)),
            Err(Error::NoHolidayData)
        );
    }

    #[test]
    fn anchor_past_year_end_is_invalid_range() {
        let cfg = LeaveYearConfig::new(Month::January, 1, 31).unwrap();
        let events = vec![event(2024, 1, 1, "New Year's Day")];
        assert!(matches!(
            match_fortnight(&events, &cfg, date(2024, 6, 1)),
            Err(Error::InvalidRange(_))
        ));
    }
}
