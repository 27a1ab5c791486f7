//! Remaining bank holidays within a leave-year window.
//!
//! Computes how many bank holidays fall between an effective start date
//! and the end of the leave year.  The effective start is the requested
//! start clamped to the window and, unless past holidays are explicitly
//! requested, clamped forward to "today" when today falls strictly inside
//! the window after the clamped start.  Future leave years are never
//! clamped to today.

use crate::event::BankHolidayEvent;
use lv_core::errors::{Error, Result};
use lv_time::{Date, LeaveYearConfig};

/// A fully-resolved remaining-holiday computation.
///
/// A `count` of zero with `effective_start > range_end` is a valid result
/// (nothing remains in the window), distinct from the
/// [`Error::NoHolidayData`] case where no dataset was available at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayWindow {
    /// Number of events in `[effective_start, range_end]`.
    pub count: u32,
    /// Start of the resolved leave year.
    pub range_start: Date,
    /// End of the resolved leave year (inclusive).
    pub range_end: Date,
    /// The date counting actually starts from, after clamping.
    pub effective_start: Date,
    /// The start the caller asked for, when one was given; `None` for the
    /// whole-organisation current-year total.
    pub requested_start: Option<Date>,
    /// Whether the start was moved forward to today.
    pub adjusted_for_today: bool,
    /// Whether the start was moved forward to the leave-year start.
    pub adjusted_for_range_start: bool,
}

/// Count the bank holidays remaining in the leave year containing
/// `start_date`, counting from `start_date` clamped into the window and,
/// unless `include_past`, no earlier than `today`.
///
/// # Errors
/// [`Error::NoHolidayData`] when `events` is empty; [`Error::Date`] when
/// the leave year cannot be resolved.
pub fn remaining_in_year(
    events: &[BankHolidayEvent],
    config: &LeaveYearConfig,
    start_date: Date,
    today: Date,
    include_past: bool,
) -> Result<HolidayWindow> {
    if events.is_empty() {
        return Err(Error::NoHolidayData);
    }
    let range = config.range_containing(start_date)?;

    let adjusted_for_range_start = start_date < range.start;
    let clamped = if adjusted_for_range_start { range.start } else { start_date };

    let mut effective_start = clamped;
    let mut adjusted_for_today = false;
    if !include_past && today > clamped && today <= range.end {
        effective_start = today;
        adjusted_for_today = true;
    }

    let count = if effective_start > range.end {
        0
    } else {
        count_in(events, effective_start, range.end)
    };

    Ok(HolidayWindow {
        count,
        range_start: range.start,
        range_end: range.end,
        effective_start,
        requested_start: Some(start_date),
        adjusted_for_today,
        adjusted_for_range_start,
    })
}

/// Whole-organisation total for the leave year containing `today`, counted
/// from the year start (or from today, once the year is under way).
///
/// When today is already past the window end the result is a fully-formed
/// zero, not an error.
pub fn current_year_total(
    events: &[BankHolidayEvent],
    config: &LeaveYearConfig,
    today: Date,
) -> Result<HolidayWindow> {
    if events.is_empty() {
        return Err(Error::NoHolidayData);
    }
    let range = config.range_containing(today)?;

    if today > range.end {
        return Ok(HolidayWindow {
            count: 0,
            range_start: range.start,
            range_end: range.end,
            effective_start: range.end,
            requested_start: None,
            adjusted_for_today: true,
            adjusted_for_range_start: false,
        });
    }

    let mut effective_start = range.start;
    let mut adjusted_for_today = false;
    if today > range.start {
        effective_start = today;
        adjusted_for_today = true;
    }

    Ok(HolidayWindow {
        count: count_in(events, effective_start, range.end),
        range_start: range.start,
        range_end: range.end,
        effective_start,
        requested_start: None,
        adjusted_for_today,
        adjusted_for_range_start: false,
    })
}

/// Events falling inside `[from, to]`, in ascending date order.
pub fn events_between(events: &[BankHolidayEvent], from: Date, to: Date) -> Vec<BankHolidayEvent> {
    let mut selected: Vec<BankHolidayEvent> = events
        .iter()
        .filter(|e| e.date >= from && e.date <= to)
        .cloned()
        .collect();
    selected.sort_by_key(|e| e.date);
    selected
}

fn count_in(events: &[BankHolidayEvent], from: Date, to: Date) -> u32 {
    events.iter().filter(|e| e.date >= from && e.date <= to).count() as u32
}

impl HolidayWindow {
    /// Explanatory message for the computed default.
    ///
    /// With a requested start: "Counting N bank holidays[ remaining]
    /// between X and Y in this organisational working year." plus a
    /// sentence explaining any clamping.  Without one (the current-year
    /// total): "Defaulting to N bank holidays [remaining ]between X and Y
    /// in the current organisational working year. Adjust if needed."
    pub fn describe(&self) -> String {
        match self.requested_start {
            Some(requested) => {
                let remaining = if self.adjusted_for_today { " remaining" } else { "" };
                let mut parts = vec![format!(
                    "Counting {} bank holidays{} between {} and {} in this organisational working year.",
                    self.count,
                    remaining,
                    requested.human(),
                    self.range_end.human(),
                )];
                if requested != self.effective_start {
                    if self.adjusted_for_today {
                        parts.push(format!(
                            "Bank holidays before {} have already taken place.",
                            self.effective_start.human()
                        ));
                    } else if self.adjusted_for_range_start {
                        parts.push(format!(
                            "Start date adjusted to {} because it falls before the organisational working year begins.",
                            self.effective_start.human()
                        ));
                    }
                }
                parts.join(" ")
            }
            None => {
                let qualifier = if self.adjusted_for_today { "remaining " } else { "" };
                format!(
                    "Defaulting to {} bank holidays {}between {} and {} in the current organisational working year. Adjust if needed.",
                    self.count,
                    qualifier,
                    self.effective_start.human(),
                    self.range_end.human(),
                )
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

    /// Eight holidays spread across the 2024-25 fiscal year.
    fn fiscal_year_events() -> Vec<BankHolidayEvent> {
        vec![
            event(2024, 5, 6, "Early May bank holiday"),
            event(2024, 5, 27, "Spring bank holiday"),
            event(2024, 8, 26, "Summer bank holiday"),
            event(2024, 12, 25, "Christmas Day"),
            event(2024, 12, 26, "Boxing Day"),
            event(2025, 1, 1, "New Year's Day"),
            event(2025, 4, 18, "Good Friday"), // next fiscal year
            event(2025, 4, 21, "Easter Monday"), // next fiscal year
        ]
    }

    #[test]
    fn empty_events_are_not_zero() {
        let err = remaining_in_year(&[], &config(), date(2024, 10, 1), date(2024, 6, 1), false);
        assert_eq!(err, Err(Error::NoHolidayData));
        assert_eq!(
            current_year_total(&[], &config(), date(2024, 6, 1)),
            Err(Error::NoHolidayData)
        );
    }

    #[test]
    fn mid_year_start_counts_only_later_events() {
        // Scenario: start 1 Oct, today well before it; only the four
        // 2024-25 events on/after 1 Oct count, and the two events in the
        // following fiscal year never do.
        let window = remaining_in_year(
            &fiscal_year_events(),
            &config(),
            date(2024, 10, 1),
            date(2024, 6, 1),
            false,
        )
        .unwrap();
        assert_eq!(window.count, 3); // Christmas, Boxing Day, New Year
        assert_eq!(window.range_start, date(2024, 4, 6));
        assert_eq!(window.range_end, date(2025, 4, 5));
        assert_eq!(window.effective_start, date(2024, 10, 1));
        assert!(!window.adjusted_for_today);
        assert!(!window.adjusted_for_range_start);
    }

    #[test]
    fn today_clamps_forward_inside_current_year() {
        let window = remaining_in_year(
            &fiscal_year_events(),
            &config(),
            date(2024, 4, 6),
            date(2024, 6, 1),
            false,
        )
        .unwrap();
        assert_eq!(window.effective_start, date(2024, 6, 1));
        assert!(window.adjusted_for_today);
        // May holidays have passed; 4 remain in the fiscal year.
        assert_eq!(window.count, 4);
    }

    #[test]
    fn include_past_skips_today_clamp() {
        let window = remaining_in_year(
            &fiscal_year_events(),
            &config(),
            date(2024, 4, 6),
            date(2024, 6, 1),
            true,
        )
        .unwrap();
        assert_eq!(window.effective_start, date(2024, 4, 6));
        assert!(!window.adjusted_for_today);
        assert_eq!(window.count, 6);
    }

    #[test]
    fn excluding_past_never_exceeds_including_past() {
        let events = fiscal_year_events();
        let cfg = config();
        for day in [1u8, 10, 20] {
            for month in 1..=12u8 {
                let today = date(2024, month, day);
                let start = date(2024, 4, 6);
                let without = remaining_in_year(&events, &cfg, start, today, false).unwrap();
                let with = remaining_in_year(&events, &cfg, start, today, true).unwrap();
                assert!(without.count <= with.count, "today {today}");
            }
        }
    }

    #[test]
    fn future_years_are_never_clamped_to_today() {
        // Start in the next fiscal year; today is inside the current one,
        // so it lies outside the resolved window and must not move the
        // effective start.
        let window = remaining_in_year(
            &fiscal_year_events(),
            &config(),
            date(2025, 4, 6),
            date(2024, 6, 1),
            false,
        )
        .unwrap();
        assert_eq!(window.effective_start, date(2025, 4, 6));
        assert!(!window.adjusted_for_today);
        assert_eq!(window.count, 2);
    }

    #[test]
    fn start_past_window_end_is_valid_zero() {
        let cfg = LeaveYearConfig::new(Month::January, 1, 1).unwrap();
        let events = vec![event(2024, 1, 1, "New Year's Day")];
        let window =
            remaining_in_year(&events, &cfg, date(2024, 6, 1), date(2024, 1, 1), false).unwrap();
        // The window is the single day 2024-01-01; the requested start is
        // past its end, so a valid zero comes back.
        assert_eq!(window.count, 0);
        assert_eq!(window.effective_start, date(2024, 6, 1));
        assert!(window.effective_start > window.range_end);
    }

    #[test]
    fn current_year_total_counts_from_today() {
        let total =
            current_year_total(&fiscal_year_events(), &config(), date(2024, 6, 1)).unwrap();
        assert_eq!(total.count, 4);
        assert_eq!(total.effective_start, date(2024, 6, 1));
        assert!(total.adjusted_for_today);
        assert_eq!(total.requested_start, None);
    }

    #[test]
    fn current_year_total_past_end_is_zero() {
        let cfg = LeaveYearConfig::new(Month::January, 1, 31).unwrap();
        let events = vec![event(2024, 1, 1, "New Year's Day")];
        let total = current_year_total(&events, &cfg, date(2024, 6, 1)).unwrap();
        assert_eq!(total.count, 0);
        assert_eq!(total.effective_start, total.range_end);
        assert!(total.adjusted_for_today);
    }

    #[test]
    fn messages_explain_clamping() {
        let events = fiscal_year_events();
        let cfg = config();
        let clamped = remaining_in_year(&events, &cfg, date(2024, 4, 6), date(2024, 6, 1), false)
            .unwrap()
            .describe();
        assert!(clamped.starts_with("Counting 4 bank holidays remaining between 6 April 2024 and 5 April 2025"));
        assert!(clamped.contains("Bank holidays before 1 June 2024 have already taken place."));

        let unclamped = remaining_in_year(&events, &cfg, date(2024, 10, 1), date(2024, 6, 1), false)
            .unwrap()
            .describe();
        assert_eq!(
            unclamped,
            "Counting 3 bank holidays between 1 October 2024 and 5 April 2025 in this organisational working year."
        );

        let total = current_year_total(&events, &cfg, date(2024, 6, 1)).unwrap().describe();
        assert!(total.starts_with("Defaulting to 4 bank holidays remaining between 1 June 2024"));
    }
}
