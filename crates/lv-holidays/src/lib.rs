//! # lv-holidays
//!
//! Bank-holiday events: dataset ingestion, remaining-holiday windows
//! within a leave year, and recurring-pattern matching.
//!
//! The dataset is always supplied as an already-fetched, immutable
//! snapshot; this crate never touches the network.  An empty snapshot is
//! reported as [`lv_core::Error::NoHolidayData`] by every calculation, so
//! callers can tell "no holidays apply" from "we don't know".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BankHolidayEvent` and dataset parsing.
pub mod event;

/// Weekly and fortnightly pattern matching.
pub mod pattern;

/// Remaining-holiday windows and counts.
pub mod remaining;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use event::{group_by_start_year, parse_division, BankHolidayEvent, DEFAULT_DIVISION};
pub use pattern::{match_fortnight, match_weekday, Pattern, PatternMatch};
pub use remaining::{current_year_total, events_between, remaining_in_year, HolidayWindow};
