//! Bank-holiday events and dataset ingestion.
//!
//! The external collaborator fetches a JSON payload of the shape
//!
//! ```json
//! { "england-and-wales": { "events": [
//!     { "date": "2024-12-25", "title": "Christmas Day", "notes": "", "bunting": true }
//! ] } }
//! ```
//!
//! keyed by division.  Ingestion is lenient: entries with an
//! unparsable date are dropped, blank titles get a placeholder, and a
//! payload that does not deserialize at all yields an empty list.  The
//! calculators downstream treat an empty list as "data unavailable", never
//! as zero holidays.

use lv_time::{Date, LeaveYearConfig};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The division key used by default when ingesting the national dataset.
pub const DEFAULT_DIVISION: &str = "england-and-wales";

/// Fallback title for events published without one.
const UNTITLED: &str = "Bank holiday";

/// A single dated bank-holiday event.  Immutable once ingested; the
/// collection is replaced as a whole on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHolidayEvent {
    /// Calendar date of the holiday.
    pub date: Date,
    /// Display title, e.g. `"Boxing Day"`.
    pub title: String,
    /// Free-text notes, e.g. `"Substitute day"`.  May be empty.
    pub notes: String,
    /// Whether the source marks the day as a bunting day.
    pub bunting: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawDataset(BTreeMap<String, RawDivision>);

#[derive(Debug, Default, Deserialize)]
struct RawDivision {
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(default)]
    date: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    bunting: bool,
}

/// Parse one division's events out of the raw JSON payload.
///
/// Malformed entries are dropped rather than failing the whole ingest, a
/// missing division or undeserializable payload yields an empty list, and
/// the result is de-duplicated (by date and title) and sorted ascending by
/// date.
pub fn parse_division(payload: &str, division: &str) -> Vec<BankHolidayEvent> {
    let raw: RawDataset = serde_json::from_str(payload).unwrap_or_default();
    let Some(div) = raw.0.get(division) else {
        return Vec::new();
    };
    let mut events: Vec<BankHolidayEvent> = div
        .events
        .iter()
        .filter_map(|e| {
            let date = Date::parse_iso(&e.date).ok()?;
            let title = e.title.trim();
            Some(BankHolidayEvent {
                date,
                title: if title.is_empty() { UNTITLED.to_owned() } else { title.to_owned() },
                notes: e.notes.trim().to_owned(),
                bunting: e.bunting,
            })
        })
        .collect();
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
    events.dedup_by(|a, b| a.date == b.date && a.title == b.title);
    events
}

/// Group events by the calendar year in which their leave year starts.
///
/// Events whose leave year cannot be resolved (dates at the very edge of
/// the supported range) are skipped.
pub fn group_by_start_year(
    events: &[BankHolidayEvent],
    config: &LeaveYearConfig,
) -> BTreeMap<i32, Vec<BankHolidayEvent>> {
    let mut grouped: BTreeMap<i32, Vec<BankHolidayEvent>> = BTreeMap::new();
    for event in events {
        if let Ok(year) = config.start_year_of(event.date) {
            grouped.entry(year).or_default().push(event.clone());
        }
    }
    grouped
}
