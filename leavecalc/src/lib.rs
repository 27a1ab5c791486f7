//! # leavecalc
//!
//! A leave-year and entitlement calculation engine for annual-leave
//! planning: leave-year window resolution, remaining bank holidays,
//! allowance aggregation with pro-ration, accrual forecasting, and
//! leave-request previews.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lv-*` crates.
//!
//! Every calculation is a pure function of its arguments. The current
//! date is always an explicit parameter and the bank-holiday dataset is
//! always an already-fetched snapshot, so results are deterministic and
//! the engine never performs I/O.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! leavecalc = "0.1"
//! ```
//!
//! ```rust
//! use leavecalc::time::{Date, LeaveYearConfig};
//!
//! let config = LeaveYearConfig::default(); // 1 April, 365 days
//! let today = Date::from_ymd(2024, 10, 1).unwrap();
//! let range = config.range_containing(today).unwrap();
//! assert_eq!(range.start, Date::from_ymd(2024, 4, 1).unwrap());
//! assert_eq!(range.end, Date::from_ymd(2025, 3, 31).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, rounding, and error definitions.
pub use lv_core as core;

/// Dates, weekdays, months, and leave-year windows.
pub use lv_time as time;

/// Bank-holiday events, remaining-holiday windows, pattern matching.
pub use lv_holidays as holidays;

/// Allowances, accrual, and leave-request previews.
pub use lv_entitlement as entitlement;
