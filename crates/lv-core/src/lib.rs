//! # lv-core
//!
//! Core error definitions and numeric helpers shared across the
//! leavecalc-rs workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ────────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `missing!` macros.
pub mod errors;

/// Two-decimal rounding and day/hour display formatting.
pub mod rounding;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A quantity of leave expressed in days (may be fractional: half days,
/// pro-rated values).
pub type Days = f64;

/// A quantity of working time expressed in hours.
pub type Hours = f64;

/// A monthly accrual rate in days per month.
pub type Rate = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rounding::{format_days, format_hours, round2};
