//! Work schedules and hours-per-day derivation.
//!
//! Three schedules are supported.  The standard week spreads the weekly
//! hours over 5 days; the compressed schedules work the same weekly hours
//! over 4 days per week or 9 days per fortnight.  Each schedule's
//! hours-per-working-day is derivable from the weekly hours and
//! independently overridable.

use lv_core::{round2, Hours};

/// Weekly hours used when the configured value is missing or unusable.
pub const DEFAULT_WEEKLY_HOURS: Hours = 37.0;

/// A working pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkSchedule {
    /// Five working days per week.
    StandardWeek,
    /// Four longer working days per week.
    FourDayWeek,
    /// Nine working days per fortnight.
    NineDayFortnight,
}

impl WorkSchedule {
    /// Display name of the schedule.
    pub fn name(&self) -> &'static str {
        match self {
            WorkSchedule::StandardWeek => "Standard 5-day week",
            WorkSchedule::FourDayWeek => "4-day week",
            WorkSchedule::NineDayFortnight => "9-day fortnight",
        }
    }

    /// Whether allowances on this schedule are also expressed in
    /// compressed (longer) days.
    pub fn is_compressed(&self) -> bool {
        !matches!(self, WorkSchedule::StandardWeek)
    }
}

impl std::fmt::Display for WorkSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configured weekly hours plus optional per-schedule day-length
/// overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursSettings {
    /// Contracted hours per week.
    pub weekly_hours: Hours,
    /// Override for the standard-week day length.
    pub standard_day_override: Option<Hours>,
    /// Override for the 4-day-week day length.
    pub four_day_override: Option<Hours>,
    /// Override for the 9-day-fortnight day length.
    pub nine_day_override: Option<Hours>,
}

impl Default for HoursSettings {
    fn default() -> Self {
        HoursSettings {
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            standard_day_override: None,
            four_day_override: None,
            nine_day_override: None,
        }
    }
}

impl HoursSettings {
    /// Settings with the given weekly hours and no overrides.
    pub fn with_weekly_hours(weekly_hours: Hours) -> Self {
        HoursSettings {
            weekly_hours,
            ..Default::default()
        }
    }

    /// The weekly hours, falling back to [`DEFAULT_WEEKLY_HOURS`] when
    /// non-positive or non-finite.
    pub fn effective_weekly_hours(&self) -> Hours {
        if self.weekly_hours.is_finite() && self.weekly_hours > 0.0 {
            self.weekly_hours
        } else {
            DEFAULT_WEEKLY_HOURS
        }
    }

    /// Hours per working day for a schedule: the override when one is
    /// set and usable, otherwise derived from the weekly hours
    /// (`weekly/5`, `weekly/4`, `weekly*2/9`, rounded to 2 decimals).
    pub fn day_hours(&self, schedule: WorkSchedule) -> Hours {
        let override_value = match schedule {
            WorkSchedule::StandardWeek => self.standard_day_override,
            WorkSchedule::FourDayWeek => self.four_day_override,
            WorkSchedule::NineDayFortnight => self.nine_day_override,
        };
        match override_value {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => self.derived_day_hours(schedule),
        }
    }

    /// Hours per working day derived from the weekly hours, ignoring
    /// overrides.
    pub fn derived_day_hours(&self, schedule: WorkSchedule) -> Hours {
        let weekly = self.effective_weekly_hours();
        match schedule {
            WorkSchedule::StandardWeek => round2(weekly / 5.0),
            WorkSchedule::FourDayWeek => round2(weekly / 4.0),
            WorkSchedule::NineDayFortnight => round2(weekly * 2.0 / 9.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derivations_from_default_week() {
        let hours = HoursSettings::default();
        assert_relative_eq!(hours.day_hours(WorkSchedule::StandardWeek), 7.4);
        assert_relative_eq!(hours.day_hours(WorkSchedule::FourDayWeek), 9.25);
        assert_relative_eq!(hours.day_hours(WorkSchedule::NineDayFortnight), 8.22);
    }

    #[test]
    fn unusable_weekly_hours_fall_back() {
        for weekly in [0.0, -5.0, f64::NAN] {
            let hours = HoursSettings::with_weekly_hours(weekly);
            assert_relative_eq!(hours.effective_weekly_hours(), DEFAULT_WEEKLY_HOURS);
            assert_relative_eq!(hours.day_hours(WorkSchedule::StandardWeek), 7.4);
        }
    }

    #[test]
    fn overrides_win_when_usable() {
        let hours = HoursSettings {
            four_day_override: Some(9.5),
            nine_day_override: Some(0.0), // unusable, ignored
            ..Default::default()
        };
        assert_relative_eq!(hours.day_hours(WorkSchedule::FourDayWeek), 9.5);
        assert_relative_eq!(hours.day_hours(WorkSchedule::NineDayFortnight), 8.22);
    }

    #[test]
    fn compressed_flag() {
        assert!(!WorkSchedule::StandardWeek.is_compressed());
        assert!(WorkSchedule::FourDayWeek.is_compressed());
        assert!(WorkSchedule::NineDayFortnight.is_compressed());
    }
}
