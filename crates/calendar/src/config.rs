//! Configuration for building a [`Chronology`](crate::Chronology).

use crate::civil;
use crate::error::CalendarError;
use crate::month::Month;

/// Largest accepted UTC offset, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Day number of Gregorian 1582-10-15.
pub(crate) const HISTORICAL_CUTOVER_DAY: i64 = -141_427;

/// Where the calendar switches from Julian to Gregorian reckoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cutover {
    /// Gregorian rules for all dates.
    ProlepticGregorian,
    /// Julian rules for all dates.
    ProlepticJulian,
    /// First day (as a Gregorian date) on which Gregorian rules apply.
    At {
        /// Signed year (no year zero).
        year: i32,
        /// Month (1..=12).
        month: u8,
        /// Day of month.
        day: u8,
    },
}

impl Cutover {
    /// The historical cutover: Julian 1582-10-04 is followed by Gregorian
    /// 1582-10-15.
    pub const HISTORICAL: Cutover = Cutover::At {
        year: 1582,
        month: 10,
        day: 15,
    };

    /// Day number (days since 1970-01-01) of the first Gregorian day.
    pub(crate) fn epoch_day(self) -> Result<i64, CalendarError> {
        match self {
            Cutover::ProlepticGregorian => Ok(i64::MIN),
            Cutover::ProlepticJulian => Ok(i64::MAX),
            Cutover::At { year, month, day } => {
                let astro = civil::to_astronomical(year).ok_or(CalendarError::InvalidYear {
                    year: i64::from(year),
                })?;
                let max_day = Month::from_number(month)?.length(civil::is_gregorian_leap(astro));
                if day == 0 || day > max_day {
                    return Err(CalendarError::InvalidDay {
                        day,
                        month,
                        max_day,
                    });
                }
                let first = civil::gregorian_to_days(astro, month, day);
                // before 200-03-01 the julian calendar runs ahead, so the
                // days before the cutover would carry its label again
                if civil::julian_to_days(astro, month, day) < first {
                    return Err(CalendarError::InvalidCutover { year, month, day });
                }
                Ok(first)
            }
        }
    }
}

/// Configuration for a [`Chronology`](crate::Chronology).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use tempora_calendar::{ChronologyConfig, Cutover};
///
/// let config = ChronologyConfig::new()
///     .with_offset_minutes(60)
///     .with_gregorian_cutover(1752, 9, 14);
/// assert!(config.validate().is_ok());
/// assert_eq!(
///     config.cutover(),
///     Cutover::At { year: 1752, month: 9, day: 14 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronologyConfig {
    offset_minutes: i32,
    cutover: Cutover,
}

impl ChronologyConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `offset_minutes = 0` (UTC), `cutover = 1582-10-15`.
    pub fn new() -> Self {
        Self {
            offset_minutes: 0,
            cutover: Cutover::HISTORICAL,
        }
    }

    /// Sets the fixed offset of local time from UTC, in minutes.
    pub fn with_offset_minutes(mut self, minutes: i32) -> Self {
        self.offset_minutes = minutes;
        self
    }

    /// Sets the Julian to Gregorian cutover.
    pub fn with_cutover(mut self, cutover: Cutover) -> Self {
        self.cutover = cutover;
        self
    }

    /// Sets the first Gregorian day of the cutover.
    pub fn with_gregorian_cutover(self, year: i32, month: u8, day: u8) -> Self {
        self.with_cutover(Cutover::At { year, month, day })
    }

    /// Uses Gregorian rules for all dates.
    pub fn pure_gregorian(self) -> Self {
        self.with_cutover(Cutover::ProlepticGregorian)
    }

    /// Uses Julian rules for all dates.
    pub fn pure_julian(self) -> Self {
        self.with_cutover(Cutover::ProlepticJulian)
    }

    // --- Accessors ---

    /// Returns the UTC offset in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Returns the cutover.
    pub fn cutover(&self) -> Cutover {
        self.cutover
    }

    /// Validates this configuration.
    ///
    /// Checks that the offset lies within ±18 hours and that the cutover
    /// date is a valid Gregorian date.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&self.offset_minutes) {
            return Err(CalendarError::InvalidOffset {
                minutes: self.offset_minutes,
            });
        }
        self.cutover.epoch_day()?;
        Ok(())
    }
}

impl Default for ChronologyConfig {
    fn default() -> Self {
        Self::new()
    }
}
