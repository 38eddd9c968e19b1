//! Calendar-independent elapsed time.

use std::fmt;

use crate::civil::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::error::CalendarError;
use crate::field::DateUnit;
use crate::instant::Instant;
use crate::rounding::RoundingMode;

/// A signed amount of elapsed time with millisecond precision.
///
/// Unlike calendar arithmetic, a duration has no notion of months or years:
/// only units with a fixed length in milliseconds can be converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// The empty duration.
    pub const ZERO: Duration = Duration { millis: 0 };

    /// Creates a duration from milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Creates a duration of `amount` fixed-length units.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::VariableLengthUnit`] for `Years` and
    /// `Months`, and [`CalendarError::Overflow`] if the result does not fit.
    pub fn of(amount: i64, unit: DateUnit) -> Result<Self, CalendarError> {
        let unit_millis = fixed(unit)?;
        amount
            .checked_mul(unit_millis)
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "duration of units",
            })
    }

    /// Returns the signed duration from `start` to `end`.
    pub fn between(start: Instant, end: Instant) -> Result<Self, CalendarError> {
        end.as_millis()
            .checked_sub(start.as_millis())
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "duration between",
            })
    }

    /// Returns the length in milliseconds.
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Converts to a whole number of `unit`s, rounding with `mode`.
    pub fn to_units(self, unit: DateUnit, mode: RoundingMode) -> Result<i64, CalendarError> {
        mode.divide(self.millis, fixed(unit)?)
    }

    /// Converts to a fractional number of `unit`s.
    pub fn as_fractional(self, unit: DateUnit) -> Result<f64, CalendarError> {
        Ok(self.millis as f64 / fixed(unit)? as f64)
    }

    /// Returns `self + other`.
    pub fn checked_add(self, other: Duration) -> Result<Self, CalendarError> {
        self.millis
            .checked_add(other.millis)
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "duration + duration",
            })
    }

    /// Returns `self - other`.
    pub fn checked_sub(self, other: Duration) -> Result<Self, CalendarError> {
        self.millis
            .checked_sub(other.millis)
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "duration - duration",
            })
    }

    /// Returns the duration with its sign flipped.
    pub fn negated(self) -> Result<Self, CalendarError> {
        self.millis
            .checked_neg()
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "negate duration",
            })
    }

    /// Returns the absolute value of the duration.
    pub fn abs(self) -> Result<Self, CalendarError> {
        if self.is_negative() {
            self.negated()
        } else {
            Ok(self)
        }
    }

    /// Returns `true` if the duration is below zero.
    pub fn is_negative(self) -> bool {
        self.millis < 0
    }

    /// Returns `true` if the duration is zero.
    pub fn is_zero(self) -> bool {
        self.millis == 0
    }
}

fn fixed(unit: DateUnit) -> Result<i64, CalendarError> {
    unit.fixed_millis()
        .ok_or(CalendarError::VariableLengthUnit { unit })
}

impl fmt::Display for Duration {
    /// ISO 8601 form using days as the largest unit, e.g. `P1DT2H3M4.005S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.millis == 0 {
            return f.write_str("PT0S");
        }
        if self.millis < 0 {
            f.write_str("-")?;
        }
        let total = self.millis.unsigned_abs();
        let days = total / MILLIS_PER_DAY as u64;
        let hours = total % MILLIS_PER_DAY as u64 / MILLIS_PER_HOUR as u64;
        let minutes = total % MILLIS_PER_HOUR as u64 / MILLIS_PER_MINUTE as u64;
        let seconds = total % MILLIS_PER_MINUTE as u64 / MILLIS_PER_SECOND as u64;
        let millis = total % MILLIS_PER_SECOND as u64;

        f.write_str("P")?;
        if days > 0 {
            write!(f, "{days}D")?;
        }
        if hours == 0 && minutes == 0 && seconds == 0 && millis == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if hours > 0 {
            write!(f, "{hours}H")?;
        }
        if minutes > 0 {
            write!(f, "{minutes}M")?;
        }
        match (seconds, millis) {
            (0, 0) => Ok(()),
            (s, 0) => write!(f, "{s}S"),
            (s, ms) => write!(f, "{s}.{ms:03}S"),
        }
    }
}
