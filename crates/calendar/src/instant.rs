//! Points on the time line.

use std::fmt;

use crate::chronology::Chronology;
use crate::duration::Duration;
use crate::error::CalendarError;

/// A point in time, stored as milliseconds since 1970-01-01T00:00:00.000 UTC.
///
/// An instant carries no calendar; use a [`Chronology`] to read or build it
/// from calendar fields. `Display` renders it in UTC with the default
/// chronology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// 1970-01-01T00:00:00.000 UTC.
    pub const EPOCH: Instant = Instant { millis: 0 };
    /// Earliest representable instant.
    pub const MIN: Instant = Instant { millis: i64::MIN };
    /// Latest representable instant.
    pub const MAX: Instant = Instant { millis: i64::MAX };

    /// Creates an instant from milliseconds since the epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Returns milliseconds since the epoch.
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Returns this instant moved forward by `duration`.
    pub fn checked_add(self, duration: Duration) -> Result<Self, CalendarError> {
        self.millis
            .checked_add(duration.as_millis())
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "instant + duration",
            })
    }

    /// Returns this instant moved back by `duration`.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, CalendarError> {
        self.millis
            .checked_sub(duration.as_millis())
            .map(Self::from_millis)
            .ok_or(CalendarError::Overflow {
                operation: "instant - duration",
            })
    }

    /// Returns the signed duration from `earlier` to this instant.
    pub fn duration_since(self, earlier: Instant) -> Result<Duration, CalendarError> {
        Duration::between(earlier, self)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Chronology::utc().format(*self))
    }
}
