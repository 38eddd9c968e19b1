//! Calendar field values of a date-time.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::month::Month;

/// A calendar era. There is no year zero: 1 BC is followed by 1 AD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Era {
    /// Before Christ; years count down toward 1 BC.
    BC,
    /// Anno Domini.
    AD,
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Era::BC => "BC",
            Era::AD => "AD",
        })
    }
}

/// The calendar fields of a local date-time.
///
/// Years are signed without zero: `-1` is 1 BC. Values are not validated
/// until they are turned into an [`Instant`](crate::Instant) by a
/// [`Chronology`](crate::Chronology), since the valid range of a day depends
/// on the calendar in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateFields {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl PartialOrd for DateFields {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateFields {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl DateFields {
    /// Creates fields for midnight at the start of the given date.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Sets the time of day.
    pub fn with_time(mut self, hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self.millisecond = millisecond;
        self
    }

    /// Returns the signed year (`-1` is 1 BC).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the era of the year.
    pub fn era(self) -> Era {
        if self.year < 0 { Era::BC } else { Era::AD }
    }

    /// Returns the year counted within its era (always positive for valid
    /// years).
    pub fn year_of_era(self) -> u32 {
        self.year.unsigned_abs()
    }

    /// Returns the month number (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the month as a [`Month`].
    pub fn month_of_year(self) -> Result<Month, CalendarError> {
        Month::from_number(self.month)
    }

    /// Returns the day of month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the millisecond (0..=999).
    pub fn millisecond(self) -> u16 {
        self.millisecond
    }

    /// Returns `(year, month, day)`.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Milliseconds elapsed since midnight.
    pub(crate) fn millis_of_day(self) -> i64 {
        ((i64::from(self.hour) * 60 + i64::from(self.minute)) * 60 + i64::from(self.second))
            * 1_000
            + i64::from(self.millisecond)
    }

    fn key(self) -> (i32, u8, u8, i64) {
        (self.year, self.month, self.day, self.millis_of_day())
    }
}

impl fmt::Display for DateFields {
    /// `YYYY-MM-DDTHH:MM:SS.mmm`, with a ` BC` suffix for years before 1 AD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year_of_era(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond
        )?;
        if self.era() == Era::BC {
            f.write_str(" BC")?;
        }
        Ok(())
    }
}

impl FromStr for DateFields {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, optionally followed by `THH:MM`, `THH:MM:SS` or
    /// `THH:MM:SS.mmm` (a space may replace the `T`), optionally followed by
    /// ` BC`. Field ranges are checked later by the chronology.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| CalendarError::Parse {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let text = s.trim();
        let (text, bc) = match text
            .strip_suffix(" BC")
            .or_else(|| text.strip_suffix(" bc"))
        {
            Some(rest) => (rest.trim_end(), true),
            None => (text, false),
        };
        let (date, time) = match text.split_once(|c| c == 'T' || c == ' ') {
            Some((date, time)) => (date, Some(time)),
            None => (text, None),
        };

        let parts: Vec<&str> = date.split('-').collect();
        let [year, month, day] = parts[..] else {
            return Err(fail("expected a date as YYYY-MM-DD"));
        };
        let year: i32 = digits(year).ok_or_else(|| fail("year is not a number"))?;
        if year == 0 {
            return Err(fail("year must be at least 1"));
        }
        let month = digits(month).ok_or_else(|| fail("month is not a number"))?;
        let day = digits(day).ok_or_else(|| fail("day is not a number"))?;
        let year = if bc { -year } else { year };
        let fields = Self::new(year, month, day);

        let Some(time) = time else {
            return Ok(fields);
        };
        let (clock, fraction) = match time.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (time, None),
        };
        let parts: Vec<&str> = clock.split(':').collect();
        let (hour, minute, second) = match parts[..] {
            [h, m] => (h, m, None),
            [h, m, sec] => (h, m, Some(sec)),
            _ => return Err(fail("expected a time as HH:MM[:SS[.mmm]]")),
        };
        let hour = digits(hour).ok_or_else(|| fail("hour is not a number"))?;
        let minute = digits(minute).ok_or_else(|| fail("minute is not a number"))?;
        let second = match second {
            Some(sec) => digits(sec).ok_or_else(|| fail("second is not a number"))?,
            None => 0,
        };
        let millisecond = match fraction {
            None => 0,
            Some(_) if parts.len() == 2 => return Err(fail("fraction requires seconds")),
            Some(f) if f.is_empty() || f.len() > 3 => {
                return Err(fail("fraction must have 1 to 3 digits"));
            }
            Some(f) => {
                let value: u16 = digits(f).ok_or_else(|| fail("fraction is not a number"))?;
                // scale "5" to 500 and "05" to 50
                value * 10u16.pow(3 - f.len() as u32)
            }
        };
        Ok(fields.with_time(hour, minute, second, millisecond))
    }
}

/// Parses a non-empty run of ASCII digits.
fn digits<T: FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
