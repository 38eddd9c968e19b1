//! Days of the week.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A day of the week, Monday first (ISO 8601).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days, Monday through Sunday.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Creates a day from its ISO number (1 = Monday, 7 = Sunday).
    ///
    /// Returns `None` if `number` is outside 1..=7.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=7 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Returns the ISO day number (1 = Monday, 7 = Sunday).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Day of the week for a count of days since 1970-01-01 (a Thursday).
    pub(crate) fn from_epoch_day(days: i64) -> Self {
        // rem_euclid keeps the index in 0..7
        Self::ALL[(days + 3).rem_euclid(7) as usize]
    }

    /// Returns the day `n` days after this one (negative `n` goes back).
    pub fn plus(self, n: i64) -> Self {
        Self::ALL[(self as i64 + n.rem_euclid(7)).rem_euclid(7) as usize]
    }

    /// Returns the following day.
    pub fn succ(self) -> Self {
        self.plus(1)
    }

    /// Returns the preceding day.
    pub fn pred(self) -> Self {
        self.plus(-1)
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }

    /// Returns the English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = CalendarError;

    /// Accepts full English names or their three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| CalendarError::UnknownName {
                kind: "day",
                name: s.to_string(),
            })
    }
}
