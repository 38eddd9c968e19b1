//! Months of the year.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 = January).
const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 = January).
const MONTH_START_DOY: [u16; 12] = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// A month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Creates a month from its number (1 = January).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is outside 1..=12.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&number) {
            return Err(CalendarError::InvalidMonth { month: number });
        }
        Ok(Self::ALL[usize::from(number - 1)])
    }

    /// Returns the month number (1 = January).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the number of days in this month.
    pub fn length(self, leap_year: bool) -> u8 {
        match self {
            Month::February if leap_year => 29,
            _ => DAYS_PER_MONTH[self.index()],
        }
    }

    /// Returns the day-of-year (1-based) of the first day of this month.
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        let start = MONTH_START_DOY[self.index()];
        if leap_year && self > Month::February {
            start + 1
        } else {
            start
        }
    }

    /// Returns the following month, wrapping December to January.
    pub fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % 12]
    }

    /// Returns the preceding month, wrapping January to December.
    pub fn pred(self) -> Self {
        Self::ALL[(self.index() + 11) % 12]
    }

    /// Returns the English name of the month.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Accepts full English names or their three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| {
                let name = m.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| CalendarError::UnknownName {
                kind: "month",
                name: s.to_string(),
            })
    }
}
