//! Calendar granularities: fields for truncation and rounding, units for
//! arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::civil::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::error::CalendarError;

/// A calendar field that an instant can be truncated or rounded to.
///
/// Weeks are not a field: snapping back to the start of a week can move an
/// instant into the previous month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateField {
    /// Calendar year.
    Year,
    /// Month of year.
    Month,
    /// Day of month.
    Day,
    /// Hour of day.
    Hour,
    /// Minute of hour.
    Minute,
    /// Second of minute.
    Second,
    /// Millisecond of second.
    Millisecond,
}

impl DateField {
    /// All fields from coarsest to finest.
    pub const ALL: [DateField; 7] = [
        DateField::Year,
        DateField::Month,
        DateField::Day,
        DateField::Hour,
        DateField::Minute,
        DateField::Second,
        DateField::Millisecond,
    ];

    /// Returns the unit that advances this field by one.
    pub fn unit(self) -> DateUnit {
        match self {
            DateField::Year => DateUnit::Years,
            DateField::Month => DateUnit::Months,
            DateField::Day => DateUnit::Days,
            DateField::Hour => DateUnit::Hours,
            DateField::Minute => DateUnit::Minutes,
            DateField::Second => DateUnit::Seconds,
            DateField::Millisecond => DateUnit::Milliseconds,
        }
    }

    fn name(self) -> &'static str {
        match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
            DateField::Hour => "hour",
            DateField::Minute => "minute",
            DateField::Second => "second",
            DateField::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateField {
    type Err = CalendarError;

    /// Accepts the singular or plural field name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit: DateUnit = s.parse().map_err(|_| CalendarError::UnknownName {
            kind: "date field",
            name: s.to_string(),
        })?;
        unit.field().ok_or_else(|| CalendarError::UnknownName {
            kind: "date field",
            name: s.to_string(),
        })
    }
}

/// A unit of calendar arithmetic used by `add` and `between`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateUnit {
    /// Calendar years (twelve months).
    Years,
    /// Calendar months; day of month is clamped when the target is shorter.
    Months,
    /// Seven days.
    Weeks,
    /// 86 400 000 milliseconds.
    Days,
    /// 3 600 000 milliseconds.
    Hours,
    /// 60 000 milliseconds.
    Minutes,
    /// 1 000 milliseconds.
    Seconds,
    /// One millisecond.
    Milliseconds,
}

impl DateUnit {
    /// All units from coarsest to finest.
    pub const ALL: [DateUnit; 8] = [
        DateUnit::Years,
        DateUnit::Months,
        DateUnit::Weeks,
        DateUnit::Days,
        DateUnit::Hours,
        DateUnit::Minutes,
        DateUnit::Seconds,
        DateUnit::Milliseconds,
    ];

    /// Returns the length of this unit in milliseconds, or `None` for
    /// `Years` and `Months` whose length depends on the calendar position.
    pub fn fixed_millis(self) -> Option<i64> {
        match self {
            DateUnit::Years | DateUnit::Months => None,
            DateUnit::Weeks => Some(7 * MILLIS_PER_DAY),
            DateUnit::Days => Some(MILLIS_PER_DAY),
            DateUnit::Hours => Some(MILLIS_PER_HOUR),
            DateUnit::Minutes => Some(MILLIS_PER_MINUTE),
            DateUnit::Seconds => Some(MILLIS_PER_SECOND),
            DateUnit::Milliseconds => Some(1),
        }
    }

    /// Returns the field this unit advances, if it has one.
    ///
    /// `Weeks` has no field counterpart.
    pub fn field(self) -> Option<DateField> {
        match self {
            DateUnit::Years => Some(DateField::Year),
            DateUnit::Months => Some(DateField::Month),
            DateUnit::Weeks => None,
            DateUnit::Days => Some(DateField::Day),
            DateUnit::Hours => Some(DateField::Hour),
            DateUnit::Minutes => Some(DateField::Minute),
            DateUnit::Seconds => Some(DateField::Second),
            DateUnit::Milliseconds => Some(DateField::Millisecond),
        }
    }

    fn name(self) -> &'static str {
        match self {
            DateUnit::Years => "years",
            DateUnit::Months => "months",
            DateUnit::Weeks => "weeks",
            DateUnit::Days => "days",
            DateUnit::Hours => "hours",
            DateUnit::Minutes => "minutes",
            DateUnit::Seconds => "seconds",
            DateUnit::Milliseconds => "milliseconds",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateUnit {
    type Err = CalendarError;

    /// Accepts singular or plural unit names and the abbreviations
    /// `y`, `mo`, `w`, `d`, `h`, `min`, `s`, `ms`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" | "years" | "y" => Ok(DateUnit::Years),
            "month" | "months" | "mo" => Ok(DateUnit::Months),
            "week" | "weeks" | "w" => Ok(DateUnit::Weeks),
            "day" | "days" | "d" => Ok(DateUnit::Days),
            "hour" | "hours" | "h" => Ok(DateUnit::Hours),
            "minute" | "minutes" | "min" => Ok(DateUnit::Minutes),
            "second" | "seconds" | "s" => Ok(DateUnit::Seconds),
            "millisecond" | "milliseconds" | "ms" => Ok(DateUnit::Milliseconds),
            _ => Err(CalendarError::UnknownName {
                kind: "date unit",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_unit_roundtrip() {
        for field in DateField::ALL {
            assert_eq!(field.unit().field(), Some(field));
        }
    }

    #[test]
    fn weeks_have_no_field() {
        assert_eq!(DateUnit::Weeks.field(), None);
    }

    #[test]
    fn fixed_millis() {
        assert_eq!(DateUnit::Years.fixed_millis(), None);
        assert_eq!(DateUnit::Months.fixed_millis(), None);
        assert_eq!(DateUnit::Weeks.fixed_millis(), Some(604_800_000));
        assert_eq!(DateUnit::Days.fixed_millis(), Some(86_400_000));
        assert_eq!(DateUnit::Hours.fixed_millis(), Some(3_600_000));
        assert_eq!(DateUnit::Minutes.fixed_millis(), Some(60_000));
        assert_eq!(DateUnit::Seconds.fixed_millis(), Some(1_000));
        assert_eq!(DateUnit::Milliseconds.fixed_millis(), Some(1));
    }

    #[test]
    fn parse_units() {
        assert_eq!("days".parse::<DateUnit>().unwrap(), DateUnit::Days);
        assert_eq!("Day".parse::<DateUnit>().unwrap(), DateUnit::Days);
        assert_eq!("MO".parse::<DateUnit>().unwrap(), DateUnit::Months);
        assert_eq!("ms".parse::<DateUnit>().unwrap(), DateUnit::Milliseconds);
        assert!("fortnight".parse::<DateUnit>().is_err());
    }

    #[test]
    fn parse_fields() {
        assert_eq!("year".parse::<DateField>().unwrap(), DateField::Year);
        assert_eq!("Seconds".parse::<DateField>().unwrap(), DateField::Second);
        assert_eq!(
            "week".parse::<DateField>().unwrap_err(),
            CalendarError::UnknownName {
                kind: "date field",
                name: "week".to_string(),
            }
        );
    }

    #[test]
    fn display_roundtrip() {
        for unit in DateUnit::ALL {
            assert_eq!(unit.to_string().parse::<DateUnit>().unwrap(), unit);
        }
        for field in DateField::ALL {
            assert_eq!(field.to_string().parse::<DateField>().unwrap(), field);
        }
    }
}
