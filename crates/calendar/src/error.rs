//! Error types for the tempora-calendar crate.

use crate::field::{DateField, DateUnit};

/// Error type for all fallible operations in the tempora-calendar crate.
///
/// Every variant except [`CalendarError::RoundingNecessary`] and
/// [`CalendarError::InexactDivision`] reports an invalid argument. Those two
/// report that an exact result was requested but the value is not aligned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year is zero or otherwise unusable.
    ///
    /// Years are counted ..., 2 BC (`-2`), 1 BC (`-1`), 1 AD (`1`), ...
    #[error("invalid year: {year} (there is no year zero)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a time-of-day component is out of range.
    #[error("invalid {field}: {value} (max {max})")]
    InvalidTime {
        /// The time field that is out of range.
        field: DateField,
        /// The value that was provided.
        value: u16,
        /// The largest accepted value.
        max: u16,
    },

    /// Returned when a calendar date was skipped by the Julian to Gregorian
    /// cutover.
    #[error("date {year}-{month:02}-{day:02} does not exist: skipped by the gregorian cutover")]
    NonexistentDate {
        /// Signed year of the skipped date.
        year: i32,
        /// Month of the skipped date.
        month: u8,
        /// Day of the skipped date.
        day: u8,
    },

    /// Returned when a cutover would make the last Julian days reuse date
    /// labels that follow the cutover.
    #[error("invalid gregorian cutover {year}-{month:02}-{day:02}: julian dates before it would repeat")]
    InvalidCutover {
        /// Signed year of the cutover.
        year: i32,
        /// Month of the cutover.
        month: u8,
        /// Day of the cutover.
        day: u8,
    },

    /// Returned when a UTC offset is outside ±18 hours.
    #[error("invalid utc offset: {minutes} minutes (must be within ±1080)")]
    InvalidOffset {
        /// The offset that was provided, in minutes.
        minutes: i32,
    },

    /// Returned when a calendar unit without a fixed length is used where
    /// one is required.
    #[error("unit {unit} has no fixed length")]
    VariableLengthUnit {
        /// The offending unit.
        unit: DateUnit,
    },

    /// Returned when exact rounding was requested for an unaligned instant.
    #[error("rounding necessary: instant is not aligned to a {field} boundary")]
    RoundingNecessary {
        /// The field the instant was rounded to.
        field: DateField,
    },

    /// Returned when exact division was requested for an inexact quotient.
    #[error("rounding necessary: {numerator} is not divisible by {denominator}")]
    InexactDivision {
        /// The dividend.
        numerator: i64,
        /// The divisor.
        denominator: i64,
    },

    /// Returned when dividing by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Returned when a computation leaves the representable range.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },

    /// Returned when text cannot be parsed as a date-time.
    #[error("failed to parse {input:?}: {reason}")]
    Parse {
        /// The text that was provided.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Returned when a name does not match any variant of an enumeration.
    #[error("unknown {kind}: {name:?}")]
    UnknownName {
        /// The enumeration being parsed (e.g. "rounding mode").
        kind: &'static str,
        /// The name that was provided.
        name: String,
    },
}
