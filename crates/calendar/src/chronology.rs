//! The calendar engine.
//!
//! A [`Chronology`] reads instants as local calendar fields and builds
//! instants from them, using the Julian calendar before its cutover and the
//! Gregorian calendar from the cutover on. All arithmetic on months and years
//! goes through the fields; all arithmetic on fixed-length units goes through
//! the millisecond count.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::civil::{
    self, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
use crate::config::{ChronologyConfig, HISTORICAL_CUTOVER_DAY};
use crate::date::DateFields;
use crate::day::Day;
use crate::duration::Duration;
use crate::error::CalendarError;
use crate::field::{DateField, DateUnit};
use crate::instant::Instant;
use crate::month::Month;
use crate::rounding::RoundingMode;

/// A hybrid Julian/Gregorian calendar at a fixed UTC offset.
///
/// # Example
///
/// ```
/// use tempora_calendar::{Chronology, DateUnit};
///
/// let chrono = Chronology::utc();
/// let a = chrono.new_date(2012, 2, 28).unwrap();
/// let b = chrono.new_date(2012, 3, 1).unwrap();
/// assert_eq!(chrono.between(a, b, DateUnit::Days).unwrap(), 2);
/// assert_eq!(chrono.between(b, a, DateUnit::Days).unwrap(), -2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chronology {
    offset_millis: i64,
    /// Day number of the first Gregorian day; `i64::MIN` or `i64::MAX` for
    /// the proleptic calendars.
    cutover_day: i64,
}

impl Chronology {
    /// Builds a chronology from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`ChronologyConfig::validate`].
    pub fn new(config: ChronologyConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        let cutover_day = config.cutover().epoch_day()?;
        debug!(
            offset_minutes = config.offset_minutes(),
            cutover = ?config.cutover(),
            "chronology built"
        );
        Ok(Self {
            offset_millis: i64::from(config.offset_minutes()) * MILLIS_PER_MINUTE,
            cutover_day,
        })
    }

    /// The default chronology: UTC with the 1582-10-15 cutover.
    pub fn utc() -> Self {
        Self {
            offset_millis: 0,
            cutover_day: HISTORICAL_CUTOVER_DAY,
        }
    }

    /// Returns the UTC offset in minutes.
    pub fn offset_minutes(&self) -> i32 {
        // validated to lie within ±1080 minutes
        (self.offset_millis / MILLIS_PER_MINUTE) as i32
    }

    /// Returns local midnight of the first Gregorian day, or `None` for a
    /// proleptic calendar.
    pub fn gregorian_cutover(&self) -> Option<Instant> {
        if self.cutover_day == i64::MIN || self.cutover_day == i64::MAX {
            return None;
        }
        self.to_instant(self.cutover_day, 0).ok()
    }

    // --- Field conversion ---

    /// Returns local midnight at the start of the given date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is zero, the month or day is out
    /// of range, or the date was skipped by the cutover.
    pub fn new_date(&self, year: i32, month: u8, day: u8) -> Result<Instant, CalendarError> {
        self.from_fields(DateFields::new(year, month, day))
    }

    /// Returns the instant of the given local date and time.
    #[allow(clippy::too_many_arguments)]
    pub fn new_date_time(
        &self,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Instant, CalendarError> {
        self.from_fields(DateFields::new(year, month, day).with_time(hour, minute, second, millisecond))
    }

    /// Builds an instant from calendar fields, validating every field.
    pub fn from_fields(&self, fields: DateFields) -> Result<Instant, CalendarError> {
        let year = astronomical(fields.year())?;
        let month = fields.month_of_year()?;
        let max_day = self.month_length(year, month);
        if fields.day() == 0 || fields.day() > max_day {
            return Err(CalendarError::InvalidDay {
                day: fields.day(),
                month: fields.month(),
                max_day,
            });
        }
        check_time(fields)?;
        let (day, in_gap) = self.day_from_civil(year, fields.month(), fields.day());
        if in_gap {
            return Err(CalendarError::NonexistentDate {
                year: fields.year(),
                month: fields.month(),
                day: fields.day(),
            });
        }
        self.to_instant(day, fields.millis_of_day())
    }

    /// Reads the local calendar fields of an instant.
    pub fn fields(&self, instant: Instant) -> DateFields {
        let (day, millis) = self.local(instant);
        let (year, month, dom) = self.civil_from_day(day);
        let year = signed_year(year);
        // millis is in 0..86_400_000, so every component fits its type
        DateFields::new(year, month, dom).with_time(
            (millis / MILLIS_PER_HOUR) as u8,
            (millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u8,
            (millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u8,
            (millis % MILLIS_PER_SECOND) as u16,
        )
    }

    /// Returns the local day of the week.
    pub fn day_of_week(&self, instant: Instant) -> Day {
        Day::from_epoch_day(self.local(instant).0)
    }

    /// Returns the local day of the year (1 = January 1).
    pub fn day_of_year(&self, instant: Instant) -> u16 {
        let (day, _) = self.local(instant);
        let (year, _, _) = self.civil_from_day(day);
        let (jan1, _) = self.day_from_civil(year, 1, 1);
        // at most 366 days into the year
        (day - jan1 + 1) as u16
    }

    /// Returns `true` if February of `year` has 29 days.
    pub fn is_leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        Ok(self.days_in_month(year, 2)? == 29)
    }

    /// Returns the number of days in the month, ignoring any days removed by
    /// the cutover.
    pub fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        Ok(self.month_length(astronomical(year)?, Month::from_number(month)?))
    }

    /// Returns the number of days in the year, net of days removed by the
    /// cutover (355 for 1582 with the historical cutover).
    pub fn days_in_year(&self, year: i32) -> Result<u16, CalendarError> {
        let year = astronomical(year)?;
        let (start, _) = self.day_from_civil(year, 1, 1);
        let (end, _) = self.day_from_civil(year + 1, 1, 1);
        // a year holds at most 366 days
        Ok((end - start) as u16)
    }

    // --- Arithmetic ---

    /// Adds `amount` units to an instant.
    ///
    /// `Years` and `Months` move the calendar fields and clamp the day of
    /// month to the length of the target month, so January 31 plus one month
    /// is the last day of February. Fixed units move the millisecond count.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the result is not representable.
    pub fn add(&self, instant: Instant, amount: i64, unit: DateUnit) -> Result<Instant, CalendarError> {
        match unit {
            DateUnit::Years => {
                let months = amount.checked_mul(12).ok_or(CalendarError::Overflow {
                    operation: "add years",
                })?;
                self.add_months(instant, months)
            }
            DateUnit::Months => self.add_months(instant, amount),
            _ => instant.checked_add(Duration::of(amount, unit)?),
        }
    }

    /// Returns the signed number of whole units from `start` to `end`.
    ///
    /// For `start <= end` this is the largest `n` with
    /// `add(start, n, unit) <= end`; swapping the arguments negates the
    /// result.
    pub fn between(&self, start: Instant, end: Instant, unit: DateUnit) -> Result<i64, CalendarError> {
        if start > end {
            // the forward count is non-negative, so negation cannot overflow
            return Ok(-self.between(end, start, unit)?);
        }
        match unit.fixed_millis() {
            Some(len) => {
                let elapsed = i128::from(end.as_millis()) - i128::from(start.as_millis());
                i64::try_from(elapsed / i128::from(len)).map_err(|_| CalendarError::Overflow {
                    operation: "between",
                })
            }
            None => {
                let months = self.months_between(start, end)?;
                Ok(if unit == DateUnit::Years {
                    months / 12
                } else {
                    months
                })
            }
        }
    }

    // --- Truncation and rounding ---

    /// Snaps an instant back to the start of its containing `field` period
    /// in local time.
    pub fn truncate(&self, instant: Instant, field: DateField) -> Result<Instant, CalendarError> {
        let (day, millis) = self.local(instant);
        match field {
            DateField::Year | DateField::Month => {
                let (year, month, _) = self.civil_from_day(day);
                let month = if field == DateField::Year { 1 } else { month };
                self.resolve_lenient(year, month, 1, 0)
            }
            _ => {
                let len = sub_day_millis(field);
                self.to_instant(day, millis - millis % len)
            }
        }
    }

    /// Rounds an instant to a `field` boundary.
    ///
    /// The candidates are the start of the containing period and the start
    /// of the next one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::RoundingNecessary`] when `mode` is
    /// `Unnecessary` and the instant is not on a boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use tempora_calendar::{Chronology, DateField, RoundingMode};
    ///
    /// let chrono = Chronology::utc();
    /// let t = chrono.new_date_time(1973, 1, 22, 12, 30, 30, 500).unwrap();
    /// let up = chrono.round(t, DateField::Day, RoundingMode::Up).unwrap();
    /// assert_eq!(chrono.format(up), "1973-01-23T00:00:00.000");
    /// ```
    pub fn round(
        &self,
        instant: Instant,
        field: DateField,
        mode: RoundingMode,
    ) -> Result<Instant, CalendarError> {
        let lower = self.truncate(instant, field)?;
        if lower == instant {
            return Ok(instant);
        }
        // the position past `lower` is positive, so these never move up and
        // must not fail when the next boundary is out of range
        if matches!(mode, RoundingMode::Down | RoundingMode::Floor) {
            return Ok(lower);
        }
        let upper = self.add(lower, 1, field.unit())?;
        // both spans are shorter than a year
        let position = instant.as_millis() - lower.as_millis();
        let length = upper.as_millis() - lower.as_millis();
        let index = self.boundary_index(lower, field);
        let rounded = mode
            .resolve(index, position, length, false)
            .ok_or(CalendarError::RoundingNecessary { field })?;
        Ok(if rounded == index { lower } else { upper })
    }

    /// Compares two instants at the precision of `field`.
    pub fn compare(&self, a: Instant, b: Instant, field: DateField) -> Result<Ordering, CalendarError> {
        Ok(self.truncate(a, field)?.cmp(&self.truncate(b, field)?))
    }

    /// Returns `true` if both instants fall in the same `field` period.
    pub fn is_same(&self, a: Instant, b: Instant, field: DateField) -> Result<bool, CalendarError> {
        Ok(self.compare(a, b, field)? == Ordering::Equal)
    }

    // --- Text ---

    /// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmm` local time, with a
    /// ` BC` suffix before 1 AD.
    pub fn format(&self, instant: Instant) -> String {
        self.fields(instant).to_string()
    }

    /// Parses local date-time text accepted by [`DateFields`]' `FromStr`.
    pub fn parse(&self, text: &str) -> Result<Instant, CalendarError> {
        self.from_fields(text.parse()?)
    }

    // --- Internals ---

    /// Splits an instant into local day number and milliseconds of day.
    fn local(&self, instant: Instant) -> (i64, i64) {
        let local = i128::from(instant.as_millis()) + i128::from(self.offset_millis);
        let day = i128::from(MILLIS_PER_DAY);
        // |day number| < 2^37
        (local.div_euclid(day) as i64, local.rem_euclid(day) as i64)
    }

    fn to_instant(&self, day: i64, millis_of_day: i64) -> Result<Instant, CalendarError> {
        let utc = i128::from(day) * i128::from(MILLIS_PER_DAY) + i128::from(millis_of_day)
            - i128::from(self.offset_millis);
        i64::try_from(utc)
            .map(Instant::from_millis)
            .map_err(|_| CalendarError::Overflow {
                operation: "compose instant",
            })
    }

    fn civil_from_day(&self, day: i64) -> (i64, u8, u8) {
        if day >= self.cutover_day {
            civil::days_to_gregorian(day)
        } else {
            civil::days_to_julian(day)
        }
    }

    /// Day number of an astronomical date. The flag is set when the date was
    /// skipped by the cutover, in which case the Julian reading is returned.
    fn day_from_civil(&self, year: i64, month: u8, day: u8) -> (i64, bool) {
        let gregorian = civil::gregorian_to_days(year, month, day);
        if gregorian >= self.cutover_day {
            return (gregorian, false);
        }
        let julian = civil::julian_to_days(year, month, day);
        (julian, julian >= self.cutover_day)
    }

    /// Length of a month under the rules in force on its first day.
    fn month_length(&self, year: i64, month: Month) -> u8 {
        let julian = civil::julian_to_days(year, month.number(), 1) < self.cutover_day;
        let leap = if julian {
            civil::is_julian_leap(year)
        } else {
            civil::is_gregorian_leap(year)
        };
        month.length(leap)
    }

    /// Builds an instant from fields produced by arithmetic, reading dates
    /// skipped by the cutover in the Julian calendar.
    fn resolve_lenient(
        &self,
        year: i64,
        month: u8,
        day: u8,
        millis_of_day: i64,
    ) -> Result<Instant, CalendarError> {
        let (epoch_day, in_gap) = self.day_from_civil(year, month, day);
        if in_gap {
            debug!(year, month, day, "date skipped by the cutover, read as julian");
        }
        self.to_instant(epoch_day, millis_of_day)
    }

    fn add_months(&self, instant: Instant, months: i64) -> Result<Instant, CalendarError> {
        if months == 0 {
            return Ok(instant);
        }
        let overflow = CalendarError::Overflow {
            operation: "add months",
        };
        let (day, millis) = self.local(instant);
        let (year, month, dom) = self.civil_from_day(day);
        let total = (year * 12 + i64::from(month) - 1)
            .checked_add(months)
            .ok_or(overflow.clone())?;
        let target_year = total.div_euclid(12);
        if civil::from_astronomical(target_year).is_none() {
            return Err(overflow);
        }
        // rem_euclid(12) + 1 is in 1..=12
        let target_month = Month::from_number((total.rem_euclid(12) + 1) as u8)?;
        let dom = dom.min(self.month_length(target_year, target_month));
        self.resolve_lenient(target_year, target_month.number(), dom, millis)
    }

    /// Whole months from `start` to `end`, for `start <= end`.
    fn months_between(&self, start: Instant, end: Instant) -> Result<i64, CalendarError> {
        let (start_year, start_month, _) = self.civil_from_day(self.local(start).0);
        let (end_year, end_month, _) = self.civil_from_day(self.local(end).0);
        let mut months = (end_year * 12 + i64::from(end_month))
            - (start_year * 12 + i64::from(start_month));
        while months > 0 && self.add_months(start, months)? > end {
            trace!(months, "month count overshoots end, stepping back");
            months -= 1;
        }
        Ok(months)
    }

    /// Linear count of `field` periods since the epoch for a period start.
    fn boundary_index(&self, boundary: Instant, field: DateField) -> i64 {
        let (day, millis) = self.local(boundary);
        match field {
            DateField::Year => self.civil_from_day(day).0,
            DateField::Month => {
                let (year, month, _) = self.civil_from_day(day);
                year * 12 + i64::from(month) - 1
            }
            _ => {
                let len = sub_day_millis(field);
                day * (MILLIS_PER_DAY / len) + millis / len
            }
        }
    }
}

impl Default for Chronology {
    fn default() -> Self {
        Self::utc()
    }
}

fn astronomical(year: i32) -> Result<i64, CalendarError> {
    civil::to_astronomical(year).ok_or(CalendarError::InvalidYear {
        year: i64::from(year),
    })
}

/// Signed year of an astronomical year taken from an instant.
fn signed_year(year: i64) -> i32 {
    // instants span less than ±300 million years, so the clamp never applies
    civil::from_astronomical(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// Length of a field that divides the day evenly.
fn sub_day_millis(field: DateField) -> i64 {
    match field {
        DateField::Year | DateField::Month | DateField::Day => MILLIS_PER_DAY,
        DateField::Hour => MILLIS_PER_HOUR,
        DateField::Minute => MILLIS_PER_MINUTE,
        DateField::Second => MILLIS_PER_SECOND,
        DateField::Millisecond => 1,
    }
}

fn check_time(fields: DateFields) -> Result<(), CalendarError> {
    let limits = [
        (DateField::Hour, u16::from(fields.hour()), 23),
        (DateField::Minute, u16::from(fields.minute()), 59),
        (DateField::Second, u16::from(fields.second()), 59),
        (DateField::Millisecond, fields.millisecond(), 999),
    ];
    for (field, value, max) in limits {
        if value > max {
            return Err(CalendarError::InvalidTime { field, value, max });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrono() -> Chronology {
        Chronology::utc()
    }

    #[test]
    fn epoch_fields() {
        let f = chrono().fields(Instant::EPOCH);
        assert_eq!(f.ymd(), (1970, 1, 1));
        assert_eq!(f.hour(), 0);
    }

    #[test]
    fn new_date_roundtrip_leap_day() {
        let c = chrono();
        let t = c.new_date(2012, 2, 29).unwrap();
        assert_eq!(c.fields(t).ymd(), (2012, 2, 29));
    }

    #[test]
    fn new_date_rejects_bad_fields() {
        let c = chrono();
        assert_eq!(
            c.new_date(0, 1, 1).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
        assert_eq!(
            c.new_date(2013, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
        assert_eq!(
            c.new_date(2013, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            c.new_date_time(2013, 1, 1, 24, 0, 0, 0).unwrap_err(),
            CalendarError::InvalidTime {
                field: DateField::Hour,
                value: 24,
                max: 23,
            }
        );
    }

    #[test]
    fn between_days_across_leap_day() {
        let c = chrono();
        let a = c.new_date(2012, 2, 28).unwrap();
        let b = c.new_date(2012, 3, 1).unwrap();
        assert_eq!(c.between(a, b, DateUnit::Days).unwrap(), 2);
        assert_eq!(c.between(b, a, DateUnit::Days).unwrap(), -2);
    }

    #[test]
    fn between_days_across_era_boundary() {
        let c = chrono();
        let jan1 = c.new_date(1, 1, 1).unwrap();
        let before = c.add(jan1, -1, DateUnit::Days).unwrap();
        assert_eq!(c.fields(before).ymd(), (-1, 12, 31));
        assert_eq!(c.between(before, jan1, DateUnit::Days).unwrap(), 1);
    }

    #[test]
    fn month_clamping() {
        let c = chrono();
        let jan31 = c.new_date(2013, 1, 31).unwrap();
        let feb = c.add(jan31, 1, DateUnit::Months).unwrap();
        assert_eq!(c.fields(feb).ymd(), (2013, 2, 28));
    }

    #[test]
    fn round_example() {
        let c = chrono();
        let t = c.new_date_time(1973, 1, 22, 12, 30, 30, 500).unwrap();
        let up = c.round(t, DateField::Day, RoundingMode::Up).unwrap();
        let down = c.round(t, DateField::Day, RoundingMode::Down).unwrap();
        assert_eq!(up, c.new_date(1973, 1, 23).unwrap());
        assert_eq!(down, c.new_date(1973, 1, 22).unwrap());
    }

    #[test]
    fn round_unnecessary() {
        let c = chrono();
        let t = c.new_date_time(1973, 1, 22, 12, 0, 0, 0).unwrap();
        assert_eq!(
            c.round(t, DateField::Day, RoundingMode::Unnecessary).unwrap_err(),
            CalendarError::RoundingNecessary {
                field: DateField::Day
            }
        );
        assert_eq!(
            c.round(t, DateField::Hour, RoundingMode::Unnecessary).unwrap(),
            t
        );
    }

    #[test]
    fn offset_shifts_local_fields() {
        let c = Chronology::new(ChronologyConfig::new().with_offset_minutes(-300)).unwrap();
        let f = c.fields(Instant::EPOCH);
        assert_eq!(f.ymd(), (1969, 12, 31));
        assert_eq!(f.hour(), 19);
        assert_eq!(c.offset_minutes(), -300);
    }

    #[test]
    fn gregorian_cutover_instant() {
        let c = chrono();
        let cutover = c.gregorian_cutover().unwrap();
        assert_eq!(cutover.as_millis(), -12_219_292_800_000);
        let proleptic = Chronology::new(ChronologyConfig::new().pure_gregorian()).unwrap();
        assert_eq!(proleptic.gregorian_cutover(), None);
    }

    #[test]
    fn signed_year_skips_zero_and_clamps() {
        assert_eq!(signed_year(1970), 1970);
        assert_eq!(signed_year(0), -1);
        assert_eq!(signed_year(i64::MAX), i32::MAX);
        assert_eq!(signed_year(i64::MIN), i32::MIN);
    }

    #[test]
    fn extreme_instants_have_fields() {
        let c = chrono();
        let max = c.fields(Instant::MAX);
        let min = c.fields(Instant::MIN);
        assert!(max.year() > 292_000_000);
        assert!(min.year() < -292_000_000);
        assert_eq!(c.from_fields(max).unwrap(), Instant::MAX);
        assert_eq!(c.from_fields(min).unwrap(), Instant::MIN);
    }

    #[test]
    fn add_overflow() {
        let c = chrono();
        assert!(c.add(Instant::MAX, 1, DateUnit::Milliseconds).is_err());
        assert_eq!(
            c.add(Instant::EPOCH, i64::MAX, DateUnit::Years).unwrap_err(),
            CalendarError::Overflow {
                operation: "add years"
            }
        );
        assert_eq!(
            c.add(Instant::EPOCH, i64::MAX / 2, DateUnit::Months).unwrap_err(),
            CalendarError::Overflow {
                operation: "add months"
            }
        );
    }
}
