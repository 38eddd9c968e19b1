//! Day-count algorithms for the proleptic Julian and Gregorian calendars.
//!
//! Years here are astronomical (1 BC is year 0, 2 BC is year -1) and day
//! numbers count from 1970-01-01 in the Gregorian calendar. Both directions
//! work on a year that starts on March 1 so the leap day falls at the end.

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Day number of Gregorian 0000-03-01, negated.
const GREGORIAN_SHIFT: i64 = 719_468;
/// Day number of Julian 0000-03-01, negated.
const JULIAN_SHIFT: i64 = 719_470;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Zero-based day within a March-based year.
fn march_day_of_year(month: u8, day: u8) -> i64 {
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    (153 * mp + 2) / 5 + i64::from(day) - 1
}

/// Inverse of [`march_day_of_year`].
fn month_day_from_march(doy: i64) -> (u8, u8) {
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    // month is 1..=12 and day is 1..=31 by construction
    (month as u8, day as u8)
}

pub(crate) fn gregorian_to_days(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + march_day_of_year(month, day);
    era * DAYS_PER_400_YEARS + doe - GREGORIAN_SHIFT
}

pub(crate) fn days_to_gregorian(days: i64) -> (i64, u8, u8) {
    let z = days + GREGORIAN_SHIFT;
    let era = z.div_euclid(DAYS_PER_400_YEARS);
    let doe = z - era * DAYS_PER_400_YEARS;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let (month, day) = month_day_from_march(doy);
    (yoe + era * 400 + i64::from(month <= 2), month, day)
}

pub(crate) fn julian_to_days(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let cycle = y.div_euclid(4);
    let yoc = y - cycle * 4;
    let doc = yoc * 365 + march_day_of_year(month, day);
    cycle * DAYS_PER_4_YEARS + doc - JULIAN_SHIFT
}

pub(crate) fn days_to_julian(days: i64) -> (i64, u8, u8) {
    let z = days + JULIAN_SHIFT;
    let cycle = z.div_euclid(DAYS_PER_4_YEARS);
    let doc = z - cycle * DAYS_PER_4_YEARS;
    // doc == 1460 is the leap day closing the fourth year
    let yoc = (doc - doc / 1_460) / 365;
    let doy = doc - 365 * yoc;
    let (month, day) = month_day_from_march(doy);
    (yoc + cycle * 4 + i64::from(month <= 2), month, day)
}

pub(crate) fn is_gregorian_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

pub(crate) fn is_julian_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0
}

/// Converts a signed year without zero (-1 = 1 BC) to an astronomical year.
pub(crate) fn to_astronomical(year: i32) -> Option<i64> {
    match year {
        0 => None,
        y if y < 0 => Some(i64::from(y) + 1),
        y => Some(i64::from(y)),
    }
}

/// Converts an astronomical year to a signed year without zero.
pub(crate) fn from_astronomical(year: i64) -> Option<i32> {
    let signed = if year <= 0 { year - 1 } else { year };
    i32::try_from(signed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(gregorian_to_days(1970, 1, 1), 0);
        assert_eq!(days_to_gregorian(0), (1970, 1, 1));
    }

    #[test]
    fn gregorian_cutover_day() {
        // 1582-10-15 is 12_219_292_800 seconds before the epoch.
        assert_eq!(gregorian_to_days(1582, 10, 15), -141_427);
    }

    #[test]
    fn julian_day_before_cutover() {
        assert_eq!(julian_to_days(1582, 10, 4), -141_428);
        assert_eq!(days_to_julian(-141_428), (1582, 10, 4));
    }

    #[test]
    fn calendars_agree_in_third_century() {
        // Julian and Gregorian share labels between 200-03-01 and 300-02-28.
        assert_eq!(gregorian_to_days(250, 1, 1), julian_to_days(250, 1, 1));
        assert_eq!(gregorian_to_days(299, 12, 31), julian_to_days(299, 12, 31));
    }

    #[test]
    fn gregorian_roundtrip_range() {
        for days in -800_000..-790_000 {
            let (y, m, d) = days_to_gregorian(days);
            assert_eq!(gregorian_to_days(y, m, d), days);
        }
        for days in -5_000..5_000 {
            let (y, m, d) = days_to_gregorian(days);
            assert_eq!(gregorian_to_days(y, m, d), days);
        }
    }

    #[test]
    fn julian_roundtrip_range() {
        for days in -800_000..-780_000 {
            let (y, m, d) = days_to_julian(days);
            assert_eq!(julian_to_days(y, m, d), days);
        }
    }

    #[test]
    fn julian_leap_day_in_1500() {
        let feb29 = julian_to_days(1500, 2, 29);
        assert_eq!(days_to_julian(feb29), (1500, 2, 29));
        assert_eq!(julian_to_days(1500, 3, 1) - feb29, 1);
    }

    #[test]
    fn leap_rules() {
        assert!(is_gregorian_leap(2000));
        assert!(!is_gregorian_leap(1900));
        assert!(is_gregorian_leap(2012));
        assert!(is_julian_leap(1900));
        assert!(is_julian_leap(0));
        assert!(is_julian_leap(-4));
        assert!(!is_julian_leap(-1));
    }

    #[test]
    fn astronomical_years() {
        assert_eq!(to_astronomical(1), Some(1));
        assert_eq!(to_astronomical(-1), Some(0));
        assert_eq!(to_astronomical(-2), Some(-1));
        assert_eq!(to_astronomical(0), None);
        assert_eq!(from_astronomical(0), Some(-1));
        assert_eq!(from_astronomical(-1), Some(-2));
        assert_eq!(from_astronomical(2012), Some(2012));
        assert_eq!(from_astronomical(i64::MAX), None);
    }
}
