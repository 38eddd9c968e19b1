use std::cmp::Ordering;

use tempora_calendar::{
    CalendarError, Chronology, ChronologyConfig, DateField, Instant, RoundingMode,
};

fn parse(text: &str) -> Instant {
    Chronology::utc().parse(text).unwrap()
}

fn rounded(text: &str, field: DateField, mode: RoundingMode) -> String {
    let cal = Chronology::utc();
    cal.format(cal.round(parse(text), field, mode).unwrap())
}

#[test]
fn truncate_each_field() {
    let cal = Chronology::utc();
    let t = parse("1973-01-22T12:30:30.500");
    let cases = [
        (DateField::Year, "1973-01-01T00:00:00.000"),
        (DateField::Month, "1973-01-01T00:00:00.000"),
        (DateField::Day, "1973-01-22T00:00:00.000"),
        (DateField::Hour, "1973-01-22T12:00:00.000"),
        (DateField::Minute, "1973-01-22T12:30:00.000"),
        (DateField::Second, "1973-01-22T12:30:30.000"),
        (DateField::Millisecond, "1973-01-22T12:30:30.500"),
    ];
    for (field, expected) in cases {
        assert_eq!(cal.format(cal.truncate(t, field).unwrap()), expected, "{field}");
    }
}

#[test]
fn truncate_before_epoch() {
    let cal = Chronology::utc();
    let t = parse("1969-12-31T18:45:00");
    assert_eq!(
        cal.format(cal.truncate(t, DateField::Day).unwrap()),
        "1969-12-31T00:00:00.000"
    );
    assert_eq!(
        cal.format(cal.truncate(t, DateField::Year).unwrap()),
        "1969-01-01T00:00:00.000"
    );
}

#[test]
fn round_day_all_modes() {
    let t = "1973-01-22T12:30:30.500";
    let cases = [
        (RoundingMode::Up, "1973-01-23"),
        (RoundingMode::Down, "1973-01-22"),
        (RoundingMode::Ceiling, "1973-01-23"),
        (RoundingMode::Floor, "1973-01-22"),
        (RoundingMode::HalfUp, "1973-01-23"),
        (RoundingMode::HalfDown, "1973-01-23"),
        (RoundingMode::HalfEven, "1973-01-23"),
    ];
    for (mode, expected) in cases {
        assert_eq!(
            rounded(t, DateField::Day, mode),
            format!("{expected}T00:00:00.000"),
            "{mode}"
        );
    }
}

#[test]
fn round_day_ties() {
    // 1973-01-22 is day 1117 since the epoch, 1973-01-23 is day 1118.
    let noon = "1973-01-22T12:00";
    assert_eq!(rounded(noon, DateField::Day, RoundingMode::HalfUp), "1973-01-23T00:00:00.000");
    assert_eq!(rounded(noon, DateField::Day, RoundingMode::HalfDown), "1973-01-22T00:00:00.000");
    assert_eq!(rounded(noon, DateField::Day, RoundingMode::HalfEven), "1973-01-23T00:00:00.000");
    let noon = "1973-01-23T12:00";
    assert_eq!(rounded(noon, DateField::Day, RoundingMode::HalfEven), "1973-01-23T00:00:00.000");
}

#[test]
fn round_month_and_year_ties() {
    // January has 31 days, so its midpoint is the 16th at noon.
    let mid_january = "1973-01-16T12:00";
    assert_eq!(rounded(mid_january, DateField::Month, RoundingMode::HalfUp), "1973-02-01T00:00:00.000");
    assert_eq!(rounded(mid_january, DateField::Month, RoundingMode::HalfDown), "1973-01-01T00:00:00.000");
    assert_eq!(rounded(mid_january, DateField::Month, RoundingMode::HalfEven), "1973-01-01T00:00:00.000");
    assert_eq!(rounded("1973-01-16T11:59", DateField::Month, RoundingMode::HalfUp), "1973-01-01T00:00:00.000");

    // 2012 has 366 days, so its midpoint is 183 days in: July 2.
    let mid_2012 = "2012-07-02";
    assert_eq!(rounded(mid_2012, DateField::Year, RoundingMode::HalfUp), "2013-01-01T00:00:00.000");
    assert_eq!(rounded(mid_2012, DateField::Year, RoundingMode::HalfDown), "2012-01-01T00:00:00.000");
    assert_eq!(rounded(mid_2012, DateField::Year, RoundingMode::HalfEven), "2012-01-01T00:00:00.000");
}

#[test]
fn round_before_epoch() {
    let t = "1969-12-31T18:00";
    assert_eq!(rounded(t, DateField::Day, RoundingMode::HalfUp), "1970-01-01T00:00:00.000");
    assert_eq!(rounded(t, DateField::Day, RoundingMode::Down), "1969-12-31T00:00:00.000");
    assert_eq!(rounded(t, DateField::Day, RoundingMode::Up), "1970-01-01T00:00:00.000");
}

#[test]
fn round_on_boundary_is_identity() {
    let cal = Chronology::utc();
    let t = parse("1973-01-01");
    for field in DateField::ALL {
        for mode in RoundingMode::ALL {
            assert_eq!(cal.round(t, field, mode).unwrap(), t, "{field} {mode}");
        }
    }
}

#[test]
fn round_unnecessary_off_boundary() {
    let cal = Chronology::utc();
    assert_eq!(
        cal.round(parse("1973-01-22T00:00:01"), DateField::Minute, RoundingMode::Unnecessary)
            .unwrap_err(),
        CalendarError::RoundingNecessary {
            field: DateField::Minute
        }
    );
}

#[test]
fn round_down_near_the_last_instant() {
    let cal = Chronology::utc();
    let t = Instant::from_millis(i64::MAX - 1000);
    for (field, mode) in [
        (DateField::Day, RoundingMode::Down),
        (DateField::Year, RoundingMode::Floor),
        (DateField::Month, RoundingMode::Down),
    ] {
        assert_eq!(
            cal.round(t, field, mode).unwrap(),
            cal.truncate(t, field).unwrap(),
            "{field} {mode}"
        );
    }
    assert_eq!(
        cal.format(cal.round(t, DateField::Day, RoundingMode::Down).unwrap()),
        "292278994-08-17T00:00:00.000"
    );
    assert!(matches!(
        cal.round(t, DateField::Day, RoundingMode::Up),
        Err(CalendarError::Overflow { .. })
    ));
}

#[test]
fn truncate_uses_local_midnight() {
    let cal = Chronology::new(ChronologyConfig::new().with_offset_minutes(60)).unwrap();
    let utc = Chronology::utc();
    let t = cal.new_date_time(2000, 1, 1, 12, 0, 0, 0).unwrap();
    let midnight = cal.truncate(t, DateField::Day).unwrap();
    assert_eq!(
        midnight.as_millis(),
        utc.new_date(2000, 1, 1).unwrap().as_millis() - 3_600_000
    );
    assert_eq!(cal.format(midnight), "2000-01-01T00:00:00.000");
}

#[test]
fn compare_at_field_precision() {
    let cal = Chronology::utc();
    let early = parse("2012-01-22T01:00");
    let late = parse("2012-01-22T23:00");
    assert!(cal.is_same(early, late, DateField::Day).unwrap());
    assert!(!cal.is_same(early, late, DateField::Hour).unwrap());
    assert_eq!(cal.compare(early, late, DateField::Hour).unwrap(), Ordering::Less);
    assert_eq!(
        cal.compare(parse("2012-01-31"), parse("2012-02-01"), DateField::Month).unwrap(),
        Ordering::Less
    );
    assert_eq!(
        cal.compare(parse("2012-02-01"), parse("2012-01-31"), DateField::Year).unwrap(),
        Ordering::Equal
    );
}
