use tempora_calendar::{Chronology, ChronologyConfig, DateField, DateUnit, Instant};
use tempora_interval::{IntervalError, Period, Relation, complement_within};

fn at(text: &str) -> Instant {
    Chronology::utc().parse(text).unwrap()
}

fn period(start: &str, end: &str) -> Period {
    Period::new(at(start), at(end)).unwrap()
}

#[test]
fn month_periods_tile_a_year() {
    let cal = Chronology::utc();
    let year = Period::of(&cal, at("2012-06-15"), DateField::Year).unwrap();
    assert_eq!(year, period("2012-01-01", "2013-01-01"));
    let months = year.split(&cal, 1, DateUnit::Months).unwrap();
    assert_eq!(months.len(), 12);
    for pair in months.windows(2) {
        assert_eq!(pair[0].relation(&pair[1]), Relation::Precedes);
    }
    let days: i64 = months
        .iter()
        .map(|m| m.length(&cal, DateUnit::Days).unwrap())
        .sum();
    assert_eq!(days, 366);
    assert_eq!(months[1], Period::of(&cal, at("2012-02-29"), DateField::Month).unwrap());
}

#[test]
fn split_last_piece_is_partial() {
    let cal = Chronology::utc();
    let p = period("2012-01-01", "2012-01-01T10:00");
    let pieces = p.split(&cal, 3, DateUnit::Hours).unwrap();
    assert_eq!(pieces.len(), 4);
    assert_eq!(pieces[3], period("2012-01-01T09:00", "2012-01-01T10:00"));
}

#[test]
fn split_negative_amount() {
    let p = period("2012-01-01", "2012-01-02");
    assert_eq!(
        p.split(&Chronology::utc(), -1, DateUnit::Hours).unwrap_err(),
        IntervalError::InvalidSplit { amount: -1 }
    );
}

#[test]
fn local_day_under_offset() {
    let cal = Chronology::new(ChronologyConfig::new().with_offset_minutes(-300)).unwrap();
    let day = Period::of(&cal, Instant::EPOCH, DateField::Day).unwrap();
    assert_eq!(cal.format(day.start()), "1969-12-31T00:00:00.000");
    assert_eq!(day.start().as_millis(), -19 * 3_600_000);
    assert_eq!(day.duration().unwrap().as_millis(), 86_400_000);
}

#[test]
fn cutover_month_is_short() {
    let cal = Chronology::utc();
    let october = Period::of(&cal, at("1582-10-20"), DateField::Month).unwrap();
    assert_eq!(october.length(&cal, DateUnit::Days).unwrap(), 21);
}

#[test]
fn working_hours_outside_meetings() {
    let day = period("2012-03-05T09:00", "2012-03-05T17:00");
    let meetings = [
        period("2012-03-05T10:00", "2012-03-05T11:00"),
        period("2012-03-05T10:30", "2012-03-05T12:00"),
        period("2012-03-05T16:00", "2012-03-05T18:00"),
    ];
    let ranges: Vec<_> = meetings.iter().map(|m| *m.range()).collect();
    let free: Vec<Period> = complement_within(day.range(), &ranges)
        .into_iter()
        .map(Period::from)
        .collect();
    assert_eq!(
        free,
        vec![
            period("2012-03-05T09:00", "2012-03-05T10:00"),
            period("2012-03-05T12:00", "2012-03-05T16:00"),
        ]
    );
}

#[test]
fn gap_and_union() {
    let a = period("2012-01-01", "2012-01-05");
    let b = period("2012-01-08", "2012-01-10");
    assert_eq!(a.relation(&b), Relation::Before);
    assert_eq!(a.gap(&b), Some(period("2012-01-05", "2012-01-08")));
    assert_eq!(a.union(&b), None);
    let c = period("2012-01-05", "2012-01-08");
    assert_eq!(a.union(&c), Some(period("2012-01-01", "2012-01-08")));
    assert!(!a.overlaps(&c));
}
