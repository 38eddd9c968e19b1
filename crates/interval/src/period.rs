//! Half-open spans of time with calendar-aware operations.

use std::fmt;

use tempora_calendar::{CalendarError, Chronology, DateField, DateUnit, Duration, Instant};
use tracing::{debug, instrument};

use crate::error::IntervalError;
use crate::range::Range;
use crate::relation::Relation;

/// A non-empty span of time `[start, end)`.
///
/// # Example
///
/// ```
/// use tempora_calendar::{Chronology, DateField, DateUnit};
/// use tempora_interval::Period;
///
/// let chrono = Chronology::utc();
/// let t = chrono.parse("2012-02-10T08:00").unwrap();
/// let february = Period::of(&chrono, t, DateField::Month).unwrap();
/// assert_eq!(february.length(&chrono, DateUnit::Days).unwrap(), 29);
///
/// let weeks = february.split(&chrono, 1, DateUnit::Weeks).unwrap();
/// assert_eq!(weeks.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    range: Range<Instant>,
}

impl Period {
    /// Creates the period `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBounds`] unless `start < end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, IntervalError> {
        Range::new(start, end).map(Self::from_range)
    }

    /// Wraps a range of instants.
    pub fn from_range(range: Range<Instant>) -> Self {
        Self { range }
    }

    /// Returns the `field` period containing `instant`, such as its local
    /// day or month.
    pub fn of(
        chronology: &Chronology,
        instant: Instant,
        field: DateField,
    ) -> Result<Self, IntervalError> {
        let start = chronology.truncate(instant, field)?;
        let end = chronology.add(start, 1, field.unit())?;
        Self::new(start, end)
    }

    /// Returns the included start.
    pub fn start(&self) -> Instant {
        *self.range.lower()
    }

    /// Returns the excluded end.
    pub fn end(&self) -> Instant {
        *self.range.upper()
    }

    /// Returns the underlying range.
    pub fn range(&self) -> &Range<Instant> {
        &self.range
    }

    /// Returns the elapsed time from start to end.
    pub fn duration(&self) -> Result<Duration, IntervalError> {
        Ok(Duration::between(self.start(), self.end())?)
    }

    /// Returns the number of whole `unit`s the period spans.
    pub fn length(&self, chronology: &Chronology, unit: DateUnit) -> Result<i64, IntervalError> {
        Ok(chronology.between(self.start(), self.end(), unit)?)
    }

    /// Cuts the period into consecutive pieces of `amount` units each.
    ///
    /// Piece boundaries are measured from the start, so splitting
    /// January 31 onward by months gives pieces ending on the last day of
    /// February, then March 31. The last piece is cut short at the end.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidSplit`] if `amount < 1`.
    #[instrument(level = "debug", skip(chronology))]
    pub fn split(
        &self,
        chronology: &Chronology,
        amount: i64,
        unit: DateUnit,
    ) -> Result<Vec<Period>, IntervalError> {
        if amount < 1 {
            return Err(IntervalError::InvalidSplit { amount });
        }
        let mut pieces = Vec::new();
        let mut lower = self.start();
        let mut step: i64 = 1;
        while lower < self.end() {
            let upper = match amount.checked_mul(step) {
                Some(offset) => match chronology.add(self.start(), offset, unit) {
                    Ok(next) => next.min(self.end()),
                    Err(CalendarError::Overflow { .. }) => self.end(),
                    Err(e) => return Err(e.into()),
                },
                None => self.end(),
            };
            pieces.push(Period::from_range(Range::from_ordered(lower, upper)));
            lower = upper;
            step += 1;
        }
        debug!(pieces = pieces.len(), "period split");
        Ok(pieces)
    }

    /// Returns `true` if `start <= instant < end`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.range.contains(&instant)
    }

    /// Returns `true` if `other` lies entirely in `self`.
    pub fn encloses(&self, other: &Period) -> bool {
        self.range.encloses(&other.range)
    }

    /// Returns `true` if the periods share at least one instant.
    pub fn overlaps(&self, other: &Period) -> bool {
        self.range.overlaps(&other.range)
    }

    /// Classifies how `self` sits relative to `other`.
    pub fn relation(&self, other: &Period) -> Relation {
        self.range.relation(&other.range)
    }

    /// See [`Range::intersection`].
    pub fn intersection(&self, other: &Period) -> Option<Period> {
        self.range.intersection(&other.range).map(Self::from_range)
    }

    /// See [`Range::union`].
    pub fn union(&self, other: &Period) -> Option<Period> {
        self.range.union(&other.range).map(Self::from_range)
    }

    /// See [`Range::gap`].
    pub fn gap(&self, other: &Period) -> Option<Period> {
        self.range.gap(&other.range).map(Self::from_range)
    }

    /// See [`Range::difference`].
    pub fn difference(&self, other: &Period) -> Vec<Period> {
        self.range
            .difference(&other.range)
            .into_iter()
            .map(Self::from_range)
            .collect()
    }

    /// Formats the period in the local time of `chronology`.
    pub fn format(&self, chronology: &Chronology) -> String {
        format!(
            "[{}, {})",
            chronology.format(self.start()),
            chronology.format(self.end())
        )
    }
}

impl From<Range<Instant>> for Period {
    fn from(range: Range<Instant>) -> Self {
        Self::from_range(range)
    }
}

impl fmt::Display for Period {
    /// UTC rendering; use [`Period::format`] for other chronologies.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.range, f)
    }
}
