//! Half-open intervals over any ordered value.

use std::cmp::Ordering;
use std::fmt;

use crate::error::IntervalError;
use crate::relation::Relation;

/// A non-empty half-open interval `[lower, upper)`.
///
/// The lower bound is included and the upper bound excluded, so two ranges
/// sharing an endpoint touch without overlapping.
///
/// # Example
///
/// ```
/// use tempora_interval::{Range, Relation};
///
/// let a = Range::new(1, 10).unwrap();
/// let b = Range::new(3, 7).unwrap();
/// assert_eq!(a.relation(&b), Relation::Contains);
/// assert_eq!(
///     a.difference(&b),
///     vec![Range::new(1, 3).unwrap(), Range::new(7, 10).unwrap()]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    pub(crate) lower: T,
    pub(crate) upper: T,
}

impl<T: PartialOrd + Clone> Range<T> {
    /// Creates the range `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBounds`] unless `lower < upper`. This
    /// also rejects bounds that do not compare, such as NaN.
    pub fn new(lower: T, upper: T) -> Result<Self, IntervalError>
    where
        T: fmt::Display,
    {
        if lower < upper {
            Ok(Self { lower, upper })
        } else {
            Err(IntervalError::InvalidBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            })
        }
    }

    /// Creates a range from two endpoints given in either order.
    pub fn between(a: T, b: T) -> Result<Self, IntervalError>
    where
        T: fmt::Display,
    {
        if b < a { Self::new(b, a) } else { Self::new(a, b) }
    }

    /// Builds a range from bounds already known to satisfy `lower < upper`.
    pub(crate) fn from_ordered(lower: T, upper: T) -> Self {
        debug_assert!(lower < upper);
        Self { lower, upper }
    }

    /// Returns the included lower bound.
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the excluded upper bound.
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Returns `true` if `lower <= value < upper`.
    pub fn contains(&self, value: &T) -> bool {
        self.lower <= *value && *value < self.upper
    }

    /// Returns `true` if every point of `other` lies in `self`.
    pub fn encloses(&self, other: &Self) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Returns `true` if every point of `self` lies in `other`.
    pub fn within(&self, other: &Self) -> bool {
        other.encloses(self)
    }

    /// Returns `true` if the ranges share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }

    /// Classifies how `self` sits relative to `other`.
    pub fn relation(&self, other: &Self) -> Relation {
        let (a1, a2) = (&self.lower, &self.upper);
        let (b1, b2) = (&other.lower, &other.upper);
        match order(a2, b1) {
            Ordering::Less => return Relation::Before,
            Ordering::Equal => return Relation::Precedes,
            Ordering::Greater => {}
        }
        match order(a1, b2) {
            Ordering::Greater => return Relation::After,
            Ordering::Equal => return Relation::Follows,
            Ordering::Less => {}
        }
        match (order(a1, b1), order(a2, b2)) {
            (Ordering::Equal, Ordering::Equal) => Relation::Equals,
            (Ordering::Less | Ordering::Equal, Ordering::Equal | Ordering::Greater) => {
                Relation::Contains
            }
            (Ordering::Equal | Ordering::Greater, Ordering::Less | Ordering::Equal) => {
                Relation::Contained
            }
            (Ordering::Less, Ordering::Less) => Relation::Leading,
            (Ordering::Greater, Ordering::Greater) => Relation::Trailing,
        }
    }

    /// Returns the points common to both ranges, or `None` when they do not
    /// overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::from_ordered(
            max(&self.lower, &other.lower).clone(),
            min(&self.upper, &other.upper).clone(),
        ))
    }

    /// Returns the smallest range covering both, or `None` when a gap
    /// separates them. Touching ranges merge.
    pub fn union(&self, other: &Self) -> Option<Self> {
        if self.upper < other.lower || other.upper < self.lower {
            return None;
        }
        Some(Self::from_ordered(
            min(&self.lower, &other.lower).clone(),
            max(&self.upper, &other.upper).clone(),
        ))
    }

    /// Returns the range strictly between two separated ranges, or `None`
    /// when they touch or overlap.
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.upper < other.lower {
            Some(Self::from_ordered(self.upper.clone(), other.lower.clone()))
        } else if other.upper < self.lower {
            Some(Self::from_ordered(other.upper.clone(), self.lower.clone()))
        } else {
            None
        }
    }

    /// Returns the parts of `self` not covered by `other`, in ascending
    /// order: none, one or two ranges.
    pub fn difference(&self, other: &Self) -> Vec<Self> {
        let head = || Self::from_ordered(self.lower.clone(), other.lower.clone());
        let tail = || Self::from_ordered(other.upper.clone(), self.upper.clone());
        match self.relation(other) {
            Relation::Before | Relation::Precedes | Relation::Follows | Relation::After => {
                vec![self.clone()]
            }
            Relation::Equals | Relation::Contained => Vec::new(),
            Relation::Leading => vec![head()],
            Relation::Trailing => vec![tail()],
            Relation::Contains => {
                let mut pieces = Vec::with_capacity(2);
                if self.lower < other.lower {
                    pieces.push(head());
                }
                if other.upper < self.upper {
                    pieces.push(tail());
                }
                pieces
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// Total order over bounds of valid ranges, which always compare.
pub(crate) fn order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn min<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b < a { b } else { a }
}

fn max<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b > a { b } else { a }
}
