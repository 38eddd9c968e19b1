//! How two intervals sit relative to each other.

use std::fmt;

/// The position of an interval `A` relative to an interval `B`.
///
/// Exactly one relation holds for any pair of valid half-open intervals.
/// `A = [a1, a2)` and `B = [b1, b2)`:
///
/// | Relation | Condition |
/// |----------|-----------|
/// | `Before` | `a2 < b1` |
/// | `Precedes` | `a2 == b1` |
/// | `Leading` | `a1 < b1 < a2 < b2` |
/// | `Contains` | `a1 <= b1`, `b2 <= a2`, not both equal |
/// | `Equals` | `a1 == b1`, `a2 == b2` |
/// | `Contained` | `b1 <= a1`, `a2 <= b2`, not both equal |
/// | `Trailing` | `b1 < a1 < b2 < a2` |
/// | `Follows` | `a1 == b2` |
/// | `After` | `a1 > b2` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `A` ends strictly before `B` starts.
    Before,
    /// `A` ends exactly where `B` starts.
    Precedes,
    /// `A` starts first and ends inside `B`.
    Leading,
    /// `A` covers all of `B`.
    Contains,
    /// Same bounds.
    Equals,
    /// `B` covers all of `A`.
    Contained,
    /// `A` starts inside `B` and ends after it.
    Trailing,
    /// `A` starts exactly where `B` ends.
    Follows,
    /// `A` starts strictly after `B` ends.
    After,
}

impl Relation {
    /// All relations, from `Before` to `After`.
    pub const ALL: [Relation; 9] = [
        Relation::Before,
        Relation::Precedes,
        Relation::Leading,
        Relation::Contains,
        Relation::Equals,
        Relation::Contained,
        Relation::Trailing,
        Relation::Follows,
        Relation::After,
    ];

    /// Returns the relation of `B` to `A` given the relation of `A` to `B`.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Before => Relation::After,
            Relation::Precedes => Relation::Follows,
            Relation::Leading => Relation::Trailing,
            Relation::Contains => Relation::Contained,
            Relation::Equals => Relation::Equals,
            Relation::Contained => Relation::Contains,
            Relation::Trailing => Relation::Leading,
            Relation::Follows => Relation::Precedes,
            Relation::After => Relation::Before,
        }
    }

    /// Returns `true` if the intervals share no point.
    pub fn is_disjoint(self) -> bool {
        matches!(
            self,
            Relation::Before | Relation::Precedes | Relation::Follows | Relation::After
        )
    }

    fn name(self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::Precedes => "precedes",
            Relation::Leading => "leading",
            Relation::Contains => "contains",
            Relation::Equals => "equals",
            Relation::Contained => "contained",
            Relation::Trailing => "trailing",
            Relation::Follows => "follows",
            Relation::After => "after",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
