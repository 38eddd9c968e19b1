//! Rounding policies for values that fall between two representable
//! boundaries.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// How a value lying strictly between two boundaries is mapped to one of
/// them.
///
/// The variants follow the usual decimal rounding modes. For calendar
/// rounding the value always lies above its lower boundary, so `Up` and
/// `Ceiling` pick the later boundary and `Down` and `Floor` the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// To the nearest boundary; ties away from zero.
    HalfUp,
    /// To the nearest boundary; ties toward zero.
    HalfDown,
    /// To the nearest boundary; ties to the even neighbour.
    HalfEven,
    /// Asserts the value is already on a boundary; fails otherwise.
    Unnecessary,
}

impl RoundingMode {
    /// All modes.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Divides `numerator` by `denominator`, rounding the quotient with this
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DivisionByZero`] for a zero denominator,
    /// [`CalendarError::Overflow`] for `i64::MIN / -1`, and
    /// [`CalendarError::InexactDivision`] for `Unnecessary` when the division
    /// leaves a remainder.
    ///
    /// # Example
    ///
    /// ```
    /// use tempora_calendar::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::HalfEven.divide(5, 2).unwrap(), 2);
    /// assert_eq!(RoundingMode::HalfEven.divide(7, 2).unwrap(), 4);
    /// assert_eq!(RoundingMode::Floor.divide(-7, 2).unwrap(), -4);
    /// ```
    pub fn divide(self, numerator: i64, denominator: i64) -> Result<i64, CalendarError> {
        if denominator == 0 {
            return Err(CalendarError::DivisionByZero);
        }
        let quotient = numerator
            .checked_div(denominator)
            .ok_or(CalendarError::Overflow {
                operation: "divide",
            })?;
        let remainder = numerator % denominator;
        let negative = (numerator < 0) != (denominator < 0);
        self.resolve(quotient, remainder, denominator, negative)
            .ok_or(CalendarError::InexactDivision {
                numerator,
                denominator,
            })
    }

    /// Rounds a truncated quotient given the remainder it left behind.
    ///
    /// `negative` is the sign of the exact quotient. `HalfEven` looks at the
    /// parity of `quotient`. Returns `None` for `Unnecessary` with a non-zero
    /// remainder.
    pub(crate) fn resolve(
        self,
        quotient: i64,
        remainder: i64,
        divisor: i64,
        negative: bool,
    ) -> Option<i64> {
        if remainder == 0 {
            return Some(quotient);
        }
        let twice = 2 * i128::from(remainder).abs();
        let divisor = i128::from(divisor).abs();
        let away = match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => twice >= divisor,
            RoundingMode::HalfDown => twice > divisor,
            RoundingMode::HalfEven => twice > divisor || (twice == divisor && quotient % 2 != 0),
            RoundingMode::Unnecessary => return None,
        };
        // a non-zero remainder means |divisor| >= 2, so |quotient| cannot be
        // at the edge of the i64 range
        match (away, negative) {
            (false, _) => Some(quotient),
            (true, false) => Some(quotient + 1),
            (true, true) => Some(quotient - 1),
        }
    }

    fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::Floor => "floor",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::Unnecessary => "unnecessary",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = CalendarError;

    /// Case-insensitive; `-`, `_` and spaces are ignored, so `half-up`,
    /// `HALF_UP` and `HalfUp` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            "ceiling" | "ceil" => Ok(RoundingMode::Ceiling),
            "floor" => Ok(RoundingMode::Floor),
            "halfup" => Ok(RoundingMode::HalfUp),
            "halfdown" => Ok(RoundingMode::HalfDown),
            "halfeven" => Ok(RoundingMode::HalfEven),
            "unnecessary" | "exact" => Ok(RoundingMode::Unnecessary),
            _ => Err(CalendarError::UnknownName {
                kind: "rounding mode",
                name: s.to_string(),
            }),
        }
    }
}
