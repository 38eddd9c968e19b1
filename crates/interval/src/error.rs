//! Error types for the tempora-interval crate.

use tempora_calendar::CalendarError;

/// Error type for all fallible operations in the tempora-interval crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// Returned when the lower bound is not strictly before the upper bound.
    #[error("lower bound {lower} must be before upper bound {upper}")]
    InvalidBounds {
        /// The rejected lower bound, as text.
        lower: String,
        /// The rejected upper bound, as text.
        upper: String,
    },

    /// Returned when a period is split into steps of less than one unit.
    #[error("split amount must be >= 1, got {amount}")]
    InvalidSplit {
        /// The invalid amount.
        amount: i64,
    },

    /// A calendar computation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bounds_message() {
        let e = IntervalError::InvalidBounds {
            lower: "5".into(),
            upper: "3".into(),
        };
        assert_eq!(e.to_string(), "lower bound 5 must be before upper bound 3");
    }

    #[test]
    fn invalid_split_message() {
        let e = IntervalError::InvalidSplit { amount: 0 };
        assert_eq!(e.to_string(), "split amount must be >= 1, got 0");
    }

    #[test]
    fn calendar_errors_pass_through() {
        let e: IntervalError = CalendarError::Overflow { operation: "add months" }.into();
        assert_eq!(e.to_string(), "arithmetic overflow in add months");
        assert_eq!(
            e,
            IntervalError::Calendar(CalendarError::Overflow {
                operation: "add months"
            })
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntervalError>();
    }

    #[test]
    fn error_is_clone() {
        let e = IntervalError::InvalidSplit { amount: -2 };
        assert_eq!(e.clone(), e);
    }
}
