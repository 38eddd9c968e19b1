//! # tempora-interval
//!
//! Half-open interval algebra. [`Range`] works over any ordered value;
//! [`Period`] is a range of [`Instant`](tempora_calendar::Instant)s with
//! calendar-aware helpers on top.
//!
//! ## Relations
//!
//! Any two ranges stand in exactly one of nine [`Relation`]s, each with an
//! inverse obtained by swapping the operands:
//!
//! ```text
//! A                   [-----)
//! B before                     [--)   A Before B
//! B precedes                [--)      A Precedes B
//! B leading              [------)     A Leading B
//! B inside              [-)           A Contains B
//! B around          [---------)       A Contained B
//! B trailing      [-----)             A Trailing B
//! ```
//!
//! `Equals`, `Follows` and `After` complete the set.
//!
//! ## Quick Start
//!
//! ```
//! use tempora_interval::{Range, Relation, complement_within};
//!
//! let a = Range::new(1, 10).unwrap();
//! let b = Range::new(3, 7).unwrap();
//!
//! assert_eq!(a.relation(&b), Relation::Contains);
//! assert_eq!(b.relation(&a), Relation::Contained);
//! assert_eq!(a.intersection(&b), Some(b));
//! assert_eq!(complement_within(&a, &[b]).len(), 2);
//! ```

mod error;
mod period;
mod range;
mod relation;
mod set;

pub use error::IntervalError;
pub use period::Period;
pub use range::Range;
pub use relation::Relation;
pub use set::{coalesce, complement_within, intersect_all};
