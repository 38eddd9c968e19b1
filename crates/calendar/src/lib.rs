//! # tempora-calendar
//!
//! Calendar arithmetic over a hybrid Julian/Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateFields"] -->|"Chronology::from_fields()"| B["Instant"]
//!     B -->|"Chronology::fields()"| A
//!     B -->|"add() / between()"| B
//!     B -->|"truncate() / round()"| B
//!     C["RoundingMode"] --> D["round() / Duration::to_units()"]
//!     B -->|"Duration::between()"| E["Duration"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tempora_calendar::{Chronology, DateField, DateUnit, RoundingMode};
//!
//! let chrono = Chronology::utc();
//!
//! // Field-wise arithmetic clamps the day of month
//! let jan31 = chrono.new_date(2012, 1, 31).unwrap();
//! let feb = chrono.add(jan31, 1, DateUnit::Months).unwrap();
//! assert_eq!(chrono.fields(feb).ymd(), (2012, 2, 29));
//!
//! // Whole units between two instants
//! let jan29 = chrono.new_date(2012, 1, 29).unwrap();
//! let feb28 = chrono.new_date(2012, 2, 28).unwrap();
//! assert_eq!(chrono.between(jan29, feb28, DateUnit::Months).unwrap(), 0);
//!
//! // Rounding to a field boundary
//! let t = chrono.parse("1973-01-22T12:30:30.500").unwrap();
//! let day = chrono.round(t, DateField::Day, RoundingMode::Down).unwrap();
//! assert_eq!(chrono.format(day), "1973-01-22T00:00:00.000");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `chronology` | Field conversion, add/between, truncate/round |
//! | `config` | Chronology configuration and cutover choice |
//! | `civil` | Julian and Gregorian day-count algorithms |
//! | `date` | Calendar field values, eras, parsing |
//! | `instant` | Points on the time line |
//! | `duration` | Calendar-independent elapsed time |
//! | `field` | `DateField` and `DateUnit` |
//! | `rounding` | Rounding modes |
//! | `month`, `day` | Month and day-of-week enumerations |
//! | `error` | Error types |

mod chronology;
mod civil;
mod config;
mod date;
mod day;
mod duration;
mod error;
mod field;
mod instant;
mod month;
mod rounding;

pub use chronology::Chronology;
pub use config::{ChronologyConfig, Cutover};
pub use date::{DateFields, Era};
pub use day::Day;
pub use duration::Duration;
pub use error::CalendarError;
pub use field::{DateField, DateUnit};
pub use instant::Instant;
pub use month::Month;
pub use rounding::RoundingMode;
