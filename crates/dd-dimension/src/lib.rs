//! # dd-dimension
//!
//! Calendar derivation engine, holiday and peak-week classifier, and the
//! date and time dimension rows built from them.
//!
//! ```
//! use dd_dimension::{engine, HolidayClassifier};
//! use dd_time::DateKey;
//!
//! let key = DateKey::new(20231124).unwrap();
//! assert_eq!(engine::day_of_week(key), 6);
//! assert_eq!(engine::year_half_name(key), "2023H2");
//!
//! let holidays = HolidayClassifier::united_states();
//! assert_eq!(holidays.holiday_name(key).unwrap(), "Black Friday");
//! assert!(holidays.is_peak_week(key).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DateDimension` — rows over a range of date keys.
pub mod dimension;

/// Pure per-key calendar attributes.
pub mod engine;

/// Holiday and peak-week classification.
pub mod holiday;

/// `DateRow` — one row of the date dimension.
pub mod row;

/// Time-of-day rows.
pub mod time_of_day;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use dimension::{DateDimension, DEFAULT_END, DEFAULT_START};
pub use engine::HalfYearDayRule;
pub use holiday::{Holiday, HolidayClassifier, NOT_APPLICABLE};
pub use row::DateRow;
pub use time_of_day::{TimeDimension, TimeRow};
