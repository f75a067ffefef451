//! # dd-time
//!
//! Date, date key, weekday, month, and holiday calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty calendar.
pub mod calendar;

/// Concrete holiday calendars (country specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DateKey` — the `YYYYMMDD` integer codec.
pub mod date_key;

/// `Month` — month of the year.
pub mod month;

/// `TimeKey` — the `HHMMSS` integer codec.
pub mod time_key;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NoHolidays};
pub use calendars::united_states::UnitedStatesFederal;
pub use date::Date;
pub use date_key::{date_to_key, key_to_date, ymd_int, ymd_str, DateKey};
pub use month::Month;
pub use time_key::TimeKey;
pub use weekday::Weekday;
