//! `Date` type.
//!
//! Dates are stored as a serial number of days in the proleptic Gregorian
//! calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use crate::month::Month;
use crate::weekday::Weekday;
use dd_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial falls outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_enum(&self) -> Month {
        Month::from_number(self.month()).expect("ymd_from_serial yields months in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        weekday_of_serial(self.0)
    }

    /// Return the ISO 8601 week-numbering year and week (1–53).
    ///
    /// Early-January dates may belong to the last week of the previous ISO
    /// year, late-December dates to week 1 of the next.
    pub fn iso_week(&self) -> (u16, u8) {
        let y = self.year();
        let doy = self.day_of_year() as i32;
        let wd = self.weekday().ordinal() as i32;
        let week = (doy - wd + 10) / 7;
        if week < 1 {
            (y - 1, weeks_in_iso_year(y - 1))
        } else if week > weeks_in_iso_year(y) as i32 {
            (y + 1, 1)
        } else {
            (y, week as u8)
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial)
                .map_err(|_| Error::Date(format!("{self} {n:+} days is out of range"))),
            None => Err(Error::Date(format!("{self} {n:+} days overflows"))),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2023, 11)` returns the
    /// fourth Thursday of November 2023 (2023-11-23).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let skip = ((weekday.ordinal() as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year:04}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`.
    pub fn last_weekday(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, 1)?.end_of_month();
        let back = ((last.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7))
            as u8;
        Date::from_ymd(year, month, last.day_of_month() - back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of ISO 8601 weeks (52 or 53) in the week-numbering `year`.
///
/// A year has 53 weeks when it starts on a Thursday, or is a leap year
/// starting on a Wednesday.
pub fn weeks_in_iso_year(year: u16) -> u8 {
    let jan1 = weekday_of_serial(serial_from_ymd(year, 1, 1));
    match jan1 {
        Weekday::Thursday => 53,
        Weekday::Wednesday if is_leap_year(year) => 53,
        _ => 52,
    }
}

fn weekday_of_serial(serial: i32) -> Weekday {
    // serial 1 → Monday, serial 2 → Tuesday, …
    let w = ((serial - 1).rem_euclid(7) + 1) as u8;
    Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 0001-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let prior = year as i32 - 1;
    // Days in whole years [1, year), Gregorian leap rule
    let mut serial = prior * 365 + prior / 4 - prior / 100 + prior / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // 146 097 days per 400-year cycle
    let mut y = ((serial as i64 - 1) * 400 / 146_097 + 1) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1, 1, 1).serial(), 1);
        assert_eq!(date(1, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(9999, 12, 31), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2000, 1, 1),
            (2023, 6, 15),
            (2050, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_ymd() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        // 2023-01-01 is a Sunday
        assert_eq!(date(2023, 1, 1).weekday(), Weekday::Sunday);
        // 2000-01-01 is a Saturday
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2023, 1, 1).day_of_year(), 1);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
    }

    #[test]
    fn test_iso_week() {
        // 2000-01-01 belongs to week 52 of 1999
        assert_eq!(date(2000, 1, 1).iso_week(), (1999, 52));
        assert_eq!(date(2000, 1, 3).iso_week(), (2000, 1));
        // 2005-01-01 belongs to week 53 of 2004
        assert_eq!(date(2005, 1, 1).iso_week(), (2004, 53));
        // 2024-12-30 is in week 1 of 2025
        assert_eq!(date(2024, 12, 30).iso_week(), (2025, 1));
        assert_eq!(date(2023, 1, 16).iso_week(), (2023, 3));
    }

    #[test]
    fn test_weeks_in_iso_year() {
        assert_eq!(weeks_in_iso_year(2004), 53); // starts on Thursday
        assert_eq!(weeks_in_iso_year(2020), 53); // leap, starts on Wednesday
        assert_eq!(weeks_in_iso_year(2023), 52);
        assert_eq!(weeks_in_iso_year(1999), 52);
    }

    #[test]
    fn test_add_days_range() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert_eq!(date(2023, 12, 31).add_days(1).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
    }

    #[test]
    fn test_end_of_month() {
        let eom = date(2024, 2, 15).end_of_month();
        assert_eq!(eom.day_of_month(), 29);
        assert!(eom.is_end_of_month());
        assert!(!date(2023, 2, 28).add_days(-1).unwrap().is_end_of_month());
    }

    #[test]
    fn test_nth_and_last_weekday() {
        // Thanksgiving 2023 = 4th Thursday of November
        let d = Date::nth_weekday(4, Weekday::Thursday, 2023, 11).unwrap();
        assert_eq!(d, date(2023, 11, 23));
        // Memorial Day 2023 = last Monday of May
        let m = Date::last_weekday(Weekday::Monday, 2023, 5).unwrap();
        assert_eq!(m, date(2023, 5, 29));
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2023, 1, 16).to_string(), "2023-01-16");
        assert_eq!(format!("{:?}", date(7, 2, 3)), "Date(0007-02-03)");
    }
}
