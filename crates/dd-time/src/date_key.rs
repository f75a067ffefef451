//! Date key codec.
//!
//! A [`DateKey`] is the canonical integer form of a date, `YYYYMMDD`
//! (e.g. `20230116`).  This module is the only place that decomposes a key
//! into its year, month, and day digits; everything else goes through
//! [`ymd_int`], [`ymd_str`], or [`DateKey::to_date`].

use std::str::FromStr;

use dd_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{days_in_month, Date};

/// A validated `YYYYMMDD` date key.
///
/// Every `DateKey` decomposes into a valid proleptic Gregorian date, so code
/// holding one never has to re-check it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(u32);

impl DateKey {
    /// Smallest key: 0001-01-01.
    pub const MIN: DateKey = DateKey(10_101);

    /// Largest key: 9999-12-31.
    pub const MAX: DateKey = DateKey(99_991_231);

    /// Validate a raw `YYYYMMDD` integer.
    ///
    /// # Errors
    /// [`Error::InvalidDateKey`] if the month is outside 1–12, the day is not
    /// valid for the month and year, or the year is 0.
    pub fn new(raw: u32) -> Result<Self> {
        let (year, month, day) = split(raw);
        if year == 0 || year > 9999 {
            return Err(Error::invalid_date_key(
                raw,
                format!("year {year} out of range [1, 9999]"),
            ));
        }
        let year = year as u16;
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date_key(
                raw,
                format!("month {month} out of range [1, 12]"),
            ));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(Error::invalid_date_key(
                raw,
                format!("day {day} out of range [1, {max_day}]"),
            ));
        }
        Ok(DateKey(raw))
    }

    /// Build the key of a (year, month, day) triple.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        Date::from_ymd(year, month, day)
            .map(Self::from_date)
            .map_err(|e| Error::invalid_date_key(format!("{year}-{month}-{day}"), e.to_string()))
    }

    /// Encode a date.
    pub fn from_date(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        DateKey(y as u32 * 10_000 + m as u32 * 100 + d as u32)
    }

    /// Decode into a [`Date`].
    pub fn to_date(self) -> Date {
        let (y, m, d) = self.ymd();
        Date::from_ymd(y, m, d).expect("DateKey is validated on construction")
    }

    /// Return the raw integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Return `(year, month, day)` as integers.
    pub fn ymd(self) -> (u16, u8, u8) {
        let (y, m, d) = split(self.0);
        (y as u16, m, d)
    }

    /// Return `(year, month, day)` as zero-padded strings (`"2023"`, `"02"`, `"05"`).
    pub fn ymd_str(self) -> (String, String, String) {
        let (y, m, d) = self.ymd();
        (format!("{y:04}"), format!("{m:02}"), format!("{d:02}"))
    }

    /// Return the key `n` days away.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.to_date().add_days(n).map(Self::from_date)
    }

    /// Iterate over every key from `start` to `end`, both inclusive.
    pub fn range_inclusive(start: DateKey, end: DateKey) -> DateKeyRange {
        DateKeyRange {
            next: Some(start.to_date()),
            end: end.to_date(),
        }
    }
}

fn split(raw: u32) -> (u32, u8, u8) {
    (raw / 10_000, (raw / 100 % 100) as u8, (raw % 100) as u8)
}

/// Encode a date as a key (`date_to_key`).
pub fn date_to_key(date: Date) -> DateKey {
    DateKey::from_date(date)
}

/// Decode a raw `YYYYMMDD` integer into a date (`key_to_date`).
///
/// # Errors
/// [`Error::InvalidDateKey`] if the key is not a valid date.
pub fn key_to_date(raw: u32) -> Result<Date> {
    DateKey::new(raw).map(DateKey::to_date)
}

/// Decompose a key into integer year, month, and day.
pub fn ymd_int(key: DateKey) -> (u16, u8, u8) {
    key.ymd()
}

/// Decompose a key into fixed-width year, month, and day strings.
pub fn ymd_str(key: DateKey) -> (String, String, String) {
    key.ymd_str()
}

// ── Range iteration ───────────────────────────────────────────────────────────

/// Iterator over consecutive date keys, see [`DateKey::range_inclusive`].
#[derive(Debug, Clone)]
pub struct DateKeyRange {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateKeyRange {
    type Item = DateKey;

    fn next(&mut self) -> Option<DateKey> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.add_days(1).ok();
        Some(DateKey::from_date(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(d) if d <= self.end => (self.end - d + 1) as usize,
            _ => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateKeyRange {}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<u32> for DateKey {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        DateKey::new(raw)
    }
}

impl From<DateKey> for u32 {
    fn from(key: DateKey) -> u32 {
        key.0
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        DateKey::from_date(date)
    }
}

impl FromStr for DateKey {
    type Err = Error;

    /// Parse an eight-digit `YYYYMMDD` string.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_date_key(s, "expected eight digits YYYYMMDD"));
        }
        let raw: u32 = s
            .parse()
            .map_err(|e: std::num::ParseIntError| Error::invalid_date_key(s, e.to_string()))?;
        DateKey::new(raw)
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateKey({})", self.0)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        DateKey::new(raw).map_err(serde::de::Error::custom)
    }
}
