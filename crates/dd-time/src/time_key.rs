//! Time key codec.
//!
//! A [`TimeKey`] is the integer form of a time of day, `HHMMSS`
//! (e.g. `103300` for 10:33:00, `93000` for 09:30:00).

use std::str::FromStr;

use dd_core::errors::{Error, Result};
use serde::{Serialize, Serializer};

/// A validated `HHMMSS` time key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeKey(u32);

impl TimeKey {
    /// Midnight, `000000`.
    pub const MIDNIGHT: TimeKey = TimeKey(0);

    /// Last second of the day, `235959`.
    pub const LAST: TimeKey = TimeKey(235_959);

    /// Validate a raw `HHMMSS` integer.
    pub fn new(raw: u32) -> Result<Self> {
        let (h, m, s) = (raw / 10_000, raw / 100 % 100, raw % 100);
        if h > 23 {
            return Err(Error::invalid_time_key(
                raw,
                format!("hour {h} out of range [0, 23]"),
            ));
        }
        if m > 59 {
            return Err(Error::invalid_time_key(
                raw,
                format!("minute {m} out of range [0, 59]"),
            ));
        }
        if s > 59 {
            return Err(Error::invalid_time_key(
                raw,
                format!("second {s} out of range [0, 59]"),
            ));
        }
        Ok(TimeKey(raw))
    }

    /// Build the key of an (hour, minute, second) triple.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self> {
        Self::new(hour as u32 * 10_000 + minute as u32 * 100 + second as u32)
    }

    /// Build the key for `secs` seconds after midnight.
    pub fn from_seconds(secs: u32) -> Result<Self> {
        if secs >= 86_400 {
            return Err(Error::invalid_time_key(
                secs,
                "seconds after midnight out of range [0, 86400)",
            ));
        }
        Self::from_hms((secs / 3600) as u8, (secs / 60 % 60) as u8, (secs % 60) as u8)
    }

    /// Return the raw integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Return `(hour, minute, second)` as integers.
    pub fn hms(self) -> (u8, u8, u8) {
        (
            (self.0 / 10_000) as u8,
            (self.0 / 100 % 100) as u8,
            (self.0 % 100) as u8,
        )
    }

    /// Return `(hour, minute, second)` as two-digit strings.
    pub fn hms_str(self) -> (String, String, String) {
        let (h, m, s) = self.hms();
        (format!("{h:02}"), format!("{m:02}"), format!("{s:02}"))
    }

    /// Seconds after midnight.
    pub fn seconds(self) -> u32 {
        let (h, m, s) = self.hms();
        h as u32 * 3600 + m as u32 * 60 + s as u32
    }
}

impl TryFrom<u32> for TimeKey {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        TimeKey::new(raw)
    }
}

impl FromStr for TimeKey {
    type Err = Error;

    /// Parse a six-digit `HHMMSS` string.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_time_key(s, "expected six digits HHMMSS"));
        }
        let raw: u32 = s
            .parse()
            .map_err(|e: std::num::ParseIntError| Error::invalid_time_key(s, e.to_string()))?;
        TimeKey::new(raw)
    }
}

impl std::fmt::Display for TimeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for TimeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "TimeKey({h:02}:{m:02}:{s:02})")
    }
}

impl Serialize for TimeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_hours_decompose() {
        let k = TimeKey::new(93_000).unwrap();
        assert_eq!(k.hms(), (9, 30, 0));
        assert_eq!(
            k.hms_str(),
            ("09".to_string(), "30".to_string(), "00".to_string())
        );
        assert_eq!("093000".parse::<TimeKey>().unwrap(), k);
    }

    #[test]
    fn rejects_invalid() {
        assert!(TimeKey::new(240_000).is_err());
        assert!(TimeKey::new(126_000).is_err());
        assert!(TimeKey::new(125_960).is_err());
        assert!(TimeKey::from_seconds(86_400).is_err());
        assert!("9300".parse::<TimeKey>().is_err());
    }

    #[test]
    fn seconds_roundtrip() {
        for secs in [0, 59, 3_600, 45_296, 86_399] {
            assert_eq!(TimeKey::from_seconds(secs).unwrap().seconds(), secs);
        }
        assert_eq!(TimeKey::from_seconds(86_399).unwrap(), TimeKey::LAST);
    }
}
