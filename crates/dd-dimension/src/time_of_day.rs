//! Time-of-day dimension.
//!
//! Display attributes of a [`TimeKey`].  Unlike the date side there is no
//! cross-row state: every attribute is a formatting of hour, minute, and
//! second.

use dd_core::ensure;
use dd_core::errors::Result;
use dd_time::TimeKey;
use serde::Serialize;
use tracing::info;

/// Time zone reported for every row.
pub const TIME_ZONE: &str = "UTC";

/// Hour on a 12-hour clock, 1–12 (midnight and noon are 12).
pub fn hour_12(key: TimeKey) -> u8 {
    match key.hms().0 {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// `"AM"` before noon, `"PM"` from noon on.
pub fn meridiem(key: TimeKey) -> &'static str {
    if key.hms().0 < 12 {
        "AM"
    } else {
        "PM"
    }
}

/// 1 in the first thirty minutes of the hour, 2 in the second.
pub fn half_hour(key: TimeKey) -> u8 {
    if key.hms().1 >= 30 {
        2
    } else {
        1
    }
}

/// `HH:MM:SS AM` on a 12-hour clock.
///
/// Hours after noon are reduced by twelve; hour 0 stays `00`, matching
/// existing tables (the short form shows midnight as `12`).
pub fn time_12_full_string(key: TimeKey) -> String {
    let (h, m, s) = key.hms();
    let h = if h > 12 { h - 12 } else { h };
    format!("{h:02}:{m:02}:{s:02} {}", meridiem(key))
}

/// `HH:MM PM` on a 12-hour clock.
pub fn time_12_short_string(key: TimeKey) -> String {
    let (_, m, _) = key.hms();
    format!("{:02}:{m:02} {}", hour_12(key), meridiem(key))
}

/// Every display attribute of one time key, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct TimeRow {
    pub time_key: TimeKey,
    pub full_time: String,
    pub time_string: String,
    pub time_12_full_string: String,
    pub time_12_short_string: String,
    pub time_zone: &'static str,
    pub hour: u8,
    pub hour_string: String,
    pub hour_12: u8,
    pub hour_12_string: String,
    pub meridiem: &'static str,
    pub half_hour: u8,
    pub minute: u8,
    pub minute_string: String,
    pub minute_code: u16,
    pub minute_full_string: String,
    pub second: u8,
    pub second_string: String,
}

impl TimeRow {
    /// Column names, in serialization order.
    pub const COLUMNS: [&'static str; 18] = [
        "time_key",
        "full_time",
        "time_string",
        "time_12_full_string",
        "time_12_short_string",
        "time_zone",
        "hour",
        "hour_string",
        "hour_12",
        "hour_12_string",
        "meridiem",
        "half_hour",
        "minute",
        "minute_string",
        "minute_code",
        "minute_full_string",
        "second",
        "second_string",
    ];

    /// Derive the row for `key`.
    pub fn derive(key: TimeKey) -> Self {
        let (hour, minute, second) = key.hms();
        let (hs, ms, ss) = key.hms_str();
        let full_time = format!("{hs}:{ms}:{ss}");
        let hour_12 = hour_12(key);
        TimeRow {
            time_key: key,
            time_string: full_time.clone(),
            full_time,
            time_12_full_string: time_12_full_string(key),
            time_12_short_string: time_12_short_string(key),
            time_zone: TIME_ZONE,
            hour,
            hour_12,
            hour_12_string: format!("{hour_12:02}"),
            meridiem: meridiem(key),
            half_hour: half_hour(key),
            minute,
            minute_code: hour as u16 * 100 + minute as u16,
            minute_full_string: format!("{hs}:{ms}"),
            hour_string: hs,
            minute_string: ms,
            second,
            second_string: ss,
        }
    }
}

/// Every `step`-th second of the day, starting at midnight.
#[derive(Debug, Clone, Copy)]
pub struct TimeDimension {
    step_seconds: u32,
}

impl Default for TimeDimension {
    fn default() -> Self {
        Self { step_seconds: 1 }
    }
}

impl TimeDimension {
    /// A dimension sampling every `step_seconds` seconds.
    ///
    /// # Errors
    /// [`dd_core::Error::Precondition`] unless `step_seconds` is positive and
    /// divides 86 400.
    pub fn new(step_seconds: u32) -> Result<Self> {
        ensure!(
            step_seconds > 0 && 86_400 % step_seconds == 0,
            "step of {step_seconds} s does not divide the day evenly"
        );
        Ok(Self { step_seconds })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        (86_400 / self.step_seconds) as usize
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Derive every row, from midnight on.
    pub fn rows(&self) -> Result<Vec<TimeRow>> {
        let rows = (0..86_400u32)
            .step_by(self.step_seconds as usize)
            .map(|secs| TimeKey::from_seconds(secs).map(TimeRow::derive))
            .collect::<Result<Vec<_>>>()?;
        info!(rows = rows.len(), step = self.step_seconds, "time dimension derived");
        Ok(rows)
    }
}
