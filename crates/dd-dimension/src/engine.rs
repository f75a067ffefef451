//! Calendar derivation engine.
//!
//! Pure functions from a [`DateKey`] to the calendar attributes of a
//! dimension row.  Within-period positions are computed by summing the
//! [`DAYS_PER_MONTH`] table rather than by date subtraction.  Overall
//! sequence numbers count whole periods since [`EPOCH_YEAR`]: January 1,
//! 2000 is day 1, week 1, month 1, quarter 1, and half-year 1.
//!
//! Keys before the epoch get zero or negative sequence numbers, extending
//! the same arithmetic backwards.

use std::str::FromStr;

use dd_core::errors::{Error, Result};
use dd_core::fail;
use dd_time::date::{is_leap_year as is_leap, weeks_in_iso_year};
use dd_time::{DateKey, Month, Weekday};
use serde::{Deserialize, Serialize};

/// First year counted by the overall sequence numbers.
pub const EPOCH_YEAR: u16 = 2000;

/// Days per month in a common year, indexed from 1; slot 0 is unused.
pub const DAYS_PER_MONTH: [u16; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Sum `period_len` over the whole years between the epoch and `year`.
///
/// Negative when `year` precedes the epoch.
fn whole_years_since_epoch(year: u16, period_len: impl Fn(u16) -> i32) -> i32 {
    if year >= EPOCH_YEAR {
        (EPOCH_YEAR..year).map(period_len).sum()
    } else {
        -(year..EPOCH_YEAR).map(period_len).sum::<i32>()
    }
}

/// Sum of [`DAYS_PER_MONTH`] over months `from..to`.
fn month_days(from: u8, to: u8) -> u16 {
    (from..to).map(|m| DAYS_PER_MONTH[m as usize]).sum()
}

// ── Day ───────────────────────────────────────────────────────────────────────

/// `YYYY-MM-DD`, e.g. `2023-01-16`.
pub fn full_date(key: DateKey) -> String {
    let (y, m, d) = key.ymd_str();
    format!("{y}-{m}-{d}")
}

/// Day of the month, 1–31.
pub fn day(key: DateKey) -> u8 {
    key.ymd().2
}

/// The weekday of `key`.
pub fn weekday(key: DateKey) -> Weekday {
    key.to_date().weekday()
}

/// Position within the week, Sunday = 1 … Saturday = 7.
///
/// This is not ISO numbering (which starts on Monday); retail reporting
/// weeks are numbered from Sunday.
pub fn day_of_week(key: DateKey) -> u8 {
    weekday(key).sunday_ordinal()
}

/// Position within the quarter, 1–92.
///
/// # Errors
/// [`dd_core::Error::LogicInvariantViolation`] if the quarter derived from
/// the month is not 1–4, which a valid key cannot produce.
pub fn day_of_quarter(key: DateKey) -> Result<u16> {
    let (_, month, day) = key.ymd();
    let q = quarter(key);
    let first_month = match q {
        1 => 1,
        2 => 4,
        3 => 7,
        4 => 10,
        _ => fail!("day_of_quarter({key}): impossible quarter {q}"),
    };
    let mut doq = month_days(first_month, month) + day as u16;
    if month == 3 && is_leap_year(key) {
        doq += 1;
    }
    Ok(doq)
}

/// How [`day_of_year_half`] numbers days.
///
/// `Cumulative` counts from January 1 or July 1 and applies the leap-day
/// correction only after February.  `Legacy` reproduces tables produced by
/// the earlier generator: first-half days gain one in every leap year (from
/// January 1 on), and second-half days are the plain day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfYearDayRule {
    /// Running count within the half year, 1–184.
    #[default]
    Cumulative,
    /// Bug-compatible numbering of existing tables.
    Legacy,
}

impl HalfYearDayRule {
    /// Apply this rule to `key`.
    pub fn day_of_year_half(self, key: DateKey) -> u16 {
        match self {
            HalfYearDayRule::Cumulative => day_of_year_half(key),
            HalfYearDayRule::Legacy => day_of_year_half_legacy(key),
        }
    }
}

impl FromStr for HalfYearDayRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cumulative" => Ok(HalfYearDayRule::Cumulative),
            "legacy" => Ok(HalfYearDayRule::Legacy),
            other => Err(Error::InvalidArgument(format!(
                "unknown half-year day rule {other:?} (expected \"cumulative\" or \"legacy\")"
            ))),
        }
    }
}

/// Position within the half year, 1–184, counted from January 1 or July 1.
pub fn day_of_year_half(key: DateKey) -> u16 {
    let (_, month, day) = key.ymd();
    if month < 7 {
        let mut doyh = month_days(1, month) + day as u16;
        if month > 2 && is_leap_year(key) {
            doyh += 1;
        }
        doyh
    } else {
        month_days(7, month) + day as u16
    }
}

/// [`HalfYearDayRule::Legacy`] numbering.
pub fn day_of_year_half_legacy(key: DateKey) -> u16 {
    let (_, month, day) = key.ymd();
    if month < 7 {
        let leap = u16::from(is_leap_year(key));
        month_days(1, month) + leap + day as u16
    } else {
        day as u16
    }
}

/// Position within the year, 1–366.
pub fn day_of_year(key: DateKey) -> u16 {
    let (_, month, day) = key.ymd();
    let mut doy = month_days(1, month) + day as u16;
    if month > 2 && is_leap_year(key) {
        doy += 1;
    }
    doy
}

/// Days since the epoch; 2000-01-01 is 1.
pub fn day_num_overall(key: DateKey) -> i32 {
    let days = whole_years_since_epoch(year(key), |y| if is_leap(y) { 366 } else { 365 });
    days + day_of_year(key) as i32
}

/// `true` on the last calendar day of the month.
pub fn is_last_day_in_month(key: DateKey) -> bool {
    let (_, month, day) = key.ymd();
    if month == 2 && is_leap_year(key) {
        return day == 29;
    }
    day as u16 == DAYS_PER_MONTH[month as usize]
}

/// `true` on Saturday and Sunday.
pub fn is_weekend(key: DateKey) -> bool {
    matches!(day_of_week(key), 1 | 7)
}

// ── Week ──────────────────────────────────────────────────────────────────────

/// ISO 8601 week number, 1–53.
pub fn week(key: DateKey) -> u8 {
    key.to_date().iso_week().1
}

/// `"Sunday"` … `"Saturday"`.
pub fn weekday_name(key: DateKey) -> &'static str {
    weekday(key).long_name()
}

/// `"Sun"` … `"Sat"`.
pub fn weekday_abbrev(key: DateKey) -> &'static str {
    weekday(key).short_name()
}

/// Week of the month, 1–5.
///
/// The week starts of the month are those of its 1st, 8th, 15th, 22nd, and
/// 29th day (see [`week_begin_date_key`]); a date belongs to the latest of
/// them it is on or after.  The first of the month is always week 1.
///
/// # Errors
/// Date arithmetic past 9999-12-31, or
/// [`dd_core::Error::LogicInvariantViolation`] if the date precedes its own
/// first week start.
pub fn week_of_month(key: DateKey) -> Result<u8> {
    let (y, m, d) = key.ymd();
    if d == 1 {
        return Ok(1);
    }
    let first = DateKey::from_ymd(y, m, 1)?;
    let current = key.to_date();
    for n in (0..5u8).rev() {
        let start = week_begin_date_key(first.add_days(7 * n as i32)?)?;
        if current >= start.to_date() {
            return Ok(n + 1);
        }
    }
    fail!("week_of_month({key}): date precedes the first week start of its month")
}

/// Weeks since the epoch; the week containing 2000-01-01 is 1.
///
/// Counts whole ISO week-numbering years, so the sequence advances by one
/// every Monday, including across year boundaries.
pub fn week_num_overall(key: DateKey) -> i32 {
    let (iso_year, iso_week) = key.to_date().iso_week();
    let weeks = whole_years_since_epoch(iso_year, |y| weeks_in_iso_year(y) as i32);
    // 2000-01-01 and 2000-01-02 close ISO week 52 of 1999
    weeks + iso_week as i32 + 1
}

/// Key of the Monday that starts the week of `key`.
///
/// Tuesday through Saturday walk back to the preceding Monday and Monday
/// maps to itself.  Sunday (`day_of_week == 1`) is returned unchanged
/// rather than walking back six days; existing tables rely on this.
pub fn week_begin_date_key(key: DateKey) -> Result<DateKey> {
    let dow = day_of_week(key);
    if dow == 1 {
        return Ok(key);
    }
    key.add_days(-(dow as i32 - 2))
}

/// [`week_begin_date_key`] formatted as `YYYY-MM-DD`.
pub fn week_begin_date(key: DateKey) -> Result<String> {
    week_begin_date_key(key).map(full_date)
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// Month number, 1–12.
pub fn month(key: DateKey) -> u8 {
    key.ymd().1
}

fn month_enum(key: DateKey) -> Month {
    key.to_date().month_enum()
}

/// `"January"` … `"December"`.
pub fn month_name(key: DateKey) -> &'static str {
    month_enum(key).long_name()
}

/// `"Jan"` … `"Dec"`.
pub fn month_abbrev(key: DateKey) -> &'static str {
    month_enum(key).short_name()
}

/// Month within the quarter, 1–3.
pub fn month_of_quarter(key: DateKey) -> u8 {
    (month(key) - 1) % 3 + 1
}

/// Months since the epoch; January 2000 is 1.
pub fn month_num_overall(key: DateKey) -> i32 {
    whole_years_since_epoch(year(key), |_| 12) + month(key) as i32
}

// ── Quarter ───────────────────────────────────────────────────────────────────

/// Quarter, 1–4.
pub fn quarter(key: DateKey) -> u8 {
    (month(key) - 1) / 3 + 1
}

/// `"Quarter 1"` … `"Quarter 4"`.
pub fn quarter_name(key: DateKey) -> String {
    format!("Quarter {}", quarter(key))
}

/// `"Q1"` … `"Q4"`.
pub fn quarter_abbrev(key: DateKey) -> String {
    format!("Q{}", quarter(key))
}

/// Quarters since the epoch; Q1 2000 is 1.
pub fn quarter_num_overall(key: DateKey) -> i32 {
    whole_years_since_epoch(year(key), |_| 4) + quarter(key) as i32
}

// ── Half year ─────────────────────────────────────────────────────────────────

/// Half of the year, 1 (January–June) or 2 (July–December).
pub fn year_half(key: DateKey) -> u8 {
    if month(key) < 7 {
        1
    } else {
        2
    }
}

/// `YYYYH#`, e.g. `2023H1`.
pub fn year_half_name(key: DateKey) -> String {
    format!("{}H{}", key.ymd_str().0, year_half(key))
}

/// `"H1"` or `"H2"`.
pub fn year_half_abbrev(key: DateKey) -> String {
    format!("H{}", year_half(key))
}

/// Half years since the epoch; H1 2000 is 1.
pub fn year_half_num_overall(key: DateKey) -> i32 {
    whole_years_since_epoch(year(key), |_| 2) + year_half(key) as i32
}

// ── Year ──────────────────────────────────────────────────────────────────────

/// The year.
pub fn year(key: DateKey) -> u16 {
    key.ymd().0
}

/// `YYYYMM` as an integer, e.g. `202301`.
pub fn year_month(key: DateKey) -> u32 {
    let (y, m, _) = key.ymd();
    y as u32 * 100 + m as u32
}

/// `YYYY-MM`, e.g. `2023-01`.
pub fn year_month_full(key: DateKey) -> String {
    let (y, m, _) = key.ymd_str();
    format!("{y}-{m}")
}

/// Gregorian leap-year test on the year of `key`.
///
/// For a bare four-digit year use [`dd_time::date::is_leap_year`].
pub fn is_leap_year(key: DateKey) -> bool {
    is_leap(year(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: u32) -> DateKey {
        DateKey::new(raw).unwrap()
    }

    #[test]
    fn day_of_week_is_sunday_based() {
        assert_eq!(day_of_week(key(20230101)), 1); // Sunday
        assert_eq!(day_of_week(key(20230102)), 2); // Monday
        assert_eq!(day_of_week(key(20230107)), 7); // Saturday
        assert_eq!(weekday_name(key(20230101)), "Sunday");
        assert_eq!(weekday_abbrev(key(20230104)), "Wed");
    }

    #[test]
    fn weekend_flags() {
        assert!(is_weekend(key(20230107)));
        assert!(is_weekend(key(20230108)));
        assert!(!is_weekend(key(20230109)));
        assert!(!is_weekend(key(20230113)));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(key(20240101)));
        assert!(!is_leap_year(key(20230101)));
        assert!(is_leap_year(key(20000101)));
        assert!(!is_leap_year(key(21000101)));
    }

    #[test]
    fn day_of_year_boundaries() {
        assert_eq!(day_of_year(key(20230101)), 1);
        assert_eq!(day_of_year(key(20231231)), 365);
        assert_eq!(day_of_year(key(20241231)), 366);
        assert_eq!(day_of_year(key(20240301)), 61);
        assert_eq!(day_of_year(key(20230301)), 60);
    }

    #[test]
    fn day_of_quarter_values() {
        assert_eq!(day_of_quarter(key(20230116)).unwrap(), 16);
        assert_eq!(day_of_quarter(key(20230331)).unwrap(), 90);
        assert_eq!(day_of_quarter(key(20240331)).unwrap(), 91);
        assert_eq!(day_of_quarter(key(20230401)).unwrap(), 1);
        assert_eq!(day_of_quarter(key(20230930)).unwrap(), 92);
        assert_eq!(day_of_quarter(key(20231231)).unwrap(), 92);
    }

    #[test]
    fn day_of_year_half_rules() {
        assert_eq!(day_of_year_half(key(20230101)), 1);
        assert_eq!(day_of_year_half(key(20230630)), 181);
        assert_eq!(day_of_year_half(key(20240630)), 182);
        assert_eq!(day_of_year_half(key(20230701)), 1);
        assert_eq!(day_of_year_half(key(20230815)), 46);
        assert_eq!(day_of_year_half(key(20231231)), 184);

        assert_eq!(day_of_year_half_legacy(key(20230630)), 181);
        assert_eq!(day_of_year_half_legacy(key(20240101)), 2);
        assert_eq!(day_of_year_half_legacy(key(20230815)), 15);
        assert_eq!(
            HalfYearDayRule::Legacy.day_of_year_half(key(20231231)),
            31
        );
        assert_eq!(
            HalfYearDayRule::default().day_of_year_half(key(20231231)),
            184
        );
        assert_eq!("Legacy".parse::<HalfYearDayRule>(), Ok(HalfYearDayRule::Legacy));
        assert!("fiscal".parse::<HalfYearDayRule>().is_err());
    }

    #[test]
    fn last_day_in_month() {
        assert!(is_last_day_in_month(key(20230131)));
        assert!(is_last_day_in_month(key(20230228)));
        assert!(!is_last_day_in_month(key(20240228)));
        assert!(is_last_day_in_month(key(20240229)));
        assert!(!is_last_day_in_month(key(20230430).add_days(-1).unwrap()));
    }

    #[test]
    fn week_begin_walks_back_to_monday() {
        // 2023-01-18 is a Wednesday
        assert_eq!(week_begin_date_key(key(20230118)).unwrap(), key(20230116));
        assert_eq!(week_begin_date_key(key(20230116)).unwrap(), key(20230116));
        assert_eq!(week_begin_date_key(key(20230121)).unwrap(), key(20230116));
        assert_eq!(week_begin_date(key(20230103)).unwrap(), "2023-01-02");
    }

    #[test]
    fn week_begin_leaves_sunday_unchanged() {
        assert_eq!(week_begin_date_key(key(20230122)).unwrap(), key(20230122));
    }

    #[test]
    fn week_of_month_values() {
        // March 2023 starts on a Wednesday
        assert_eq!(week_of_month(key(20230301)).unwrap(), 1);
        assert_eq!(week_of_month(key(20230305)).unwrap(), 1);
        assert_eq!(week_of_month(key(20230306)).unwrap(), 2);
        assert_eq!(week_of_month(key(20230327)).unwrap(), 5);
        assert_eq!(week_of_month(key(20230331)).unwrap(), 5);
        // January 2023 starts on a Sunday
        assert_eq!(week_of_month(key(20230102)).unwrap(), 1);
        assert_eq!(week_of_month(key(20230108)).unwrap(), 2);
    }

    #[test]
    fn overall_sequences_at_epoch() {
        let k = key(20000101);
        assert_eq!(day_num_overall(k), 1);
        assert_eq!(week_num_overall(k), 1);
        assert_eq!(week_num_overall(key(20000102)), 1);
        assert_eq!(week_num_overall(key(20000103)), 2);
        assert_eq!(month_num_overall(k), 1);
        assert_eq!(quarter_num_overall(k), 1);
        assert_eq!(year_half_num_overall(k), 1);
    }

    #[test]
    fn overall_sequences_later() {
        assert_eq!(day_num_overall(key(20010101)), 367);
        assert_eq!(month_num_overall(key(20230116)), 277);
        assert_eq!(quarter_num_overall(key(20230401)), 94);
        assert_eq!(year_half_num_overall(key(20230701)), 48);
        // 2004 has 53 ISO weeks; 2005-01-01 closes its last one
        assert_eq!(
            week_num_overall(key(20050101)),
            week_num_overall(key(20041227))
        );
        assert_eq!(
            week_num_overall(key(20050103)),
            week_num_overall(key(20050101)) + 1
        );
    }

    #[test]
    fn overall_sequences_before_epoch() {
        assert_eq!(day_num_overall(key(19991231)), 0);
        assert_eq!(month_num_overall(key(19991201)), 0);
        assert_eq!(week_num_overall(key(19991226)), 0);
    }

    #[test]
    fn names_and_codes() {
        let k = key(20230116);
        assert_eq!(full_date(k), "2023-01-16");
        assert_eq!(month_name(k), "January");
        assert_eq!(month_abbrev(key(20230215)), "Feb");
        assert_eq!(quarter(key(20230401)), 2);
        assert_eq!(quarter_name(k), "Quarter 1");
        assert_eq!(quarter_abbrev(key(20231001)), "Q4");
        assert_eq!(year_half_name(k), "2023H1");
        assert_eq!(year_half_abbrev(key(20230701)), "H2");
        assert_eq!(year_month(k), 202301);
        assert_eq!(year_month_full(k), "2023-01");
        assert_eq!(week(k), 3);
    }

    #[test]
    fn month_of_quarter_cycles() {
        let expected = [1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3];
        for (m, want) in (1..=12u32).zip(expected) {
            assert_eq!(month_of_quarter(key(20230001 + m * 100)), want, "month {m}");
        }
    }
}
