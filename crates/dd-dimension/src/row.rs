//! `DateRow` — one row of the date dimension.

use dd_core::errors::Result;
use dd_time::{DateKey, HolidayCalendar};
use serde::Serialize;

use crate::engine::{self, HalfYearDayRule};
use crate::holiday::HolidayClassifier;

/// Every derived attribute of one date key, in column order.
///
/// Serializes with one field per column, named as in [`DateRow::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct DateRow {
    pub date_key: DateKey,
    pub full_date: String,
    pub day: u8,
    pub day_of_week: u8,
    pub day_of_quarter: u16,
    pub day_of_year_half: u16,
    pub day_of_year: u16,
    pub day_num_overall: i32,
    pub is_last_day_in_month: bool,
    pub is_weekend: bool,
    pub week: u8,
    pub weekday_name: &'static str,
    pub weekday_abbrev: &'static str,
    pub week_of_month: u8,
    pub week_num_overall: i32,
    pub week_begin_date: String,
    pub week_begin_date_key: DateKey,
    pub month: u8,
    pub month_name: &'static str,
    pub month_abbrev: &'static str,
    pub month_of_quarter: u8,
    pub month_num_overall: i32,
    pub quarter: u8,
    pub quarter_name: String,
    pub quarter_abbrev: String,
    pub quarter_num_overall: i32,
    pub year_half: u8,
    pub year_half_name: String,
    pub year_half_abbrev: String,
    pub year_half_num_overall: i32,
    pub year: u16,
    pub year_month: u32,
    pub year_month_full: String,
    pub is_leap_year: bool,
    pub is_peak_week: bool,
    pub is_holiday: bool,
    pub holiday_name: &'static str,
}

impl DateRow {
    /// Column names, in serialization order.
    pub const COLUMNS: [&'static str; 37] = [
        "date_key",
        "full_date",
        "day",
        "day_of_week",
        "day_of_quarter",
        "day_of_year_half",
        "day_of_year",
        "day_num_overall",
        "is_last_day_in_month",
        "is_weekend",
        "week",
        "weekday_name",
        "weekday_abbrev",
        "week_of_month",
        "week_num_overall",
        "week_begin_date",
        "week_begin_date_key",
        "month",
        "month_name",
        "month_abbrev",
        "month_of_quarter",
        "month_num_overall",
        "quarter",
        "quarter_name",
        "quarter_abbrev",
        "quarter_num_overall",
        "year_half",
        "year_half_name",
        "year_half_abbrev",
        "year_half_num_overall",
        "year",
        "year_month",
        "year_month_full",
        "is_leap_year",
        "is_peak_week",
        "is_holiday",
        "holiday_name",
    ];

    /// Derive the row for `key`.
    pub fn derive<C: HolidayCalendar>(
        key: DateKey,
        classifier: &HolidayClassifier<C>,
        half_year_day: HalfYearDayRule,
    ) -> Result<Self> {
        let week_begin_date_key = engine::week_begin_date_key(key)?;
        let holiday = classifier.classify(key)?;
        Ok(DateRow {
            date_key: key,
            full_date: engine::full_date(key),
            day: engine::day(key),
            day_of_week: engine::day_of_week(key),
            day_of_quarter: engine::day_of_quarter(key)?,
            day_of_year_half: half_year_day.day_of_year_half(key),
            day_of_year: engine::day_of_year(key),
            day_num_overall: engine::day_num_overall(key),
            is_last_day_in_month: engine::is_last_day_in_month(key),
            is_weekend: engine::is_weekend(key),
            week: engine::week(key),
            weekday_name: engine::weekday_name(key),
            weekday_abbrev: engine::weekday_abbrev(key),
            week_of_month: engine::week_of_month(key)?,
            week_num_overall: engine::week_num_overall(key),
            week_begin_date: engine::full_date(week_begin_date_key),
            week_begin_date_key,
            month: engine::month(key),
            month_name: engine::month_name(key),
            month_abbrev: engine::month_abbrev(key),
            month_of_quarter: engine::month_of_quarter(key),
            month_num_overall: engine::month_num_overall(key),
            quarter: engine::quarter(key),
            quarter_name: engine::quarter_name(key),
            quarter_abbrev: engine::quarter_abbrev(key),
            quarter_num_overall: engine::quarter_num_overall(key),
            year_half: engine::year_half(key),
            year_half_name: engine::year_half_name(key),
            year_half_abbrev: engine::year_half_abbrev(key),
            year_half_num_overall: engine::year_half_num_overall(key),
            year: engine::year(key),
            year_month: engine::year_month(key),
            year_month_full: engine::year_month_full(key),
            is_leap_year: engine::is_leap_year(key),
            is_peak_week: classifier.is_peak_week(key)?,
            is_holiday: holiday.is_some(),
            holiday_name: holiday.map_or(crate::holiday::NOT_APPLICABLE, |h| h.name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_friday_row() {
        let key = DateKey::new(20231124).unwrap();
        let classifier = HolidayClassifier::united_states();
        let row = DateRow::derive(key, &classifier, HalfYearDayRule::default()).unwrap();
        assert_eq!(row.full_date, "2023-11-24");
        assert_eq!(row.day_of_week, 6);
        assert_eq!(row.weekday_name, "Friday");
        assert_eq!(row.week_begin_date, "2023-11-20");
        assert_eq!(row.week_begin_date_key.get(), 20231120);
        assert_eq!(row.quarter_abbrev, "Q4");
        assert_eq!(row.year_half_name, "2023H2");
        assert_eq!(row.year_month, 202311);
        assert!(row.is_holiday);
        assert!(row.is_peak_week);
        assert_eq!(row.holiday_name, "Black Friday");
    }
}
